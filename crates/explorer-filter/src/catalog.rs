//! Country → region catalog and region derivation
//!
//! Regions are only meaningful within a single country. The catalog is supplied by the
//! filter-options endpoint and never mutated by the filter engine.

use crate::filter::{Filter, ValueSet};
use crate::option::{CountryRegionOption, SelectOption};
use std::collections::HashMap;

/// Region options for each country
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryRegionCatalog {
    regions: HashMap<String, Vec<SelectOption<String>>>,
}

impl CountryRegionCatalog {
    /// Create empty catalog
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build catalog from the API's `country_regions` list
    ///
    /// A later entry for the same country replaces an earlier one.
    #[must_use]
    pub fn from_options(options: Vec<CountryRegionOption>) -> Self {
        options.into_iter().collect()
    }

    /// Set the regions of a country
    pub fn insert(&mut self, country: impl Into<String>, options: Vec<SelectOption<String>>) {
        self.regions.insert(country.into(), options);
    }

    /// Region options of a country
    #[inline]
    #[must_use]
    pub fn options_for(&self, country: &str) -> Option<&[SelectOption<String>]> {
        self.regions.get(country).map(Vec::as_slice)
    }

    /// Whether `region` is offered for `country`
    #[must_use]
    pub fn contains_region(&self, country: &str, region: &str) -> bool {
        self.options_for(country)
            .is_some_and(|options| options.iter().any(|o| o.value == region))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

impl FromIterator<CountryRegionOption> for CountryRegionCatalog {
    fn from_iter<I: IntoIterator<Item = CountryRegionOption>>(iter: I) -> Self {
        let regions = iter
            .into_iter()
            .map(|entry| (entry.country_alpha2_code, entry.options))
            .collect();
        Self { regions }
    }
}

/// Region options valid for a countries selection
///
/// Empty unless exactly one country is selected; empty as well when the catalog has no
/// entry for that country.
#[must_use]
pub fn derive_regions(
    countries: &ValueSet,
    catalog: &CountryRegionCatalog,
) -> Vec<SelectOption<String>> {
    if countries.len() != 1 {
        return Vec::new();
    }
    countries
        .first()
        .and_then(|country| catalog.options_for(country))
        .map(<[_]>::to_vec)
        .unwrap_or_default()
}

/// Derive region options for a filter and drop regions the derivation invalidates
///
/// With zero or several countries the region selection is cleared outright. With one
/// country only regions offered for it are kept.
pub fn apply_region_derivation(
    filter: &mut Filter,
    catalog: &CountryRegionCatalog,
) -> Vec<SelectOption<String>> {
    let options = derive_regions(&filter.countries, catalog);
    if options.is_empty() {
        filter.regions.clear();
    } else {
        filter
            .regions
            .retain(|region| options.iter().any(|o| &o.value == region));
    }
    options
}
