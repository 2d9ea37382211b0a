//! Filter validation against the region catalog

use crate::catalog::CountryRegionCatalog;
use crate::error::FilterError;
use crate::filter::Filter;

/// Validate a filter
///
/// # Errors
/// - `FilterError::RegionsRequireSingleCountry` if regions are set with zero or several
///   countries
/// - `FilterError::UnknownRegion` if a region is not offered for the selected country
pub fn validate_filter(filter: &Filter, catalog: &CountryRegionCatalog) -> Result<(), FilterError> {
    if filter.regions.is_empty() {
        return Ok(());
    }

    let country = match filter.countries.first() {
        Some(country) if filter.countries.len() == 1 => country,
        _ => {
            return Err(FilterError::RegionsRequireSingleCountry {
                selected: filter.countries.len(),
            })
        }
    };

    match filter
        .regions
        .iter()
        .find(|region| !catalog.contains_region(country, region))
    {
        Some(region) => Err(FilterError::unknown_region(country.as_str(), region.as_str())),
        None => Ok(()),
    }
}

impl Filter {
    /// Validate against the region catalog
    ///
    /// # Errors
    /// See [`validate_filter`].
    #[inline]
    pub fn validate(&self, catalog: &CountryRegionCatalog) -> Result<(), FilterError> {
        validate_filter(self, catalog)
    }
}
