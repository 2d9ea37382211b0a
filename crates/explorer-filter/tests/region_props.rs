use explorer_filter::{
    apply_region_derivation, derive_regions, CountryRegionCatalog, Filter, FilterField,
    SelectOption, ValueSet,
};
use proptest::prelude::*;

const COUNTRIES: [&str; 4] = ["PK", "MX", "KE", "IN"];

fn catalog() -> CountryRegionCatalog {
    let mut catalog = CountryRegionCatalog::new();
    catalog.insert(
        "PK",
        vec![
            SelectOption::new("punjab", "Punjab"),
            SelectOption::new("sindh", "Sindh"),
            SelectOption::new("balochistan", "Balochistan"),
        ],
    );
    catalog.insert("MX", vec![SelectOption::new("oaxaca", "Oaxaca")]);
    catalog.insert("KE", vec![SelectOption::new("nairobi", "Nairobi")]);
    catalog
}

fn countries_strategy() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(
        proptest::sample::select(COUNTRIES.to_vec()).prop_map(String::from),
        0..4,
    )
}

fn regions_strategy() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-z]{3,10}", 0..5)
}

#[test]
fn three_catalog_regions_for_one_country() {
    let countries: ValueSet = ["PK".to_string()].into_iter().collect();
    let options = derive_regions(&countries, &catalog());
    assert_eq!(options.len(), 3);
}

proptest! {
    #[test]
    fn prop_regions_cleared_unless_single_country(
        countries in countries_strategy(),
        regions in regions_strategy(),
    ) {
        let catalog = catalog();
        let mut filter = Filter::new().with_countries(countries);
        filter.regions = regions.into_iter().collect();

        apply_region_derivation(&mut filter, &catalog);

        if filter.countries.len() != 1 {
            prop_assert!(filter.regions.is_empty());
        }
        prop_assert!(filter.validate(&catalog).is_ok());
    }

    #[test]
    fn prop_derivation_is_stable(countries in countries_strategy()) {
        let catalog = catalog();
        let mut filter = Filter::new().with_countries(countries);

        let first = apply_region_derivation(&mut filter, &catalog);
        let snapshot = filter.clone();
        let second = apply_region_derivation(&mut filter, &catalog);

        prop_assert_eq!(first, second);
        prop_assert_eq!(snapshot, filter);
    }

    #[test]
    fn prop_insert_value_never_duplicates(values in proptest::collection::vec("[a-c]{1,2}", 0..20)) {
        let mut filter = Filter::new();
        for value in &values {
            filter.insert_value(FilterField::ResponseTopics, value.clone());
        }
        let mut unique = values.clone();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(filter.response_topics.len(), unique.len());
    }
}
