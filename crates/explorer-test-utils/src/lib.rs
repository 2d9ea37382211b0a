//! Testing utilities for the Survey Explorer workspace
//!
//! Shared fixtures and a scripted [`FakeApi`].

#![allow(missing_docs)]

mod fake;

pub use fake::{ApiCall, FakeApi};

use explorer_api::{Campaign, FilterOptions, GenderCount, HistogramCount, WordCount, WordcloudWord};
use explorer_filter::{CountryRegionCatalog, CountryRegionOption, SelectOption};

pub fn region(value: &str, label: &str) -> SelectOption<String> {
    SelectOption::new(value, label)
}

/// Pakistan with three provinces
pub fn pakistan_regions() -> CountryRegionOption {
    CountryRegionOption {
        country_alpha2_code: "PK".to_string(),
        options: vec![
            region("punjab", "Punjab"),
            region("sindh", "Sindh"),
            region("balochistan", "Balochistan"),
        ],
    }
}

pub fn mexico_regions() -> CountryRegionOption {
    CountryRegionOption {
        country_alpha2_code: "MX".to_string(),
        options: vec![region("jalisco", "Jalisco"), region("oaxaca", "Oaxaca")],
    }
}

pub fn test_catalog() -> CountryRegionCatalog {
    CountryRegionCatalog::from_options(vec![pakistan_regions(), mexico_regions()])
}

/// Option lists covering three countries, two of them with regions
pub fn test_filter_options() -> FilterOptions {
    FilterOptions {
        countries: vec![
            SelectOption::new("PK", "Pakistan"),
            SelectOption::new("MX", "Mexico"),
            SelectOption::new("NG", "Nigeria"),
        ],
        country_regions: vec![pakistan_regions(), mexico_regions()],
        genders: vec![
            SelectOption::new("Female", "Female"),
            SelectOption::new("Male", "Male"),
        ],
        ages: vec![SelectOption::new("20", "20"), SelectOption::new("21", "21")],
        ..FilterOptions::default()
    }
}

pub fn histogram_count(name: &str, count_1: i64, count_2: i64) -> HistogramCount {
    HistogramCount {
        name: name.to_string(),
        count_1,
        count_2,
    }
}

/// Campaign with data in every chart
pub fn test_campaign() -> Campaign {
    let mut campaign = Campaign {
        filter_1_description: "All respondents".to_string(),
        filter_2_description: "All respondents".to_string(),
        filter_1_respondents_count: 120,
        filter_2_respondents_count: 80,
        genders_breakdown: vec![
            GenderCount {
                name: "Female".to_string(),
                count: 90,
            },
            GenderCount {
                name: "Male".to_string(),
                count: 30,
            },
        ],
        ..Campaign::default()
    };
    campaign.histogram.ages = vec![histogram_count("20", 40, 25), histogram_count("21", 80, 55)];
    campaign.histogram.canonical_countries = vec![
        histogram_count("Pakistan", 70, 50),
        histogram_count("Nigeria", 50, 30),
    ];
    campaign.top_words_and_phrases.top_words = vec![WordCount {
        word: "water".to_string(),
        count_1: 30,
        count_2: 12,
    }];
    campaign.top_words_and_phrases.wordcloud_words = vec![
        WordcloudWord {
            text: "water".to_string(),
            value: 30,
        },
        WordcloudWord {
            text: "school".to_string(),
            value: 3,
        },
    ];
    campaign
}
