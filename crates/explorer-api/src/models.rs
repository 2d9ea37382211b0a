//! Wire models of the dashboard API
//!
//! Response shapes are owned by the backend. Every field defaults when absent so that a
//! backend adding or dropping a chart does not break decoding.

use explorer_filter::{CountryRegionCatalog, CountryRegionOption, Filter, FilterPair, SelectOption};
use serde::{Deserialize, Serialize};

/// Option lists for every filter selector
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterOptions {
    /// Country options; `value` is the alpha-2 code, `label` the country name
    pub countries: Vec<SelectOption<String>>,
    pub country_regions: Vec<CountryRegionOption>,
    pub response_topics: Vec<SelectOption<String>>,
    pub ages: Vec<SelectOption<String>>,
    #[serde(alias = "age_ranges")]
    pub age_buckets: Vec<SelectOption<String>>,
    pub genders: Vec<SelectOption<String>>,
    pub professions: Vec<SelectOption<String>>,
    pub only_responses_from_categories: Vec<SelectOption<bool>>,
    pub only_multi_word_phrases_containing_filter_term: Vec<SelectOption<bool>>,
}

impl FilterOptions {
    /// Region catalog built from `country_regions`
    #[must_use]
    pub fn catalog(&self) -> CountryRegionCatalog {
        CountryRegionCatalog::from_options(self.country_regions.clone())
    }

    /// Alpha-2 code of a country given its display name
    #[must_use]
    pub fn country_code_for_name(&self, name: &str) -> Option<&str> {
        self.countries
            .iter()
            .find(|c| c.label == name)
            .map(|c| c.value.as_str())
    }
}

/// Body of a campaign data request
#[derive(Debug, Clone, Serialize)]
pub struct CampaignRequest<'a> {
    pub filter_1: &'a Filter,
    pub filter_2: &'a Filter,
}

impl<'a> From<&'a FilterPair> for CampaignRequest<'a> {
    fn from(pair: &'a FilterPair) -> Self {
        Self {
            filter_1: &pair.filter1,
            filter_2: &pair.filter2,
        }
    }
}

/// Aggregated statistics for a filter pair
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Campaign {
    pub responses_breakdown: ResponsesBreakdown,
    pub genders_breakdown: Vec<GenderCount>,
    pub histogram: Histogram,
    pub top_words_and_phrases: TopWordsAndPhrases,
    pub filters_are_identical: bool,
    pub filter_1_description: String,
    pub filter_2_description: String,
    pub filter_1_respondents_count: u64,
    pub filter_2_respondents_count: u64,
}

/// Topic breakdown lists
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponsesBreakdown {
    pub parent_categories: Vec<TopicCount>,
    pub sub_categories: Vec<TopicCount>,
    pub parent_or_sub_categories: Vec<TopicCount>,
}

impl ResponsesBreakdown {
    /// Whether no topic list has entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent_categories.is_empty()
            && self.sub_categories.is_empty()
            && self.parent_or_sub_categories.is_empty()
    }
}

/// Respondents per topic for both filters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopicCount {
    /// Topic code, the value stored in `response_topics`
    pub value: String,
    pub label: String,
    pub count_1: i64,
    pub count_2: i64,
}

/// One pie slice of the gender chart
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenderCount {
    pub name: String,
    pub count: u64,
}

/// Comparison histograms, one list per breakdown
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Histogram {
    pub ages: Vec<HistogramCount>,
    pub age_buckets: Vec<HistogramCount>,
    pub age_buckets_default: Vec<HistogramCount>,
    pub genders: Vec<HistogramCount>,
    pub professions: Vec<HistogramCount>,
    pub canonical_countries: Vec<HistogramCount>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistogramCount {
    pub name: String,
    pub count_1: i64,
    pub count_2: i64,
}

/// Most frequent words and phrases
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopWordsAndPhrases {
    pub top_words: Vec<WordCount>,
    pub two_word_phrases: Vec<WordCount>,
    pub three_word_phrases: Vec<WordCount>,
    pub wordcloud_words: Vec<WordcloudWord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordCount {
    pub word: String,
    pub count_1: i64,
    pub count_2: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordcloudWord {
    pub text: String,
    pub value: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn filter_options_accepts_age_ranges_alias() {
        let options: FilterOptions = serde_json::from_str(
            r#"{
                "countries": [{"value": "PK", "label": "Pakistan"}],
                "age_ranges": [{"value": "15-19", "label": "15-19"}],
                "only_responses_from_categories": [{"value": true, "label": "Yes"}]
            }"#,
        )
        .unwrap();

        assert_eq!(options.age_buckets.len(), 1);
        assert_eq!(options.country_code_for_name("Pakistan"), Some("PK"));
        assert_eq!(options.country_code_for_name("Atlantis"), None);
        assert!(options.genders.is_empty());
    }

    #[test]
    fn campaign_decodes_partial_payload() {
        let campaign: Campaign = serde_json::from_str(
            r#"{
                "filters_are_identical": true,
                "histogram": {"ages": [{"name": "25", "count_1": 10, "count_2": 4}]}
            }"#,
        )
        .unwrap();

        assert!(campaign.filters_are_identical);
        assert_eq!(campaign.histogram.ages[0].count_2, 4);
        assert!(campaign.responses_breakdown.is_empty());
    }

    #[test]
    fn campaign_request_uses_wire_names() {
        let mut pair = FilterPair::default();
        pair.filter2.keyword_filter = "water".into();

        let json = serde_json::to_value(CampaignRequest::from(&pair)).unwrap();
        assert_eq!(json["filter_1"]["keyword_filter"], "");
        assert_eq!(json["filter_2"]["keyword_filter"], "water");
    }
}
