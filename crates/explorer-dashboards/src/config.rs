//! Per-dashboard policy
//!
//! Everything that varies between dashboards lives in one [`DashboardConfig`] record:
//! - which optional filter fields are shown
//! - which fields are locked to preset values
//! - copy keys and chart palette
//! - chart interaction policy (age-bucket clicks, default breakdown, topic layout)

use crate::breakdown::Breakdown;
use crate::name::DashboardName;
use explorer_filter::{Filter, FilterField};
use serde::Serialize;

/// Optional filter fields shown in the advanced panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionalFields {
    None,
    Gender,
    GenderAndProfession,
}

impl OptionalFields {
    /// Whether the gender selector is shown
    #[inline]
    #[must_use]
    pub fn shows_gender(self) -> bool {
        matches!(self, Self::Gender | Self::GenderAndProfession)
    }

    /// Whether the profession selector is shown
    #[inline]
    #[must_use]
    pub fn shows_profession(self) -> bool {
        matches!(self, Self::GenderAndProfession)
    }
}

/// How the topic breakdown charts are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicBreakdownLayout {
    /// Separate parent-category and sub-category charts
    ParentAndSub,
    /// One merged parent-or-sub chart
    ParentOrSub,
}

/// Chart colors (CSS custom properties)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    /// Drill-down series
    pub bar1_fill: &'static str,
    /// Compare-to series
    pub bar2_fill: &'static str,
    pub wordcloud: &'static [&'static str],
    pub pie: &'static [&'static str],
    pub selected_tab: &'static str,
}

/// Translation keys whose choice depends on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CopyKeys {
    pub select_response_topics: &'static str,
    pub breakdown_responses_topic: &'static str,
    pub click_view_topic_responses: &'static str,
}

/// Static description of one dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardConfig {
    pub name: DashboardName,
    pub title: &'static str,
    /// Campaign code used in API paths
    pub campaign_code: &'static str,
    pub respondents_noun_singular: &'static str,
    pub respondents_noun_plural: &'static str,
    pub show_video_link: &'static str,
    pub optional_fields: OptionalFields,
    /// Countries preselected and not editable
    pub locked_countries: &'static [&'static str],
    pub palette: Palette,
    pub copy: CopyKeys,
    /// Whether clicking an age-bucket bar filters by that bucket
    pub allow_age_bucket_click: bool,
    /// Histogram breakdown selected initially; `None` takes the first API option
    pub default_breakdown: Option<Breakdown>,
    /// Whether age buckets come from the merged default bucketing
    pub uses_default_age_buckets: bool,
    pub topic_breakdown_layout: TopicBreakdownLayout,
    pub show_about_us: bool,
    pub show_qr_code: bool,
}

impl DashboardConfig {
    /// Whether a field cannot be edited through its selector
    #[must_use]
    pub fn is_locked(&self, field: FilterField) -> bool {
        field == FilterField::Countries && !self.locked_countries.is_empty()
    }

    /// Whether a field has a selector on this dashboard
    #[must_use]
    pub fn shows_field(&self, field: FilterField) -> bool {
        match field {
            FilterField::Genders => self.optional_fields.shows_gender(),
            FilterField::Professions => self.optional_fields.shows_profession(),
            _ => true,
        }
    }

    /// Whether the countries tooltip is shown
    #[inline]
    #[must_use]
    pub fn show_country_tooltip(&self) -> bool {
        self.locked_countries.is_empty()
    }

    /// Filter both forms start from
    #[must_use]
    pub fn default_filter(&self) -> Filter {
        Filter::new().with_countries(self.locked_countries.iter().copied())
    }
}
