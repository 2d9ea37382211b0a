//! Chart clicks as filter mutations
//!
//! A click on a chart category narrows a form to that category. Bars of the first series
//! belong to the drill-down form, bars of the second series to the compare-to form.
//! Clicks only ever add values.

use explorer_api::FilterOptions;
use explorer_dashboards::{Breakdown, DashboardConfig};
use explorer_filter::{FilterField, FormId};

/// A click on a chart element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartClick {
    /// Slice of the gender pie, bound to the drill-down form
    GenderSlice { name: String },
    /// Bar of the comparison histogram
    HistogramBar {
        form: FormId,
        breakdown: Breakdown,
        name: String,
    },
    /// Bar of the topic breakdown; `value` is the topic code
    TopicBar { form: FormId, value: String },
    /// Bar of the top words or phrases chart
    WordBar { form: FormId, word: String },
    /// Token of the word cloud, bound to the drill-down form
    WordcloudWord { word: String },
}

/// What a click does to a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    /// Append a value to a multi-valued field
    Insert { field: FilterField, value: String },
    /// Replace the keyword filter
    Keyword(String),
}

impl ClickAction {
    /// Field touched by the action
    #[must_use]
    pub fn field(&self) -> FilterField {
        match self {
            ClickAction::Insert { field, .. } => *field,
            ClickAction::Keyword(_) => FilterField::KeywordFilter,
        }
    }
}

/// Bar of the first (`count_1`) or second (`count_2`) series
#[inline]
#[must_use]
pub fn series_form(second_series: bool) -> FormId {
    if second_series {
        FormId::Filter2
    } else {
        FormId::Filter1
    }
}

impl ChartClick {
    /// Form the click is bound to
    #[must_use]
    pub fn form(&self) -> FormId {
        match self {
            ChartClick::GenderSlice { .. } | ChartClick::WordcloudWord { .. } => FormId::Filter1,
            ChartClick::HistogramBar { form, .. }
            | ChartClick::TopicBar { form, .. }
            | ChartClick::WordBar { form, .. } => *form,
        }
    }

    /// Resolve the click against dashboard policy and the option lists
    ///
    /// `None` when the click does nothing on this dashboard: age-bucket bars where such
    /// clicks are disabled, or country bars whose name matches no country option.
    #[must_use]
    pub fn resolve(&self, config: &DashboardConfig, options: &FilterOptions) -> Option<ClickAction> {
        match self {
            ChartClick::GenderSlice { name } => Some(ClickAction::Insert {
                field: FilterField::Genders,
                value: name.clone(),
            }),
            ChartClick::HistogramBar {
                breakdown, name, ..
            } => {
                let value = match breakdown {
                    Breakdown::AgeBucket if !config.allow_age_bucket_click => return None,
                    Breakdown::Country => options.country_code_for_name(name)?.to_string(),
                    _ => name.clone(),
                };
                Some(ClickAction::Insert {
                    field: breakdown.target_field(),
                    value,
                })
            }
            ChartClick::TopicBar { value, .. } => Some(ClickAction::Insert {
                field: FilterField::ResponseTopics,
                value: value.clone(),
            }),
            ChartClick::WordBar { word, .. } | ChartClick::WordcloudWord { word } => {
                Some(ClickAction::Keyword(word.clone()))
            }
        }
    }
}
