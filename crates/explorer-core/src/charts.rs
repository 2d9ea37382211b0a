//! Chart data shaping
//!
//! Turns a [`Campaign`] into what each chart draws. Rendering itself happens elsewhere;
//! these are the numbers and the selection rules.

use explorer_api::{Campaign, HistogramCount, TopicCount, WordcloudWord};
use explorer_dashboards::{Breakdown, DashboardConfig, TopicBreakdownLayout};
use explorer_filter::SelectOption;
use serde::Serialize;

/// A "nice" number near `range`: 1, 2, 5 or 10 times a power of ten
///
/// With `round` the nearest such number is taken, otherwise the smallest one not below
/// `range`. Non-positive ranges yield zero.
#[must_use]
pub fn nice_num(range: f64, round: bool) -> f64 {
    if range <= 0.0 || !range.is_finite() {
        return 0.0;
    }
    #[allow(clippy::cast_possible_truncation)]
    let exponent = range.log10().floor() as i32;
    let magnitude = 10f64.powi(exponent);
    let fraction = range / magnitude;
    let nice = if round {
        if fraction < 1.5 {
            1.0
        } else if fraction < 3.0 {
            2.0
        } else if fraction < 7.0 {
            5.0
        } else {
            10.0
        }
    } else if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// One category of the comparison histogram
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonBar {
    pub name: String,
    pub count_1: i64,
    /// Drawn to the left of the axis, hence negated
    pub count_2: i64,
}

/// Back-to-back histogram of both filters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonHistogram {
    pub breakdown: Breakdown,
    pub bars: Vec<ComparisonBar>,
    /// X-axis bounds
    pub domain: (f64, f64),
}

/// Histogram list the breakdown draws from
#[must_use]
pub fn histogram_series<'a>(
    campaign: &'a Campaign,
    breakdown: Breakdown,
    config: &DashboardConfig,
) -> &'a [HistogramCount] {
    let histogram = &campaign.histogram;
    match breakdown {
        Breakdown::Age => &histogram.ages,
        Breakdown::AgeBucket if config.uses_default_age_buckets => &histogram.age_buckets_default,
        Breakdown::AgeBucket => &histogram.age_buckets,
        Breakdown::Gender => &histogram.genders,
        Breakdown::Profession => &histogram.professions,
        Breakdown::Country => &histogram.canonical_countries,
    }
}

impl ComparisonHistogram {
    /// Shape the histogram of one breakdown
    ///
    /// The axis is symmetric around zero unless both filters are identical, in which
    /// case only the first series is meaningful and the axis starts at zero.
    #[must_use]
    pub fn build(campaign: &Campaign, breakdown: Breakdown, config: &DashboardConfig) -> Self {
        let bars: Vec<ComparisonBar> = histogram_series(campaign, breakdown, config)
            .iter()
            .map(|count| ComparisonBar {
                name: count.name.clone(),
                count_1: count.count_1,
                count_2: -count.count_2,
            })
            .collect();

        let count_1_max = bars.iter().map(|b| b.count_1).max().unwrap_or(0).unsigned_abs();
        let count_2_max = bars.iter().map(|b| b.count_2).min().unwrap_or(0).unsigned_abs();
        #[allow(clippy::cast_precision_loss)]
        let max = nice_num(count_1_max.max(count_2_max) as f64, false);

        let domain = if campaign.filters_are_identical {
            (0.0, max)
        } else {
            (-max, max)
        };
        Self {
            breakdown,
            bars,
            domain,
        }
    }
}

/// Breakdown selected when the chart first shows
///
/// The dashboard's default when it has one, else the first option the API offers.
/// Nothing is selected until options have loaded.
#[must_use]
pub fn initial_breakdown(
    config: &DashboardConfig,
    options: &[SelectOption<String>],
) -> Option<Breakdown> {
    if options.is_empty() {
        return None;
    }
    config
        .default_breakdown
        .or_else(|| options.iter().find_map(|o| o.value.parse().ok()))
}

/// One slice of the gender pie
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenderSlice {
    pub name: String,
    pub count: u64,
    /// Share of all respondents in percent
    pub percent: f64,
}

impl GenderSlice {
    /// Label as drawn next to the slice
    #[must_use]
    pub fn label(&self) -> String {
        format!("{:.3}%", self.percent)
    }
}

#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn gender_slices(campaign: &Campaign) -> Vec<GenderSlice> {
    let total: u64 = campaign.genders_breakdown.iter().map(|g| g.count).sum();
    campaign
        .genders_breakdown
        .iter()
        .map(|g| GenderSlice {
            name: g.name.clone(),
            count: g.count,
            percent: if total == 0 {
                0.0
            } else {
                g.count as f64 * 100.0 / total as f64
            },
        })
        .collect()
}

/// Which topic list a section draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicSectionKind {
    ParentOrSub,
    Parent,
    Sub,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicSection<'a> {
    pub kind: TopicSectionKind,
    pub topics: &'a [TopicCount],
}

/// Sections of the topic breakdown chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicBreakdown<'a> {
    pub sections: Vec<TopicSection<'a>>,
    /// Section titles are shown only when parent and sub categories both have data
    pub show_titles: bool,
}

/// Topic sections for a layout; `None` when the campaign has no topic data at all
#[must_use]
pub fn topic_breakdown(
    campaign: &Campaign,
    layout: TopicBreakdownLayout,
) -> Option<TopicBreakdown<'_>> {
    let breakdown = &campaign.responses_breakdown;
    if breakdown.is_empty() {
        return None;
    }

    let candidates: Vec<(TopicSectionKind, &[TopicCount])> = match layout {
        TopicBreakdownLayout::ParentOrSub => vec![(
            TopicSectionKind::ParentOrSub,
            breakdown.parent_or_sub_categories.as_slice(),
        )],
        TopicBreakdownLayout::ParentAndSub => vec![
            (TopicSectionKind::Parent, breakdown.parent_categories.as_slice()),
            (TopicSectionKind::Sub, breakdown.sub_categories.as_slice()),
        ],
    };
    let sections = candidates
        .into_iter()
        .filter(|(_, topics)| !topics.is_empty())
        .map(|(kind, topics)| TopicSection { kind, topics })
        .collect();

    Some(TopicBreakdown {
        sections,
        show_titles: !breakdown.parent_categories.is_empty()
            && !breakdown.sub_categories.is_empty(),
    })
}

/// Logarithmic font scale of the word cloud
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordcloudScale {
    min: f64,
    max: f64,
}

impl WordcloudScale {
    pub const MIN_FONT: f64 = 10.0;
    pub const MAX_FONT: f64 = 150.0;

    /// Scale spanning the smallest and largest word counts; `None` without words
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn for_words(words: &[WordcloudWord]) -> Option<Self> {
        let min = words.iter().map(|w| w.value).min()?;
        let max = words.iter().map(|w| w.value).max()?;
        Some(Self {
            min: min.max(1) as f64,
            max: max.max(1) as f64,
        })
    }

    /// Font size of a word with `value` occurrences
    #[must_use]
    pub fn font_size(&self, value: u64) -> f64 {
        let span = self.max.ln() - self.min.ln();
        if span <= 0.0 {
            return (Self::MIN_FONT + Self::MAX_FONT) / 2.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let t = ((value.max(1) as f64).ln() - self.min.ln()) / span;
        Self::MIN_FONT + t * (Self::MAX_FONT - Self::MIN_FONT)
    }
}
