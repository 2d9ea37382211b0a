//! Text rendering of command results

use crate::commands::CampaignReport;
use explorer_api::FilterOptions;
use explorer_core::{gender_slices, topic_breakdown, WordcloudScale};
use explorer_dashboards::DashboardConfig;
use explorer_filter::Filter;
use std::fmt::Write;

const TOP_WORDS: usize = 10;

/// One line per dashboard
#[must_use]
pub fn render_dashboards<'a>(configs: impl IntoIterator<Item = &'a DashboardConfig>) -> String {
    let mut out = String::new();
    for config in configs {
        let _ = write!(
            out,
            "{:<20} {:<16} {}",
            config.name.slug(),
            config.campaign_code,
            config.title
        );
        if !config.locked_countries.is_empty() {
            let _ = write!(out, " [countries: {}]", config.locked_countries.join(","));
        }
        out.push('\n');
    }
    out
}

/// Sizes of every option list
#[must_use]
pub fn render_filter_options(options: &FilterOptions) -> String {
    let catalog = options.catalog();
    let mut out = String::new();
    let rows = [
        ("countries", options.countries.len()),
        ("countries with regions", catalog.len()),
        ("response topics", options.response_topics.len()),
        ("ages", options.ages.len()),
        ("age buckets", options.age_buckets.len()),
        ("genders", options.genders.len()),
        ("professions", options.professions.len()),
    ];
    for (name, count) in rows {
        let _ = writeln!(out, "{name:<24} {count}");
    }
    out
}

fn describe(filter: &Filter) -> String {
    let mut parts = Vec::new();
    for (name, values) in [
        ("countries", &filter.countries),
        ("regions", &filter.regions),
        ("topics", &filter.response_topics),
        ("ages", &filter.ages),
        ("age buckets", &filter.age_buckets),
        ("genders", &filter.genders),
        ("professions", &filter.professions),
    ] {
        if !values.is_empty() {
            let joined: Vec<&str> = values.iter().map(String::as_str).collect();
            parts.push(format!("{name}={}", joined.join(",")));
        }
    }
    if !filter.keyword_filter.is_empty() {
        parts.push(format!("keyword={}", filter.keyword_filter));
    }
    if !filter.keyword_exclude.is_empty() {
        parts.push(format!("exclude={}", filter.keyword_exclude));
    }
    if parts.is_empty() {
        "all responses".to_string()
    } else {
        parts.join(" ")
    }
}

/// Summary of a campaign run
#[must_use]
pub fn render_campaign(report: &CampaignReport) -> String {
    let campaign = &report.campaign;
    let config = report.dashboard.config();
    let mut out = String::new();

    let _ = writeln!(out, "{} ({})", config.title, config.name.slug());
    let _ = writeln!(
        out,
        "drill-down: {} ({} {})",
        describe(&report.filters.filter1),
        campaign.filter_1_respondents_count,
        config.respondents_noun_plural
    );
    if !campaign.filters_are_identical {
        let _ = writeln!(
            out,
            "compare-to: {} ({} {})",
            describe(&report.filters.filter2),
            campaign.filter_2_respondents_count,
            config.respondents_noun_plural
        );
    }

    if let Some(histogram) = &report.histogram {
        let _ = writeln!(
            out,
            "\n{} [{}, {}]",
            histogram.breakdown, histogram.domain.0, histogram.domain.1
        );
        for bar in &histogram.bars {
            let _ = writeln!(out, "  {:<24} {:>8} {:>8}", bar.name, bar.count_1, bar.count_2);
        }
    }

    let slices = gender_slices(campaign);
    if !slices.is_empty() {
        let _ = writeln!(out, "\ngenders");
        for slice in &slices {
            let _ = writeln!(out, "  {:<24} {:>8} {}", slice.name, slice.count, slice.label());
        }
    }

    if let Some(topics) = topic_breakdown(campaign, config.topic_breakdown_layout) {
        let _ = writeln!(out, "\ntopics");
        for section in &topics.sections {
            for topic in section.topics {
                let _ = writeln!(
                    out,
                    "  {:<24} {:>8} {:>8}",
                    topic.label, topic.count_1, topic.count_2
                );
            }
        }
    }

    let words = &campaign.top_words_and_phrases;
    if !words.top_words.is_empty() {
        let _ = writeln!(out, "\ntop words");
        for word in words.top_words.iter().take(TOP_WORDS) {
            let _ = writeln!(out, "  {:<24} {:>8} {:>8}", word.word, word.count_1, word.count_2);
        }
    }
    if let Some(scale) = WordcloudScale::for_words(&words.wordcloud_words) {
        let _ = writeln!(out, "\nword cloud");
        for word in words.wordcloud_words.iter().take(TOP_WORDS) {
            let _ = writeln!(out, "  {:<24} {:>6.1}px", word.text, scale.font_size(word.value));
        }
    }
    out
}
