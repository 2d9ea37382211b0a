//! The dashboard policy table

use crate::breakdown::Breakdown;
use crate::config::{CopyKeys, DashboardConfig, OptionalFields, Palette, TopicBreakdownLayout};
use crate::name::DashboardName;
use indexmap::IndexMap;
use once_cell::sync::Lazy;

const VIDEO_LINK: &str = "https://www.youtube.com/watch?v=nBzide5J3Hk";

const PIE_COLORS: &[&str] = &[
    "var(--pmnchQuaternary)",
    "var(--pmnchTertiary)",
    "var(--pmnchQuinary)",
    "var(--pmnchQuinaryFaint)",
    "var(--pmnchSenary)",
    "var(--pmnchPrimary)",
    "var(--pmnchSeptenary)",
    "var(--pmnchSecondary)",
];

const DEFAULT_PALETTE: Palette = Palette {
    bar1_fill: "var(--defaultPrimary)",
    bar2_fill: "var(--defaultTertiary)",
    wordcloud: &[
        "var(--defaultPrimary)",
        "var(--defaultSecondary)",
        "var(--defaultTertiary)",
    ],
    pie: PIE_COLORS,
    selected_tab: "border-t-defaultColors-tertiary",
};

const PMNCH_PALETTE: Palette = Palette {
    bar1_fill: "var(--pmnchSecondary)",
    bar2_fill: "var(--pmnchTertiary)",
    wordcloud: &[
        "var(--pmnchPrimary)",
        "var(--pmnchSecondary)",
        "var(--pmnchTertiary)",
        "var(--pmnchSenary)",
        "var(--pmnchSeptenary)",
    ],
    pie: PIE_COLORS,
    selected_tab: "border-t-pmnchColors-septenary",
};

const DEFAULT_COPY: CopyKeys = CopyKeys {
    select_response_topics: "select-response-topics",
    breakdown_responses_topic: "breakdown-responses-topic",
    click_view_topic_responses: "click-view-topic-responses",
};

static DASHBOARDS: Lazy<IndexMap<DashboardName, DashboardConfig>> = Lazy::new(|| {
    DashboardName::ALL
        .into_iter()
        .map(|name| (name, build(name)))
        .collect()
});

fn build(name: DashboardName) -> DashboardConfig {
    let base = DashboardConfig {
        name,
        title: "",
        campaign_code: name.slug(),
        respondents_noun_singular: "woman",
        respondents_noun_plural: "women",
        show_video_link: VIDEO_LINK,
        optional_fields: OptionalFields::None,
        locked_countries: &[],
        palette: DEFAULT_PALETTE,
        copy: DEFAULT_COPY,
        allow_age_bucket_click: false,
        default_breakdown: None,
        uses_default_age_buckets: false,
        topic_breakdown_layout: TopicBreakdownLayout::ParentAndSub,
        show_about_us: true,
        show_qr_code: false,
    };

    match name {
        DashboardName::WhatWomenWant => DashboardConfig {
            title: "What Women Want",
            campaign_code: "wra03a",
            allow_age_bucket_click: true,
            copy: CopyKeys {
                breakdown_responses_topic: "wra03a-breakdown-responses-topic",
                click_view_topic_responses: "wra03a-click-view-topic-responses",
                ..DEFAULT_COPY
            },
            ..base
        },
        DashboardName::WhatYoungPeopleWant => DashboardConfig {
            title: "What Young People Want",
            campaign_code: "pmn01a",
            respondents_noun_singular: "young person",
            respondents_noun_plural: "young people",
            optional_fields: OptionalFields::Gender,
            palette: PMNCH_PALETTE,
            copy: CopyKeys {
                select_response_topics: "select-response-domains",
                breakdown_responses_topic: "pmn01a-breakdown-responses-topic",
                ..DEFAULT_COPY
            },
            show_about_us: false,
            show_qr_code: true,
            ..base
        },
        DashboardName::MidwivesVoices => DashboardConfig {
            title: "What Women Want: Midwives' Voices",
            campaign_code: "midwife",
            respondents_noun_singular: "midwife",
            respondents_noun_plural: "midwives",
            optional_fields: OptionalFields::GenderAndProfession,
            allow_age_bucket_click: true,
            ..base
        },
        DashboardName::HealthWellbeing => DashboardConfig {
            title: "Women’s Health and Well Being",
            campaign_code: "healthwellbeing",
            allow_age_bucket_click: true,
            default_breakdown: Some(Breakdown::AgeBucket),
            ..base
        },
        DashboardName::WhatWomenWantPakistan => DashboardConfig {
            title: "What Women Want Pakistan",
            campaign_code: "wwwpakistan",
            locked_countries: &["PK"],
            topic_breakdown_layout: TopicBreakdownLayout::ParentOrSub,
            ..base
        },
        DashboardName::EconomicEmpowermentMexico => DashboardConfig {
            title: "Economic Empowerment Mexico",
            campaign_code: "giz",
            locked_countries: &["MX"],
            copy: CopyKeys {
                breakdown_responses_topic: "giz-breakdown-responses-topic",
                ..DEFAULT_COPY
            },
            ..base
        },
        DashboardName::AllCampaigns => DashboardConfig {
            title: "All Campaigns",
            campaign_code: "allcampaigns",
            respondents_noun_singular: "respondent",
            respondents_noun_plural: "respondents",
            allow_age_bucket_click: true,
            uses_default_age_buckets: true,
            ..base
        },
    }
}

impl DashboardName {
    /// Policy record of this dashboard
    #[inline]
    #[must_use]
    pub fn config(self) -> &'static DashboardConfig {
        &DASHBOARDS[&self]
    }
}

/// Every dashboard policy, in menu order
pub fn all_dashboards() -> impl Iterator<Item = &'static DashboardConfig> {
    DASHBOARDS.values()
}

#[cfg(test)]
mod tests {
    use super::*;
    use explorer_filter::FilterField;
    use pretty_assertions::assert_eq;

    #[test]
    fn table_covers_every_dashboard() {
        assert_eq!(all_dashboards().count(), DashboardName::ALL.len());
        for name in DashboardName::ALL {
            assert_eq!(name.config().name, name);
            assert!(!name.config().title.is_empty());
        }
    }

    #[test]
    fn locked_countries() {
        assert_eq!(
            DashboardName::WhatWomenWantPakistan.config().locked_countries,
            &["PK"]
        );
        assert_eq!(
            DashboardName::EconomicEmpowermentMexico.config().locked_countries,
            &["MX"]
        );
        assert!(DashboardName::WhatWomenWant
            .config()
            .locked_countries
            .is_empty());
    }

    #[test]
    fn optional_fields_per_dashboard() {
        let pmnch = DashboardName::WhatYoungPeopleWant.config();
        assert!(pmnch.shows_field(FilterField::Genders));
        assert!(!pmnch.shows_field(FilterField::Professions));

        let midwives = DashboardName::MidwivesVoices.config();
        assert!(midwives.shows_field(FilterField::Genders));
        assert!(midwives.shows_field(FilterField::Professions));

        let www = DashboardName::WhatWomenWant.config();
        assert!(!www.shows_field(FilterField::Genders));
        assert!(www.shows_field(FilterField::Countries));
    }

    #[test]
    fn age_bucket_clicks() {
        let allowed: Vec<_> = all_dashboards()
            .filter(|c| c.allow_age_bucket_click)
            .map(|c| c.name)
            .collect();
        assert_eq!(
            allowed,
            vec![
                DashboardName::WhatWomenWant,
                DashboardName::MidwivesVoices,
                DashboardName::HealthWellbeing,
                DashboardName::AllCampaigns,
            ]
        );
    }

    #[test]
    fn pmnch_copy_and_palette() {
        let pmnch = DashboardName::WhatYoungPeopleWant.config();
        assert_eq!(pmnch.copy.select_response_topics, "select-response-domains");
        assert_eq!(pmnch.palette.bar1_fill, "var(--pmnchSecondary)");
        assert_eq!(pmnch.palette.wordcloud.len(), 5);
        assert!(!pmnch.show_about_us);
        assert!(pmnch.show_qr_code);
    }

    #[test]
    fn config_serializes() {
        let json = serde_json::to_value(DashboardName::HealthWellbeing.config()).unwrap();
        assert_eq!(json["name"], "healthwellbeing");
        assert_eq!(json["default_breakdown"], "breakdown-age-bucket");
        assert_eq!(json["optional_fields"], "none");
    }
}
