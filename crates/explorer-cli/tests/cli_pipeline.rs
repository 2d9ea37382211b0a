//! Campaign runs against a scripted API

use explorer_api::{DashboardApi, FilterOptions, RetryPolicy};
use explorer_cli::{
    fetch_filter_options, render_campaign, render_filter_options, run_campaign, AppConfig,
    CampaignArgs, FormArgs,
};
use explorer_dashboards::{Breakdown, DashboardName};
use explorer_filter::SelectOption;
use explorer_test_utils::{test_campaign, test_filter_options, ApiCall, FakeApi};
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn config() -> AppConfig {
    AppConfig {
        retry: RetryPolicy::none(),
        ..AppConfig::default()
    }
}

fn fake() -> Arc<FakeApi> {
    Arc::new(
        FakeApi::new()
            .with_filter_options(test_filter_options())
            .with_campaign(test_campaign())
            .with_breakdown_options(vec![SelectOption::new("breakdown-country", "Country")]),
    )
}

fn as_api(fake: &Arc<FakeApi>) -> Arc<dyn DashboardApi> {
    Arc::clone(fake) as Arc<dyn DashboardApi>
}

#[tokio::test]
async fn commits_both_forms_in_one_request() {
    let api = fake();
    let args = CampaignArgs {
        drill_down: FormArgs {
            countries: vec!["PK".into()],
            regions: vec!["sindh".into()],
            ..FormArgs::default()
        },
        compare_to: FormArgs {
            countries: vec!["MX".into()],
            keyword: Some("Water".into()),
            ..FormArgs::default()
        },
        breakdown: None,
    };

    let report = run_campaign(as_api(&api), DashboardName::WhatWomenWant, &args, &config())
        .await
        .unwrap();

    let requests = api.campaign_requests();
    assert_eq!(requests.len(), 1);
    let sent = &requests[0];
    assert_eq!(sent.filter1.regions.iter().collect::<Vec<_>>(), vec!["sindh"]);
    assert_eq!(sent.filter2.keyword_filter, "water");
    assert_eq!(report.filters, *sent);
    assert!(!api
        .calls()
        .iter()
        .any(|call| matches!(call, ApiCall::CountryRegions { .. })));

    let histogram = report.histogram.as_ref().unwrap();
    assert_eq!(histogram.breakdown, Breakdown::Country);
    assert_eq!(histogram.bars.len(), 2);

    let text = render_campaign(&report);
    assert!(text.contains("compare-to: countries=MX keyword=water"));
    assert!(text.contains("water"));
}

#[tokio::test]
async fn explicit_breakdown_skips_breakdown_options() {
    let api = fake();
    let args = CampaignArgs {
        breakdown: Some(Breakdown::Age),
        ..CampaignArgs::default()
    };

    let report = run_campaign(as_api(&api), DashboardName::MidwivesVoices, &args, &config())
        .await
        .unwrap();

    let histogram = report.histogram.unwrap();
    assert_eq!(histogram.bars[0].name, "20");
    assert_eq!(histogram.bars[0].count_2, -25);
    assert!(!api
        .calls()
        .iter()
        .any(|call| matches!(call, ApiCall::BreakdownOptions { .. })));
    assert!(report.campaign.filters_are_identical);
}

#[tokio::test]
async fn fetches_regions_missing_from_options() {
    let options = FilterOptions {
        country_regions: Vec::new(),
        ..test_filter_options()
    };
    let api = Arc::new(FakeApi::new().with_filter_options(options).with_campaign(test_campaign()));
    let args = CampaignArgs {
        drill_down: FormArgs {
            countries: vec!["PK".into()],
            regions: vec!["sindh".into()],
            ..FormArgs::default()
        },
        ..CampaignArgs::default()
    };

    let err = run_campaign(as_api(&api), DashboardName::WhatWomenWant, &args, &config())
        .await
        .unwrap_err();

    assert!(err.to_string().contains("invalid"));
    assert!(api.calls().contains(&ApiCall::CountryRegions {
        dashboard: DashboardName::WhatWomenWant,
        country: "PK".into(),
    }));
    assert!(api.campaign_requests().is_empty());
}

#[tokio::test]
async fn unavailable_backend_fails_the_run() {
    let api = fake();
    api.fail_always(true);

    let err = run_campaign(
        as_api(&api),
        DashboardName::HealthWellbeing,
        &CampaignArgs::default(),
        &config(),
    )
    .await
    .unwrap_err();

    assert!(err.to_string().starts_with("campaign data unavailable"));
}

#[tokio::test]
async fn filter_options_summary_counts_lists() {
    let api = fake();
    let options = fetch_filter_options(api.as_ref(), DashboardName::WhatWomenWant, &config()).await;
    let summary = render_filter_options(&options);

    assert!(summary.lines().any(|line| line.starts_with("countries ") && line.ends_with(" 3")));
    assert!(summary
        .lines()
        .any(|line| line.starts_with("countries with regions") && line.ends_with(" 2")));
}
