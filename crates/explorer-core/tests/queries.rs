//! Campaign and option queries against the scripted backend

use explorer_api::{FilterOptionsCache, RetryPolicy};
use explorer_core::{
    load_breakdown_options, load_filter_options, CampaignQuery, FilterSession, FilterStore,
    SessionConfig,
};
use explorer_dashboards::DashboardName;
use explorer_filter::{FieldEdit, FormId};
use explorer_test_utils::{test_campaign, test_filter_options, ApiCall, FakeApi};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::time::Duration;

fn mount(api: &Arc<FakeApi>, retry: RetryPolicy) -> (FilterSession, CampaignQuery) {
    let store = FilterStore::new();
    let session = FilterSession::new(
        DashboardName::WhatWomenWant,
        store.clone(),
        SessionConfig::default(),
    );
    let query = CampaignQuery::spawn(api.clone(), &store, "en", retry);
    (session, query)
}

#[tokio::test(start_paused = true)]
async fn fetches_defaults_then_each_commit() {
    let api = Arc::new(FakeApi::new().with_campaign(test_campaign()));
    let (session, query) = mount(&api, RetryPolicy::default());

    let state = query.settled(1).await;
    assert_eq!(state.data.unwrap().filter_1_respondents_count, 120);

    session
        .edit(FormId::Filter1, FieldEdit::KeywordFilter("Water".into()))
        .unwrap();
    let state = query.settled(2).await;
    assert!(!state.is_error);
    assert!(!state.data.unwrap().filters_are_identical);

    let requests = api.campaign_requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].filter1.keyword_filter, "water");
    assert!(matches!(
        &api.calls()[0],
        ApiCall::Campaign { lang, .. } if lang == "en"
    ));
}

#[tokio::test(start_paused = true)]
async fn commits_during_a_fetch_are_coalesced() {
    let api = Arc::new(
        FakeApi::new()
            .with_campaign(test_campaign())
            .with_campaign_delay(Duration::from_secs(1)),
    );
    let (session, query) = mount(&api, RetryPolicy::default());
    tokio::time::sleep(Duration::from_millis(10)).await;

    session
        .edit(FormId::Filter2, FieldEdit::Genders(vec!["Male".into()]))
        .unwrap();
    session.flush().unwrap();
    session
        .edit(FormId::Filter2, FieldEdit::Genders(vec!["Female".into()]))
        .unwrap();
    session.flush().unwrap();

    query.settled(2).await;
    let requests = api.campaign_requests();
    assert_eq!(requests.len(), 2);
    assert!(requests[1].filter2.genders.contains("Female"));
}

#[tokio::test(start_paused = true)]
async fn transient_failures_are_retried() {
    let api = Arc::new(FakeApi::new().with_campaign(test_campaign()));
    api.fail_next(2);
    let (_session, query) = mount(&api, RetryPolicy::default());

    let state = query.settled(1).await;
    assert!(!state.is_error);
    assert!(state.data.is_some());
    assert_eq!(api.campaign_requests().len(), 3);
}

#[tokio::test(start_paused = true)]
async fn exhausted_retries_raise_the_error_flag_and_keep_data() {
    let api = Arc::new(FakeApi::new().with_campaign(test_campaign()));
    let (session, query) = mount(&api, RetryPolicy::default());
    query.settled(1).await;

    api.fail_always(true);
    session
        .edit(FormId::Filter1, FieldEdit::Ages(vec!["21".into()]))
        .unwrap();
    let state = query.settled(2).await;

    assert!(state.is_error);
    assert!(state.data.is_some());
    assert!(!state.shows_error());
    // one successful fetch, then four attempts
    assert_eq!(api.campaign_requests().len(), 5);
}

#[tokio::test(start_paused = true)]
async fn failure_without_data_shows_the_error() {
    let api = Arc::new(FakeApi::new());
    api.fail_always(true);
    let (_session, query) = mount(&api, RetryPolicy::immediate(3));

    let state = query.settled(1).await;
    assert!(state.shows_error());
    assert!(state.error.unwrap().contains("gave up after 4 attempts"));
}

#[tokio::test(start_paused = true)]
async fn failed_filter_options_yield_empty_lists() {
    let api = FakeApi::new().with_filter_options(test_filter_options());
    let cache = FilterOptionsCache::default();

    api.fail_always(true);
    let options = load_filter_options(
        &api,
        &cache,
        DashboardName::WhatWomenWant,
        "en",
        RetryPolicy::immediate(3),
    )
    .await;
    assert!(options.countries.is_empty());
    assert_eq!(api.call_count(), 4);

    api.fail_always(false);
    for _ in 0..2 {
        let options = load_filter_options(
            &api,
            &cache,
            DashboardName::WhatWomenWant,
            "en",
            RetryPolicy::immediate(3),
        )
        .await;
        assert_eq!(options.countries.len(), 3);
    }
    assert_eq!(api.call_count(), 5);
}

#[tokio::test]
async fn failed_breakdown_options_yield_empty_list() {
    let api = FakeApi::new();
    api.fail_always(true);
    let options = load_breakdown_options(
        &api,
        DashboardName::HealthWellbeing,
        "en",
        RetryPolicy::none(),
    )
    .await;
    assert!(options.is_empty());
}

#[tokio::test(start_paused = true)]
async fn remount_on_another_dashboard_fetches_its_campaign() {
    let api = Arc::new(FakeApi::new().with_campaign(test_campaign()));
    let store = FilterStore::new();
    let pakistan = FilterSession::new(
        DashboardName::WhatWomenWantPakistan,
        store.clone(),
        SessionConfig::default(),
    );
    let query = CampaignQuery::spawn(api.clone(), &store, "en", RetryPolicy::none());
    query.settled(1).await;
    drop(pakistan);

    let _session = FilterSession::new(
        DashboardName::WhatWomenWant,
        store.clone(),
        SessionConfig::default(),
    );
    query.settled(2).await;

    let dashboards: Vec<DashboardName> = api
        .calls()
        .into_iter()
        .filter_map(|call| match call {
            ApiCall::Campaign { dashboard, .. } => Some(dashboard),
            _ => None,
        })
        .collect();
    assert_eq!(
        dashboards,
        vec![DashboardName::WhatWomenWantPakistan, DashboardName::WhatWomenWant]
    );
    assert!(api.campaign_requests()[1].filter1.countries.is_empty());
}
