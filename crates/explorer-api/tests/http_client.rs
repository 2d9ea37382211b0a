//! HTTP client against a mock backend

use explorer_api::{ApiConfig, ApiError, DashboardApi, HttpDashboardApi, RetryPolicy};
use explorer_dashboards::DashboardName;
use explorer_filter::{Filter, FilterPair};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> HttpDashboardApi {
    HttpDashboardApi::new(ApiConfig::new(server.uri()).with_timeout_secs(5)).unwrap()
}

#[tokio::test]
async fn fetches_filter_options() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/campaigns/wwwpakistan/filter-options"))
        .and(query_param("lang", "en"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "countries": [{"value": "PK", "label": "Pakistan"}],
            "country_regions": [{
                "country_alpha2_code": "PK",
                "options": [{"value": "punjab", "label": "Punjab"}]
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let options = client(&server)
        .filter_options(DashboardName::WhatWomenWantPakistan, "en")
        .await
        .unwrap();

    assert_eq!(options.countries[0].value, "PK");
    assert!(options.catalog().contains_region("PK", "punjab"));
}

#[tokio::test]
async fn posts_both_filters_for_campaign() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/campaigns/giz"))
        .and(query_param("lang", "es"))
        .and(body_partial_json(json!({
            "filter_1": {"countries": ["MX"], "keyword_filter": "agua"},
            "filter_2": {"countries": ["MX"]}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "filters_are_identical": false,
            "filter_1_respondents_count": 12,
            "genders_breakdown": [{"name": "Female", "count": 9}]
        })))
        .mount(&server)
        .await;

    let mut pair = FilterPair::uniform(&Filter::new().with_countries(["MX"]));
    pair.filter1.keyword_filter = "agua".into();

    let campaign = client(&server)
        .campaign(DashboardName::EconomicEmpowermentMexico, "es", &pair)
        .await
        .unwrap();

    assert_eq!(campaign.filter_1_respondents_count, 12);
    assert_eq!(campaign.genders_breakdown[0].count, 9);
}

#[tokio::test]
async fn all_campaigns_uses_its_own_root() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/all-campaigns/who-the-people-are-options"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"value": "breakdown-age-bucket", "label": "Age range"}
        ])))
        .mount(&server)
        .await;

    let options = client(&server)
        .who_the_people_are_options(DashboardName::AllCampaigns, "en")
        .await
        .unwrap();
    assert_eq!(options[0].value, "breakdown-age-bucket");
}

#[tokio::test]
async fn fetches_country_regions() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/campaigns/wra03a/countries/NG/regions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "country_alpha2_code": "NG",
            "options": [{"value": "lagos", "label": "Lagos"}]
        })))
        .mount(&server)
        .await;

    let regions = client(&server)
        .country_regions(DashboardName::WhatWomenWant, "NG")
        .await
        .unwrap();
    assert_eq!(regions.options.len(), 1);
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/campaigns/midwife/filter-options"))
        .respond_with(ResponseTemplate::new(404).set_body_string("unknown campaign"))
        .mount(&server)
        .await;

    let err = client(&server)
        .filter_options(DashboardName::MidwivesVoices, "en")
        .await
        .unwrap_err();

    match err {
        ApiError::Http { status, body } => {
            assert_eq!(status.as_u16(), 404);
            assert_eq!(body, "unknown campaign");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn retries_server_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/campaigns/healthwellbeing/filter-options"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/campaigns/healthwellbeing/filter-options"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let api = client(&server);
    let options = RetryPolicy::immediate(3)
        .run("filter-options", || {
            api.filter_options(DashboardName::HealthWellbeing, "en")
        })
        .await
        .unwrap();

    assert!(options.countries.is_empty());
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}
