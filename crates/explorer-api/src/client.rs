//! HTTP implementation of [`DashboardApi`]

use crate::api::DashboardApi;
use crate::error::ApiError;
use crate::models::{Campaign, CampaignRequest, FilterOptions};
use async_trait::async_trait;
use explorer_dashboards::DashboardName;
use explorer_filter::{CountryRegionOption, FilterPair, SelectOption};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// HTTP client settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the dashboard API, without trailing slash
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// Create config for a base URL
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout_secs: 30,
        }
    }

    /// With request timeout
    #[inline]
    #[must_use]
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

/// Dashboard API over HTTP
#[derive(Debug, Clone)]
pub struct HttpDashboardApi {
    client: Client,
    config: ApiConfig,
}

impl HttpDashboardApi {
    /// Create client
    ///
    /// # Errors
    /// - `ApiError::InvalidBaseUrl` if the base URL is not http(s)
    /// - `ApiError::Request` if the HTTP client cannot be built
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        if !(config.base_url.starts_with("http://") || config.base_url.starts_with("https://")) {
            return Err(ApiError::InvalidBaseUrl(config.base_url));
        }
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Path prefix of a dashboard's campaign
    fn campaign_root(&self, dashboard: DashboardName) -> String {
        if dashboard.is_all_campaigns() {
            format!("{}/all-campaigns", self.config.base_url)
        } else {
            format!(
                "{}/campaigns/{}",
                self.config.base_url,
                dashboard.config().campaign_code
            )
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        tracing::debug!(url, "GET");
        let response = self
            .client
            .get(url)
            .header("Content-Type", "application/json")
            .query(query)
            .send()
            .await?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_success() {
        return response.json::<T>().await.map_err(ApiError::Request);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::http(status, body))
}

#[async_trait]
impl DashboardApi for HttpDashboardApi {
    async fn filter_options(
        &self,
        dashboard: DashboardName,
        lang: &str,
    ) -> Result<FilterOptions, ApiError> {
        let url = format!("{}/filter-options", self.campaign_root(dashboard));
        self.get_json(&url, &[("lang", lang)]).await
    }

    async fn country_regions(
        &self,
        dashboard: DashboardName,
        country: &str,
    ) -> Result<CountryRegionOption, ApiError> {
        let url = format!(
            "{}/countries/{}/regions",
            self.campaign_root(dashboard),
            country
        );
        self.get_json(&url, &[]).await
    }

    async fn who_the_people_are_options(
        &self,
        dashboard: DashboardName,
        lang: &str,
    ) -> Result<Vec<SelectOption<String>>, ApiError> {
        let url = format!("{}/who-the-people-are-options", self.campaign_root(dashboard));
        self.get_json(&url, &[("lang", lang)]).await
    }

    async fn campaign(
        &self,
        dashboard: DashboardName,
        lang: &str,
        filters: &FilterPair,
    ) -> Result<Campaign, ApiError> {
        let url = self.campaign_root(dashboard);
        tracing::debug!(url = %url, "POST");
        let response = self
            .client
            .post(&url)
            .query(&[("lang", lang)])
            .json(&CampaignRequest::from(filters))
            .send()
            .await?;
        decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_http_base_url() {
        let err = HttpDashboardApi::new(ApiConfig::new("ftp://example.org")).unwrap_err();
        assert!(matches!(err, ApiError::InvalidBaseUrl(_)));
    }

    #[test]
    fn trims_trailing_slash() {
        let config = ApiConfig::new("http://localhost:8000/");
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn campaign_roots() {
        let api = HttpDashboardApi::new(ApiConfig::new("http://api")).unwrap();
        assert_eq!(
            api.campaign_root(DashboardName::WhatWomenWantPakistan),
            "http://api/campaigns/wwwpakistan"
        );
        assert_eq!(
            api.campaign_root(DashboardName::AllCampaigns),
            "http://api/all-campaigns"
        );
    }
}
