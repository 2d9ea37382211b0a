//! The dashboard backend seam
//!
//! Queries and the filter session talk to the backend only through [`DashboardApi`],
//! so tests and the CLI can swap the HTTP client for a scripted backend.

use crate::error::ApiError;
use crate::models::{Campaign, FilterOptions};
use async_trait::async_trait;
use explorer_dashboards::DashboardName;
use explorer_filter::{CountryRegionOption, FilterPair, SelectOption};

/// Dashboard backend
#[async_trait]
pub trait DashboardApi: Send + Sync {
    /// Option lists for every filter selector
    async fn filter_options(
        &self,
        dashboard: DashboardName,
        lang: &str,
    ) -> Result<FilterOptions, ApiError>;

    /// Region options of one country
    async fn country_regions(
        &self,
        dashboard: DashboardName,
        country: &str,
    ) -> Result<CountryRegionOption, ApiError>;

    /// Options of the "show breakdown by" selector
    async fn who_the_people_are_options(
        &self,
        dashboard: DashboardName,
        lang: &str,
    ) -> Result<Vec<SelectOption<String>>, ApiError>;

    /// Aggregated statistics for a committed filter pair
    async fn campaign(
        &self,
        dashboard: DashboardName,
        lang: &str,
        filters: &FilterPair,
    ) -> Result<Campaign, ApiError>;
}
