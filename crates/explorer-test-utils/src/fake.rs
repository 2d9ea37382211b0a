//! Scripted in-memory dashboard backend

use async_trait::async_trait;
use explorer_api::{ApiError, Campaign, DashboardApi, FilterOptions};
use explorer_dashboards::DashboardName;
use explorer_filter::{CountryRegionOption, FilterPair, SelectOption};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::time::Duration;

/// A request received by [`FakeApi`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    FilterOptions { dashboard: DashboardName, lang: String },
    CountryRegions { dashboard: DashboardName, country: String },
    BreakdownOptions { dashboard: DashboardName, lang: String },
    Campaign {
        dashboard: DashboardName,
        lang: String,
        filters: FilterPair,
    },
}

/// Dashboard backend answering from canned data
///
/// Every call is recorded. Scripted failures answer with `ApiError::Unavailable`, which
/// the retry policy treats as transient.
#[derive(Debug, Default)]
pub struct FakeApi {
    filter_options: Mutex<FilterOptions>,
    campaign: Mutex<Campaign>,
    breakdown_options: Mutex<Vec<SelectOption<String>>>,
    campaign_delay: Mutex<Option<Duration>>,
    fail_next: AtomicU32,
    fail_always: AtomicBool,
    calls: Mutex<Vec<ApiCall>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_filter_options(self, options: FilterOptions) -> Self {
        *self.filter_options.lock() = options;
        self
    }

    #[must_use]
    pub fn with_campaign(self, campaign: Campaign) -> Self {
        *self.campaign.lock() = campaign;
        self
    }

    #[must_use]
    pub fn with_breakdown_options(self, options: Vec<SelectOption<String>>) -> Self {
        *self.breakdown_options.lock() = options;
        self
    }

    /// Delay every campaign answer
    #[must_use]
    pub fn with_campaign_delay(self, delay: Duration) -> Self {
        *self.campaign_delay.lock() = Some(delay);
        self
    }

    /// Fail the next `n` calls
    pub fn fail_next(&self, n: u32) {
        self.fail_next.store(n, Ordering::SeqCst);
    }

    /// Fail every call until switched off
    pub fn fail_always(&self, fail: bool) {
        self.fail_always.store(fail, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().clone()
    }

    /// Filter pairs of all campaign requests, oldest first
    pub fn campaign_requests(&self) -> Vec<FilterPair> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                ApiCall::Campaign { filters, .. } => Some(filters.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    fn record(&self, call: ApiCall) -> Result<(), ApiError> {
        self.calls.lock().push(call);
        if self.fail_always.load(Ordering::SeqCst) {
            return Err(ApiError::Unavailable("scripted failure".to_string()));
        }
        let consumed = self
            .fail_next
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));
        match consumed {
            Ok(_) => Err(ApiError::Unavailable("scripted failure".to_string())),
            Err(_) => Ok(()),
        }
    }
}

#[async_trait]
impl DashboardApi for FakeApi {
    async fn filter_options(
        &self,
        dashboard: DashboardName,
        lang: &str,
    ) -> Result<FilterOptions, ApiError> {
        self.record(ApiCall::FilterOptions {
            dashboard,
            lang: lang.to_string(),
        })?;
        Ok(self.filter_options.lock().clone())
    }

    async fn country_regions(
        &self,
        dashboard: DashboardName,
        country: &str,
    ) -> Result<CountryRegionOption, ApiError> {
        self.record(ApiCall::CountryRegions {
            dashboard,
            country: country.to_string(),
        })?;
        let options = self
            .filter_options
            .lock()
            .country_regions
            .iter()
            .find(|entry| entry.country_alpha2_code == country)
            .map(|entry| entry.options.clone())
            .unwrap_or_default();
        Ok(CountryRegionOption {
            country_alpha2_code: country.to_string(),
            options,
        })
    }

    async fn who_the_people_are_options(
        &self,
        dashboard: DashboardName,
        lang: &str,
    ) -> Result<Vec<SelectOption<String>>, ApiError> {
        self.record(ApiCall::BreakdownOptions {
            dashboard,
            lang: lang.to_string(),
        })?;
        Ok(self.breakdown_options.lock().clone())
    }

    async fn campaign(
        &self,
        dashboard: DashboardName,
        lang: &str,
        filters: &FilterPair,
    ) -> Result<Campaign, ApiError> {
        let delay = *self.campaign_delay.lock();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.record(ApiCall::Campaign {
            dashboard,
            lang: lang.to_string(),
            filters: filters.clone(),
        })?;
        let mut campaign = self.campaign.lock().clone();
        campaign.filters_are_identical = filters.are_identical();
        Ok(campaign)
    }
}
