//! Filter-option cache using moka
//!
//! Option lists change rarely, so they are cached per dashboard and language and shared
//! between sessions.

use crate::error::ApiError;
use crate::models::FilterOptions;
use explorer_dashboards::DashboardName;
use moka::future::Cache;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Cache key: dashboard plus language code
pub type OptionsKey = (DashboardName, String);

/// Cached filter options
#[derive(Debug, Clone)]
pub struct FilterOptionsCache {
    inner: Cache<OptionsKey, Arc<FilterOptions>>,
}

impl FilterOptionsCache {
    /// Create cache with max capacity
    #[inline]
    #[must_use]
    pub fn new(max_capacity: u64) -> Self {
        Self {
            inner: Cache::new(max_capacity),
        }
    }

    /// Create cache with time-based expiration
    #[inline]
    #[must_use]
    pub fn with_ttl(max_capacity: u64, ttl: Duration) -> Self {
        Self {
            inner: Cache::builder()
                .max_capacity(max_capacity)
                .time_to_live(ttl)
                .build(),
        }
    }

    #[inline]
    pub async fn insert(&self, dashboard: DashboardName, lang: &str, options: FilterOptions) {
        self.inner
            .insert((dashboard, lang.to_string()), Arc::new(options))
            .await;
    }

    #[inline]
    pub async fn get(&self, dashboard: DashboardName, lang: &str) -> Option<Arc<FilterOptions>> {
        self.inner.get(&(dashboard, lang.to_string())).await
    }

    /// Get cached options or load them
    ///
    /// Concurrent callers for one key share a single load. Failed loads are not cached.
    ///
    /// # Errors
    /// Returns the loader's error, shared with every caller that waited on it.
    pub async fn try_get_or_load<F, Fut>(
        &self,
        dashboard: DashboardName,
        lang: &str,
        load: F,
    ) -> Result<Arc<FilterOptions>, Arc<ApiError>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<FilterOptions, ApiError>>,
    {
        self.inner
            .try_get_with((dashboard, lang.to_string()), async move {
                tracing::debug!(dashboard = %dashboard, lang, "loading filter options");
                load().await.map(Arc::new)
            })
            .await
    }

    #[inline]
    pub async fn invalidate(&self, dashboard: DashboardName, lang: &str) {
        self.inner.invalidate(&(dashboard, lang.to_string())).await;
    }

    /// Invalidate all entries
    #[inline]
    pub fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }

    /// Get approximate entry count
    #[inline]
    #[must_use]
    pub fn entry_count(&self) -> u64 {
        self.inner.entry_count()
    }
}

impl Default for FilterOptionsCache {
    /// One entry per dashboard and a handful of languages
    fn default() -> Self {
        Self::new(256)
    }
}
