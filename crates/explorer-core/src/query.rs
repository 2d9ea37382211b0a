//! Queries over the dashboard API
//!
//! [`CampaignQuery`] observes the filter store and fetches campaign data for every
//! settled pair. Option loaders swallow failures: a selector without options is still
//! usable, a failed campaign fetch is surfaced through [`QueryState::is_error`].

use crate::store::{FilterStore, StoreReceiver};
use explorer_api::{Campaign, DashboardApi, FilterOptions, FilterOptionsCache, RetryPolicy};
use explorer_dashboards::DashboardName;
use explorer_filter::SelectOption;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Observable state of a query
#[derive(Debug, Clone)]
pub struct QueryState<T> {
    /// Last successfully fetched data; kept when a later fetch fails
    pub data: Option<Arc<T>>,
    pub is_loading: bool,
    pub is_error: bool,
    pub error: Option<String>,
    /// Fetches finished so far, successful or not
    pub completed: u64,
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self {
            data: None,
            is_loading: false,
            is_error: false,
            error: None,
            completed: 0,
        }
    }
}

impl<T> QueryState<T> {
    /// Whether charts should show the error placeholder
    ///
    /// Only when there is nothing to draw.
    #[inline]
    #[must_use]
    pub fn shows_error(&self) -> bool {
        self.is_error && self.data.is_none()
    }
}

/// Campaign data for the committed filters
#[derive(Debug)]
pub struct CampaignQuery {
    state: watch::Receiver<QueryState<Campaign>>,
    task: JoinHandle<()>,
}

impl CampaignQuery {
    /// Start observing the store
    ///
    /// Must be called within a Tokio runtime. The fetch loop stops when the query is
    /// dropped.
    #[must_use]
    pub fn spawn(
        api: Arc<dyn DashboardApi>,
        store: &FilterStore,
        lang: impl Into<String>,
        retry: RetryPolicy,
    ) -> Self {
        let (sender, state) = watch::channel(QueryState::default());
        let task = tokio::spawn(fetch_loop(
            api,
            store.subscribe(),
            sender,
            lang.into(),
            retry,
        ));
        Self { state, task }
    }

    /// Current state
    #[must_use]
    pub fn state(&self) -> QueryState<Campaign> {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<QueryState<Campaign>> {
        self.state.clone()
    }

    /// Wait until at least `completed` fetches have finished and none is running
    pub async fn settled(&self, completed: u64) -> QueryState<Campaign> {
        let mut rx = self.state.clone();
        if let Ok(state) = rx
            .wait_for(|s| !s.is_loading && s.completed >= completed)
            .await
        {
            return state.clone();
        }
        let state = rx.borrow().clone();
        state
    }
}

impl Drop for CampaignQuery {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn fetch_loop(
    api: Arc<dyn DashboardApi>,
    mut store: StoreReceiver,
    sender: watch::Sender<QueryState<Campaign>>,
    lang: String,
    retry: RetryPolicy,
) {
    loop {
        let committed = store.borrow_and_update().clone();
        if let Some(committed) = committed {
            sender.send_modify(|s| s.is_loading = true);
            let result = retry
                .run("campaign", || {
                    api.campaign(committed.dashboard, &lang, &committed.filters)
                })
                .await;
            sender.send_modify(|s| {
                s.is_loading = false;
                s.completed += 1;
                match result {
                    Ok(campaign) => {
                        tracing::info!(
                            dashboard = %committed.dashboard,
                            respondents_1 = campaign.filter_1_respondents_count,
                            respondents_2 = campaign.filter_2_respondents_count,
                            "campaign data loaded"
                        );
                        s.data = Some(Arc::new(campaign));
                        s.is_error = false;
                        s.error = None;
                    }
                    Err(err) => {
                        tracing::warn!(dashboard = %committed.dashboard, error = %err, "campaign fetch failed");
                        s.is_error = true;
                        s.error = Some(err.to_string());
                    }
                }
            });
        }
        if store.changed().await.is_err() {
            tracing::debug!("filter store closed, stopping campaign query");
            break;
        }
    }
}

/// Load filter options through the cache
///
/// Failures are logged and yield empty option lists, which are not cached.
pub async fn load_filter_options(
    api: &dyn DashboardApi,
    cache: &FilterOptionsCache,
    dashboard: DashboardName,
    lang: &str,
    retry: RetryPolicy,
) -> Arc<FilterOptions> {
    let loaded = cache
        .try_get_or_load(dashboard, lang, move || async move {
            retry
                .run("filter-options", move || api.filter_options(dashboard, lang))
                .await
        })
        .await;
    match loaded {
        Ok(options) => options,
        Err(err) => {
            tracing::warn!(dashboard = %dashboard, lang, error = %err, "filter options unavailable");
            Arc::new(FilterOptions::default())
        }
    }
}

/// Load the histogram breakdown options; failures yield an empty list
pub async fn load_breakdown_options(
    api: &dyn DashboardApi,
    dashboard: DashboardName,
    lang: &str,
    retry: RetryPolicy,
) -> Vec<SelectOption<String>> {
    match retry
        .run("who-the-people-are-options", || {
            api.who_the_people_are_options(dashboard, lang)
        })
        .await
    {
        Ok(options) => options,
        Err(err) => {
            tracing::warn!(dashboard = %dashboard, error = %err, "breakdown options unavailable");
            Vec::new()
        }
    }
}
