//! The shared filter store
//!
//! Holds the last committed filter pair together with the dashboard it belongs to.
//! Queries subscribe to it and re-fetch whenever a new pair lands; pairs committed while
//! a fetch runs are coalesced into the newest one.

use explorer_dashboards::DashboardName;
use explorer_filter::FilterPair;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;

/// A settled filter pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommittedFilters {
    pub dashboard: DashboardName,
    pub filters: FilterPair,
}

/// Receiver side of the store
pub type StoreReceiver = watch::Receiver<Option<Arc<CommittedFilters>>>;

/// Committed filter pair, observable
#[derive(Debug, Clone)]
pub struct FilterStore {
    sender: Arc<watch::Sender<Option<Arc<CommittedFilters>>>>,
    commits: Arc<AtomicU64>,
}

impl FilterStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        let (sender, _) = watch::channel(None);
        Self {
            sender: Arc::new(sender),
            commits: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Publish a dashboard's initial filters without counting a commit
    ///
    /// Ignored when the store already holds a pair of the same dashboard; a pair left by
    /// another dashboard is replaced. Returns whether the store changed.
    pub fn seed(&self, dashboard: DashboardName, filters: FilterPair) -> bool {
        self.sender.send_if_modified(|current| {
            if current.as_ref().is_some_and(|c| c.dashboard == dashboard) {
                return false;
            }
            *current = Some(Arc::new(CommittedFilters { dashboard, filters }));
            true
        })
    }

    /// Publish a committed pair, returning the commit sequence number
    pub fn commit(&self, dashboard: DashboardName, filters: FilterPair) -> u64 {
        self.sender
            .send_replace(Some(Arc::new(CommittedFilters { dashboard, filters })));
        let seq = self.commits.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::info!(seq, dashboard = %dashboard, "filters committed");
        seq
    }

    /// Latest pair, if any
    #[must_use]
    pub fn current(&self) -> Option<Arc<CommittedFilters>> {
        self.sender.borrow().clone()
    }

    /// Observe committed pairs
    #[must_use]
    pub fn subscribe(&self) -> StoreReceiver {
        self.sender.subscribe()
    }

    /// Number of commits so far
    #[inline]
    #[must_use]
    pub fn commit_count(&self) -> u64 {
        self.commits.load(Ordering::SeqCst)
    }
}

impl Default for FilterStore {
    fn default() -> Self {
        Self::new()
    }
}
