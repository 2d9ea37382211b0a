//! Session configuration

use explorer_api::RetryPolicy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// When a chart click commits the filters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickCommit {
    /// Re-arm the debounce window like any other edit
    #[default]
    Debounced,
    /// Commit at once
    Immediate,
}

/// Filter session and query configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Quiet interval before edits are committed
    pub debounce_ms: u64,
    pub click_commit: ClickCommit,
    /// Retry policy of campaign fetches
    pub retry: RetryPolicy,
    /// Language code sent with every request
    pub lang: String,
}

impl SessionConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With debounce interval
    #[inline]
    #[must_use]
    pub fn with_debounce(mut self, interval: Duration) -> Self {
        self.debounce_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// With click commit policy
    #[inline]
    #[must_use]
    pub fn with_click_commit(mut self, click_commit: ClickCommit) -> Self {
        self.click_commit = click_commit;
        self
    }

    /// With retry policy
    #[inline]
    #[must_use]
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// With language
    #[inline]
    #[must_use]
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 450,
            click_commit: ClickCommit::Debounced,
            retry: RetryPolicy::default(),
            lang: "en".to_string(),
        }
    }
}
