//! Error types for the filter session

use explorer_filter::FilterError;

/// Filter session errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// Edit rejected by filter validation or dashboard policy
    #[error("edit rejected: {0}")]
    Filter(#[from] FilterError),

    /// Session was torn down
    #[error("filter session is no longer mounted")]
    Unmounted,
}

impl SessionError {
    /// Whether the edit failed because of the filter itself rather than the session
    #[inline]
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Filter(_))
    }
}
