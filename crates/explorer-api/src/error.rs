//! Error types for the dashboard API

use reqwest::StatusCode;

/// Dashboard API errors
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Non-success response
    #[error("HTTP {status}: {body}")]
    Http { status: StatusCode, body: String },

    /// Transport or decoding failure
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Base URL is not usable
    #[error("invalid base url: '{0}'")]
    InvalidBaseUrl(String),

    /// Backend could not serve the request
    #[error("service unavailable: {0}")]
    Unavailable(String),

    /// Every attempt failed
    #[error("gave up after {attempts} attempts: {last_error}")]
    RetriesExhausted { attempts: u32, last_error: String },
}

impl ApiError {
    /// Check if another attempt may succeed
    ///
    /// Client errors other than 429 are final.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http { status, .. } => {
                status.is_server_error() || *status == StatusCode::TOO_MANY_REQUESTS
            }
            Self::Request(_) | Self::Unavailable(_) => true,
            Self::InvalidBaseUrl(_) | Self::RetriesExhausted { .. } => false,
        }
    }

    /// Create HTTP error
    pub fn http(status: StatusCode, body: impl Into<String>) -> Self {
        Self::Http {
            status,
            body: body.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_classification() {
        assert!(ApiError::http(StatusCode::BAD_GATEWAY, "").is_retryable());
        assert!(ApiError::http(StatusCode::TOO_MANY_REQUESTS, "").is_retryable());
        assert!(!ApiError::http(StatusCode::NOT_FOUND, "").is_retryable());
        assert!(ApiError::Unavailable("down".into()).is_retryable());
        assert!(!ApiError::InvalidBaseUrl("ftp://x".into()).is_retryable());
    }

    #[test]
    fn error_display() {
        let err = ApiError::http(StatusCode::NOT_FOUND, "no such campaign");
        assert_eq!(err.to_string(), "HTTP 404 Not Found: no such campaign");
    }
}
