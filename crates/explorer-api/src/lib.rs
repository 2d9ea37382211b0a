//! Survey Explorer API
//!
//! Backend access for the dashboards:
//! - [`DashboardApi`]: the async seam queries and sessions depend on
//! - [`HttpDashboardApi`]: the reqwest implementation
//! - [`RetryPolicy`]: exponential backoff around transient failures
//! - [`FilterOptionsCache`]: option lists cached per dashboard and language
//!
//! # Example
//!
//! ```rust,no_run
//! use explorer_api::{ApiConfig, DashboardApi, HttpDashboardApi, RetryPolicy};
//! use explorer_dashboards::DashboardName;
//!
//! # async fn demo() -> Result<(), explorer_api::ApiError> {
//! let api = HttpDashboardApi::new(ApiConfig::new("http://localhost:8000"))?;
//! let options = RetryPolicy::default()
//!     .run("filter-options", || api.filter_options(DashboardName::WhatWomenWant, "en"))
//!     .await?;
//! println!("{} countries", options.countries.len());
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod api;
pub mod cache;
pub mod client;
pub mod error;
pub mod models;
pub mod retry;

pub use api::DashboardApi;
pub use cache::{FilterOptionsCache, OptionsKey};
pub use client::{ApiConfig, HttpDashboardApi};
pub use error::ApiError;
pub use models::{
    Campaign, CampaignRequest, FilterOptions, GenderCount, Histogram, HistogramCount,
    ResponsesBreakdown, TopWordsAndPhrases, TopicCount, WordCount, WordcloudWord,
};
pub use retry::RetryPolicy;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
