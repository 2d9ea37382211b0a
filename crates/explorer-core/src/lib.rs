//! Survey Explorer Core
//!
//! The state core under the dashboard screens:
//! - [`FilterSession`]: drill-down and compare-to forms, region derivation, debounced
//!   commit and chart-click mutation
//! - [`FilterStore`]: the committed pair every query observes
//! - [`CampaignQuery`]: campaign data re-fetched for each committed pair
//! - [`charts`]: chart data shaped from a campaign
//!
//! # Example
//!
//! ```rust,no_run
//! use explorer_core::{FilterSession, FilterStore, SessionConfig};
//! use explorer_dashboards::DashboardName;
//! use explorer_filter::{FieldEdit, FormId};
//!
//! # async fn demo() -> Result<(), explorer_core::SessionError> {
//! let store = FilterStore::new();
//! let session = FilterSession::new(DashboardName::WhatWomenWant, store.clone(), SessionConfig::default());
//!
//! session.edit(FormId::Filter1, FieldEdit::KeywordFilter("Water".into()))?;
//! session.edit(FormId::Filter2, FieldEdit::Ages(vec!["20".into()]))?;
//!
//! // Both edits land in one commit after the quiet interval
//! tokio::time::sleep(session.config().debounce()).await;
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod charts;
pub mod click;
pub mod config;
pub mod error;
pub mod query;
pub mod session;
pub mod store;
pub mod timer;

pub use charts::{
    gender_slices, initial_breakdown, nice_num, topic_breakdown, ComparisonBar,
    ComparisonHistogram, GenderSlice, TopicBreakdown, TopicSection, TopicSectionKind,
    WordcloudScale,
};
pub use click::{series_form, ChartClick, ClickAction};
pub use config::{ClickCommit, SessionConfig};
pub use error::SessionError;
pub use query::{load_breakdown_options, load_filter_options, CampaignQuery, QueryState};
pub use session::FilterSession;
pub use store::{CommittedFilters, FilterStore, StoreReceiver};
pub use timer::CancellableTimer;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
