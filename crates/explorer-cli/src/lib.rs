//! # Explorer CLI
//!
//! Headless front end for the survey dashboards: list the dashboards, inspect their
//! filter options and run the filter pipeline against the API to summarise a campaign.
//!
//! ## Example
//!
//! ```no_run
//! use explorer_api::HttpDashboardApi;
//! use explorer_cli::{run_campaign, AppConfig, CampaignArgs};
//! use explorer_dashboards::DashboardName;
//! use std::sync::Arc;
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let config = AppConfig::load(None)?;
//! let api = Arc::new(HttpDashboardApi::new(config.api()?)?);
//! let report = run_campaign(api, DashboardName::MidwivesVoices, &CampaignArgs::default(), &config).await?;
//! println!("{}", explorer_cli::render_campaign(&report));
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod commands;
pub mod config;
pub mod report;
pub mod telemetry;

pub use commands::{fetch_filter_options, run_campaign, CampaignArgs, CampaignReport, FormArgs};
pub use config::{AppConfig, ConfigError};
pub use report::{render_campaign, render_dashboards, render_filter_options};
pub use telemetry::init_tracing;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
