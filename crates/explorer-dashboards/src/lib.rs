//! Survey Explorer Dashboards
//!
//! Dashboard identities and the static policy table consulted by the filter engine and
//! the chart shaping code. A dashboard's policy is looked up once with
//! [`DashboardName::config`] rather than re-derived through scattered conditionals.
//!
//! # Example
//!
//! ```rust
//! use explorer_dashboards::DashboardName;
//!
//! let name: DashboardName = "wwwpakistan".parse().unwrap();
//! assert_eq!(name.config().locked_countries, &["PK"]);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod breakdown;
pub mod config;
pub mod name;
pub mod registry;

pub use breakdown::{Breakdown, UnknownBreakdown};
pub use config::{CopyKeys, DashboardConfig, OptionalFields, Palette, TopicBreakdownLayout};
pub use name::{DashboardName, UnknownDashboard};
pub use registry::all_dashboards;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
