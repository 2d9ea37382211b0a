//! Survey Explorer Filters
//!
//! The filter model shared by every dashboard screen:
//! - [`Filter`]: the criteria narrowing which survey responses are aggregated
//! - [`FilterPair`]: the "drill-down" and "compare-to" filters, edited independently
//!   and committed together
//! - [`CountryRegionCatalog`]: region options per country, with [`derive_regions`]
//!   keeping the region selection scoped to a single selected country
//!
//! # Example
//!
//! ```rust
//! use explorer_filter::{CountryRegionCatalog, Filter, SelectOption, apply_region_derivation};
//!
//! let mut catalog = CountryRegionCatalog::new();
//! catalog.insert("PK", vec![SelectOption::new("punjab", "Punjab")]);
//!
//! let mut filter = Filter::new().with_countries(["PK"]);
//! let options = apply_region_derivation(&mut filter, &catalog);
//! assert_eq!(options.len(), 1);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod catalog;
pub mod error;
pub mod filter;
pub mod option;
pub mod validation;

// Re-exports for convenience
pub use catalog::{apply_region_derivation, derive_regions, CountryRegionCatalog};
pub use error::FilterError;
pub use filter::{FieldEdit, Filter, FilterField, FilterPair, FormId, ValueSet};
pub use option::{CountryRegionOption, SelectOption};
pub use validation::validate_filter;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
