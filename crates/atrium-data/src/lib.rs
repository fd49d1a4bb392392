//! # Atrium Data
//!
//! Injected data access for the Atrium dashboard.
//!
//! The aggregation layer consumes an ordered project list supplied by a
//! [`ProjectSource`]; this crate provides the trait plus fixture-backed
//! implementations so the analytics stay independent of any loading
//! mechanism.
//!
//! ```rust
//! use atrium_data::{FixtureSource, ProjectSource};
//!
//! let projects = FixtureSource::new().list_projects().unwrap();
//! assert!(!projects.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
mod source;

pub use error::{DataError, DataResult};
pub use source::{load_insights, parse_projects, FixtureSource, ProjectSource, StaticSource};
