//! # Atrium Core
//!
//! Core domain types for the Atrium investor-reporting workspace.
//!
//! This crate provides the foundational building blocks used throughout
//! Atrium:
//!
//! - **Types**: `Project` records plus `RiskLevel` / `ProjectStatus`
//!   classification and the `Insight` feed entry
//! - **Builder**: validated construction of project records
//! - **Formatting**: display helpers for currency and percentage values
//!
//! ## Design Philosophy
//!
//! - **Immutable records**: a project set is loaded once and only ever
//!   viewed, never mutated in place
//! - **Explicit over implicit**: unknown display labels degrade, they do
//!   not panic
//!
//! ## Example
//!
//! ```rust
//! use atrium_core::{Project, RiskLevel};
//! use rust_decimal_macros::dec;
//!
//! let project = Project::builder()
//!     .id("P-001")
//!     .name("Harbor Point Tower")
//!     .budget_planned(dec!(24_000_000))
//!     .budget_used(dec!(18_500_000))
//!     .risk(RiskLevel::Medium)
//!     .build()
//!     .unwrap();
//!
//! assert!(!project.is_over_budget());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod format;
pub mod types;

pub use error::{CoreError, CoreResult};
pub use types::{Insight, InsightKind, Project, ProjectBuilder, ProjectStatus, RiskLevel};
