//! # Atrium Portfolio
//!
//! Portfolio aggregation and investor reporting for real-estate
//! development projects.
//!
//! This crate derives everything the investor dashboard renders - KPI
//! cards, chart series, report content - from an in-memory project list.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: every operation is a deterministic, synchronous
//!   reduction with explicit inputs; no caching, no shared mutable state
//! - **Views, not mutation**: filtering returns a new sequence in the
//!   original order; the underlying set is never modified
//! - **Undefined, not thrown**: metrics with no defined value (empty
//!   view, zero planned budget) are `None`, and unknown display labels
//!   degrade to the danger palette
//!
//! ## Quick Start
//!
//! ```rust
//! use atrium_portfolio::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let project = Project::builder()
//!     .id("P-001")
//!     .name("Harbor Point Tower")
//!     .region("Northeast")
//!     .budget_planned(dec!(24_000_000))
//!     .budget_used(dec!(18_500_000))
//!     .roi(0.18)
//!     .risk(RiskLevel::Medium)
//!     .build()
//!     .unwrap();
//!
//! let projects = vec![project];
//! let criteria = FilterCriteria::new().with_risk(RiskLevel::Medium);
//!
//! let view = filter_projects(&projects, &criteria);
//! let kpis = compute_kpis(&view);
//! let series = build_chart_series(&view, &SeriesConfig::default());
//!
//! assert_eq!(kpis.active_project_count, 1);
//! assert_eq!(series.budget_vs_actual.len(), 1);
//! ```
//!
//! ## Module Overview
//!
//! - [`analytics`] - KPI aggregation (utilization, ROI, risk rollup)
//! - [`charts`] - chart-ready series and fixed display palettes
//! - [`filter`] - stable project filtering
//! - [`portfolio`] - portfolio container and builder
//! - [`report`] - investor report assembly
//! - [`state`] - unidirectional dashboard state
//! - [`types`] - filter criteria and series configuration

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

// Module declarations
pub mod analytics;
pub mod charts;
pub mod error;
pub mod filter;
pub mod portfolio;
pub mod report;
pub mod state;
pub mod types;

// Re-export error types at crate root
pub use error::{PortfolioError, PortfolioResult};

// Re-export main types
pub use types::{FilterCriteria, SeriesConfig};

// Re-export portfolio types
pub use portfolio::{Portfolio, PortfolioBuilder};

// Re-export aggregation functions and outputs
pub use analytics::{compute_kpis, KpiSet, RiskTierCounts};
pub use charts::{
    build_chart_series, risk_color, risk_color_for_label, roi_band, status_color,
    truncate_label, BudgetRoiPoint, ChartSeries, RiskSlice, RoiBand,
};
pub use filter::filter_projects;
pub use report::{build_investor_report, report_register, InvestorReport, ReportLogEntry};
pub use state::{update, DashboardEvent, DashboardState};

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use atrium_portfolio::prelude::*;
/// ```
pub mod prelude {
    // Error types
    pub use crate::error::{PortfolioError, PortfolioResult};

    // Criteria and configuration
    pub use crate::types::{FilterCriteria, SeriesConfig};

    // Portfolio
    pub use crate::portfolio::{Portfolio, PortfolioBuilder};

    // Aggregation
    pub use crate::analytics::{compute_kpis, KpiSet, RiskTierCounts};
    pub use crate::charts::{build_chart_series, roi_band, ChartSeries, RoiBand};
    pub use crate::filter::filter_projects;

    // Reporting
    pub use crate::report::{build_investor_report, report_register, InvestorReport};

    // Dashboard state
    pub use crate::state::{update, DashboardEvent, DashboardState};

    // Re-export commonly used types from dependencies
    pub use atrium_core::{Project, ProjectStatus, RiskLevel};
    pub use chrono::NaiveDate;
    pub use rust_decimal::Decimal;
    pub use rust_decimal_macros::dec;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crate_compiles() {
        // Basic smoke test
        let err = PortfolioError::duplicate_id("P-001");
        assert!(err.to_string().contains("P-001"));
    }
}
