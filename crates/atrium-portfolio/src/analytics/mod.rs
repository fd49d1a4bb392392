//! Portfolio-level KPI aggregation.
//!
//! All functions are pure reductions over an in-memory project slice.
//! Metrics that are undefined for the input (empty set, zero planned
//! budget) come back as `None`; the view layer renders a neutral
//! placeholder.

mod kpi;

pub use kpi::{compute_kpis, KpiSet, RiskTierCounts};
