//! KPI summary computation.

use atrium_core::{Project, RiskLevel};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Histogram of projects by risk tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskTierCounts {
    /// Projects in the Low tier.
    pub low: usize,

    /// Projects in the Medium tier.
    pub medium: usize,

    /// Projects in the High tier.
    pub high: usize,
}

impl RiskTierCounts {
    /// Tallies the risk tiers of a project slice.
    #[must_use]
    pub fn from_projects(projects: &[Project]) -> Self {
        let mut counts = Self::default();
        for project in projects {
            match project.risk {
                RiskLevel::Low => counts.low += 1,
                RiskLevel::Medium => counts.medium += 1,
                RiskLevel::High => counts.high += 1,
            }
        }
        counts
    }

    /// Returns the count for a tier.
    #[must_use]
    pub fn get(&self, tier: RiskLevel) -> usize {
        match tier {
            RiskLevel::Low => self.low,
            RiskLevel::Medium => self.medium,
            RiskLevel::High => self.high,
        }
    }

    /// Returns the total across all tiers.
    #[must_use]
    pub fn total(&self) -> usize {
        self.low + self.medium + self.high
    }

    /// Rolls the histogram up to a portfolio-wide risk label.
    ///
    /// High when more than two projects are high-risk; Medium when any
    /// are; otherwise Low. Only the High bucket is consulted - the
    /// Medium count never escalates the rollup.
    #[must_use]
    pub fn overall(&self) -> RiskLevel {
        if self.high > 2 {
            RiskLevel::High
        } else if self.high > 0 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

/// Portfolio-level KPI summary.
///
/// The primary output of the aggregator, consumed by the summary cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSet {
    /// Total planned budget across the view.
    pub total_budget_planned: Decimal,

    /// Total spend across the view.
    pub total_budget_used: Decimal,

    /// Spend as a percentage of plan. `None` when the planned total is
    /// zero (empty view or all-zero plans) - the documented
    /// division-by-zero edge case.
    pub budget_utilization_pct: Option<f64>,

    /// Mean fractional ROI. `None` for an empty view.
    pub average_roi: Option<f64>,

    /// Number of projects in the view.
    pub active_project_count: usize,

    /// Risk tier histogram.
    pub risk_tiers: RiskTierCounts,

    /// Portfolio-wide risk rollup.
    pub overall_risk: RiskLevel,
}

impl KpiSet {
    /// Calculates the KPI summary for a project view.
    ///
    /// # Example
    ///
    /// ```
    /// use atrium_portfolio::KpiSet;
    ///
    /// let kpis = KpiSet::calculate(&[]);
    /// assert_eq!(kpis.budget_utilization_pct, None);
    /// assert_eq!(kpis.active_project_count, 0);
    /// ```
    #[must_use]
    pub fn calculate(projects: &[Project]) -> Self {
        let total_budget_planned: Decimal = projects.iter().map(|p| p.budget_planned).sum();
        let total_budget_used: Decimal = projects.iter().map(|p| p.budget_used).sum();

        let budget_utilization_pct = if total_budget_planned.is_zero() {
            None
        } else {
            (total_budget_used / total_budget_planned * Decimal::ONE_HUNDRED).to_f64()
        };

        let average_roi = if projects.is_empty() {
            None
        } else {
            let sum: f64 = projects.iter().map(|p| p.roi).sum();
            Some(sum / projects.len() as f64)
        };

        let risk_tiers = RiskTierCounts::from_projects(projects);

        Self {
            total_budget_planned,
            total_budget_used,
            budget_utilization_pct,
            average_roi,
            active_project_count: projects.len(),
            risk_tiers,
            overall_risk: risk_tiers.overall(),
        }
    }
}

/// Convenience function to calculate the KPI summary.
#[must_use]
pub fn compute_kpis(projects: &[Project]) -> KpiSet {
    KpiSet::calculate(projects)
}
