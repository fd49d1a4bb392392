//! Project record and validated builder.

use super::{ProjectStatus, RiskLevel};
use crate::error::{CoreError, CoreResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A tracked investment/construction effort.
///
/// Records are immutable once built: the portfolio set is loaded once and
/// only ever filtered (a view), never mutated in place. Field names follow
/// the camelCase wire shape of the bundled fixtures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique identifier, stable for the session.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Lead investor display string.
    pub investor: String,

    /// Region display string.
    pub region: String,

    /// Planned budget in base currency.
    pub budget_planned: Decimal,

    /// Budget spent to date. May exceed the planned budget.
    pub budget_used: Decimal,

    /// Fractional expected return (0.18 = 18%). May be negative.
    pub roi: f64,

    /// Risk tier.
    pub risk: RiskLevel,

    /// Delivery status.
    pub status: ProjectStatus,

    /// Completion percentage, 0-100.
    pub progress: u8,

    /// Planned duration in months.
    pub timeline_months: u32,
}

impl Project {
    /// Creates a new project builder.
    #[must_use]
    pub fn builder() -> ProjectBuilder {
        ProjectBuilder::new()
    }

    /// Returns the budget variance as a percentage of plan.
    ///
    /// Positive values mean overspend. `None` when the planned budget is
    /// zero (division by zero is surfaced, not hidden).
    #[must_use]
    pub fn budget_variance_pct(&self) -> Option<f64> {
        if self.budget_planned.is_zero() {
            return None;
        }
        let variance =
            (self.budget_used - self.budget_planned) / self.budget_planned * Decimal::ONE_HUNDRED;
        variance.to_f64()
    }

    /// Returns spend as a percentage of plan. `None` when the plan is zero.
    #[must_use]
    pub fn budget_utilization_pct(&self) -> Option<f64> {
        if self.budget_planned.is_zero() {
            return None;
        }
        let utilization = self.budget_used / self.budget_planned * Decimal::ONE_HUNDRED;
        utilization.to_f64()
    }

    /// Returns true if spend exceeds plan.
    #[must_use]
    pub fn is_over_budget(&self) -> bool {
        self.budget_used > self.budget_planned
    }

    /// Returns the ROI as a percentage (0.18 -> 18.0).
    #[must_use]
    pub fn roi_pct(&self) -> f64 {
        self.roi * 100.0
    }
}

/// Builder for constructing a [`Project`].
#[derive(Debug, Clone, Default)]
pub struct ProjectBuilder {
    id: Option<String>,
    name: Option<String>,
    investor: String,
    region: String,
    budget_planned: Option<Decimal>,
    budget_used: Option<Decimal>,
    roi: f64,
    risk: RiskLevel,
    status: ProjectStatus,
    progress: u8,
    timeline_months: u32,
}

impl ProjectBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            risk: RiskLevel::Low,
            status: ProjectStatus::OnTrack,
            timeline_months: 1,
            ..Self::default()
        }
    }

    /// Sets the project ID.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the display name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the lead investor.
    #[must_use]
    pub fn investor(mut self, investor: impl Into<String>) -> Self {
        self.investor = investor.into();
        self
    }

    /// Sets the region.
    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Sets the planned budget.
    #[must_use]
    pub fn budget_planned(mut self, amount: Decimal) -> Self {
        self.budget_planned = Some(amount);
        self
    }

    /// Sets the budget spent to date.
    #[must_use]
    pub fn budget_used(mut self, amount: Decimal) -> Self {
        self.budget_used = Some(amount);
        self
    }

    /// Sets the fractional ROI.
    #[must_use]
    pub fn roi(mut self, roi: f64) -> Self {
        self.roi = roi;
        self
    }

    /// Sets the risk tier.
    #[must_use]
    pub fn risk(mut self, risk: RiskLevel) -> Self {
        self.risk = risk;
        self
    }

    /// Sets the delivery status.
    #[must_use]
    pub fn status(mut self, status: ProjectStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the completion percentage (0-100).
    #[must_use]
    pub fn progress(mut self, progress: u8) -> Self {
        self.progress = progress;
        self
    }

    /// Sets the planned duration in months.
    #[must_use]
    pub fn timeline_months(mut self, months: u32) -> Self {
        self.timeline_months = months;
        self
    }

    /// Builds the project.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing or values are out
    /// of range.
    pub fn build(self) -> CoreResult<Project> {
        let id = self.id.ok_or_else(|| CoreError::missing_field("id"))?;

        let name = self.name.ok_or_else(|| CoreError::missing_field("name"))?;

        let budget_planned = self
            .budget_planned
            .ok_or_else(|| CoreError::missing_field("budget_planned"))?;

        let budget_used = self
            .budget_used
            .ok_or_else(|| CoreError::missing_field("budget_used"))?;

        if budget_planned < Decimal::ZERO {
            return Err(CoreError::invalid_project(
                &id,
                "budget_planned cannot be negative",
            ));
        }

        if budget_used < Decimal::ZERO {
            return Err(CoreError::invalid_project(
                &id,
                "budget_used cannot be negative",
            ));
        }

        if self.progress > 100 {
            return Err(CoreError::invalid_project(
                &id,
                "progress must be within 0-100",
            ));
        }

        if self.timeline_months == 0 {
            return Err(CoreError::invalid_project(
                &id,
                "timeline_months must be positive",
            ));
        }

        Ok(Project {
            id,
            name,
            investor: self.investor,
            region: self.region,
            budget_planned,
            budget_used,
            roi: self.roi,
            risk: self.risk,
            status: self.status,
            progress: self.progress,
            timeline_months: self.timeline_months,
        })
    }
}
