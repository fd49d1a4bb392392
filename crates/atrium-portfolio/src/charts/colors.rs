//! Fixed display palette and ROI color banding.

use atrium_core::{InsightKind, ProjectStatus, RiskLevel};

/// Success/low-risk green.
pub const COLOR_GREEN: &str = "#10B981";

/// Warning/medium-risk amber.
pub const COLOR_AMBER: &str = "#F59E0B";

/// Danger/high-risk red.
pub const COLOR_RED: &str = "#EF4444";

/// Accent blue used for the planned-budget series.
pub const COLOR_BLUE: &str = "#3B82F6";

/// Color band for an ROI bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoiBand {
    /// ROI above 20%.
    Green,
    /// ROI above 15%, up to and including 20%.
    Amber,
    /// ROI of 15% or below.
    Red,
}

impl RoiBand {
    /// Returns the hex color for this band.
    #[must_use]
    pub fn hex(&self) -> &'static str {
        match self {
            Self::Green => COLOR_GREEN,
            Self::Amber => COLOR_AMBER,
            Self::Red => COLOR_RED,
        }
    }
}

/// Bands an ROI percentage into a display color.
///
/// Comparisons are strict: exactly 20% is Amber, exactly 15% is Red.
/// The thresholds are fixed constants, not configuration.
#[must_use]
pub fn roi_band(roi_pct: f64) -> RoiBand {
    if roi_pct > 20.0 {
        RoiBand::Green
    } else if roi_pct > 15.0 {
        RoiBand::Amber
    } else {
        RoiBand::Red
    }
}

/// Returns the hex color for a risk tier.
#[must_use]
pub fn risk_color(tier: RiskLevel) -> &'static str {
    match tier {
        RiskLevel::Low => COLOR_GREEN,
        RiskLevel::Medium => COLOR_AMBER,
        RiskLevel::High => COLOR_RED,
    }
}

/// Returns the hex color for a risk display label.
///
/// Unrecognized labels fall back to the danger color instead of failing;
/// the aggregator does not validate enum membership.
#[must_use]
pub fn risk_color_for_label(label: &str) -> &'static str {
    match RiskLevel::from_label(label) {
        Some(tier) => risk_color(tier),
        None => COLOR_RED,
    }
}

/// Returns the hex color for a delivery status.
#[must_use]
pub fn status_color(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::OnTrack => COLOR_GREEN,
        ProjectStatus::Delayed => COLOR_AMBER,
        ProjectStatus::AtRisk => COLOR_RED,
    }
}

/// Returns the hex color for a status display label, with the same
/// danger fallback as [`risk_color_for_label`].
#[must_use]
pub fn status_color_for_label(label: &str) -> &'static str {
    match ProjectStatus::from_label(label) {
        Some(status) => status_color(status),
        None => COLOR_RED,
    }
}

/// Returns the hex color for an insight tone.
#[must_use]
pub fn insight_color(kind: InsightKind) -> &'static str {
    match kind {
        InsightKind::Positive => COLOR_GREEN,
        InsightKind::Warning => COLOR_AMBER,
        InsightKind::Negative => COLOR_RED,
    }
}
