//! Chart series construction.

use super::colors::risk_color;
use crate::analytics::RiskTierCounts;
use crate::types::SeriesConfig;
use atrium_core::{Project, RiskLevel};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const MILLION: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// One per-project point on the budget-vs-actual and ROI charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetRoiPoint {
    /// Axis label, truncated for compact layouts.
    pub label: String,

    /// Untruncated project name for tooltips.
    pub full_name: String,

    /// Planned budget in millions.
    pub planned_m: f64,

    /// Actual spend in millions.
    pub actual_m: f64,

    /// ROI as a percentage, rounded to one decimal.
    pub roi_pct: f64,
}

/// One slice of the risk distribution chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskSlice {
    /// Risk tier of this slice.
    pub tier: RiskLevel,

    /// Number of projects in the tier.
    pub count: usize,

    /// Fixed display color for the tier.
    pub color: String,
}

/// Chart-ready series derived from a project view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Per-project budget and ROI points, in view order.
    pub budget_vs_actual: Vec<BudgetRoiPoint>,

    /// Risk distribution slices. Always all three tiers, zero counts
    /// included.
    pub risk_distribution: Vec<RiskSlice>,
}

/// Truncates a label to `width` characters, appending `...` when the
/// name is longer. A name of exactly `width` characters is unchanged.
#[must_use]
pub fn truncate_label(name: &str, width: usize) -> String {
    if name.chars().count() > width {
        let truncated: String = name.chars().take(width).collect();
        format!("{truncated}...")
    } else {
        name.to_string()
    }
}

/// Builds the chart series for a project view.
///
/// # Examples
///
/// ```
/// use atrium_portfolio::{build_chart_series, SeriesConfig};
///
/// let series = build_chart_series(&[], &SeriesConfig::default());
/// assert!(series.budget_vs_actual.is_empty());
/// assert_eq!(series.risk_distribution.len(), 3);
/// ```
#[must_use]
pub fn build_chart_series(projects: &[Project], config: &SeriesConfig) -> ChartSeries {
    let budget_vs_actual = projects
        .iter()
        .map(|project| BudgetRoiPoint {
            label: truncate_label(&project.name, config.label_width),
            full_name: project.name.clone(),
            planned_m: (project.budget_planned / MILLION).to_f64().unwrap_or(0.0),
            actual_m: (project.budget_used / MILLION).to_f64().unwrap_or(0.0),
            roi_pct: (project.roi * 1000.0).round() / 10.0,
        })
        .collect();

    let counts = RiskTierCounts::from_projects(projects);
    let risk_distribution = RiskLevel::all()
        .iter()
        .map(|&tier| RiskSlice {
            tier,
            count: counts.get(tier),
            color: risk_color(tier).to_string(),
        })
        .collect();

    ChartSeries {
        budget_vs_actual,
        risk_distribution,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::{roi_band, RoiBand};
    use rust_decimal_macros::dec;

    fn create_test_project(id: &str, name: &str, risk: RiskLevel, roi: f64) -> Project {
        Project::builder()
            .id(id)
            .name(name)
            .budget_planned(dec!(24_000_000))
            .budget_used(dec!(18_500_000))
            .risk(risk)
            .roi(roi)
            .build()
            .unwrap()
    }

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("Short", 12), "Short");
        assert_eq!(
            truncate_label("Harbor Point Tower", 12),
            "Harbor Point..."
        );
        // Exactly at the limit is unchanged
        assert_eq!(truncate_label("TwelveCharsX", 12), "TwelveCharsX");
        assert_eq!(truncate_label("ThirteenChars", 12), "ThirteenChar...");
    }

    #[test]
    fn test_truncate_label_multibyte() {
        // Truncation counts characters, not bytes
        let name = "Résidence Belvédère Deluxe";
        let label = truncate_label(name, 12);
        assert_eq!(label, "Résidence Be...");
    }

    #[test]
    fn test_budget_points_in_millions() {
        let projects = vec![create_test_project(
            "A",
            "Harbor Point Tower",
            RiskLevel::Low,
            0.18,
        )];

        let series = build_chart_series(&projects, &SeriesConfig::default());
        let point = &series.budget_vs_actual[0];

        assert!((point.planned_m - 24.0).abs() < 1e-9);
        assert!((point.actual_m - 18.5).abs() < 1e-9);
        assert_eq!(point.full_name, "Harbor Point Tower");
        assert_eq!(point.label, "Harbor Point...");
    }

    #[test]
    fn test_roi_rounded_to_one_decimal() {
        let projects = vec![create_test_project("A", "P", RiskLevel::Low, 0.18349)];

        let series = build_chart_series(&projects, &SeriesConfig::default());
        assert!((series.budget_vs_actual[0].roi_pct - 18.3).abs() < 1e-9);
    }

    #[test]
    fn test_wide_layout_truncates_later() {
        let projects = vec![create_test_project(
            "A",
            "Harbor Point Tower",
            RiskLevel::Low,
            0.18,
        )];

        let series = build_chart_series(&projects, &SeriesConfig::wide());
        assert_eq!(series.budget_vs_actual[0].label, "Harbor Point To...");
    }

    #[test]
    fn test_risk_distribution_has_all_tiers() {
        let projects = vec![
            create_test_project("A", "P1", RiskLevel::High, 0.10),
            create_test_project("B", "P2", RiskLevel::High, 0.10),
        ];

        let series = build_chart_series(&projects, &SeriesConfig::default());
        assert_eq!(series.risk_distribution.len(), 3);

        let counts: Vec<usize> = series.risk_distribution.iter().map(|s| s.count).collect();
        assert_eq!(counts, vec![0, 0, 2]); // Low, Medium, High

        let total: usize = counts.iter().sum();
        assert_eq!(total, projects.len());
    }

    #[test]
    fn test_series_color_matches_band() {
        let projects = vec![create_test_project("A", "P", RiskLevel::Low, 0.20)];
        let series = build_chart_series(&projects, &SeriesConfig::default());

        // Exactly 20.0% stays amber
        assert_eq!(roi_band(series.budget_vs_actual[0].roi_pct), RoiBand::Amber);
    }

    #[test]
    fn test_empty_view() {
        let series = build_chart_series(&[], &SeriesConfig::default());
        assert!(series.budget_vs_actual.is_empty());
        assert!(series.risk_distribution.iter().all(|s| s.count == 0));
    }
}
