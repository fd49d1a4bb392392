//! Investor report assembly.
//!
//! Builds the printable per-project report content: executive summary
//! scalars, a quarterly planned/actual series, and the generated
//! narrative paragraphs. Rendering (and the cosmetic "generating" spinner
//! of the dashboard) is the view layer's business; nothing here waits or
//! draws.

use atrium_core::{format, Project, ProjectStatus, RiskLevel};
use chrono::{Duration, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const MILLION: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// One quarter of the report's planned/actual series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuarterPoint {
    /// Quarter label ("Q1".."Q4").
    pub label: String,

    /// Planned budget for the quarter, in millions.
    pub planned_m: f64,

    /// Actual spend for the quarter, in millions.
    pub actual_m: f64,
}

/// Assembled content of a per-project investor report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestorReport {
    /// Subject project id.
    pub project_id: String,

    /// Subject project name.
    pub project_name: String,

    /// Lead investor.
    pub investor: String,

    /// Date the report was generated.
    pub generated_on: NaiveDate,

    /// Budget variance vs plan, percent. `None` when the plan is zero.
    pub budget_variance_pct: Option<f64>,

    /// Spend as a percentage of plan. `None` when the plan is zero.
    pub budget_utilization_pct: Option<f64>,

    /// ROI as a percentage.
    pub roi_pct: f64,

    /// Completion percentage.
    pub progress: u8,

    /// Risk tier.
    pub risk: RiskLevel,

    /// Delivery status.
    pub status: ProjectStatus,

    /// Planned duration in months.
    pub timeline_months: u32,

    /// Four-quarter planned/actual series, in millions.
    pub quarterly: Vec<QuarterPoint>,

    /// Generated performance paragraph.
    pub performance_summary: String,

    /// Generated risk paragraph.
    pub risk_summary: String,
}

/// One row of the report register listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportLogEntry {
    /// Sequential register number, starting at 1.
    pub id: usize,

    /// Subject project id.
    pub project_id: String,

    /// Subject project name.
    pub project_name: String,

    /// Lead investor.
    pub investor: String,

    /// Date the report was generated.
    pub generated_on: NaiveDate,

    /// Report kind label.
    pub report_type: String,

    /// Register status label.
    pub status: String,
}

/// Builds the investor report content for a project.
///
/// # Examples
///
/// ```
/// use atrium_portfolio::build_investor_report;
/// use atrium_core::Project;
/// use chrono::NaiveDate;
/// use rust_decimal_macros::dec;
///
/// let project = Project::builder()
///     .id("P-001")
///     .name("Harbor Point Tower")
///     .budget_planned(dec!(24_000_000))
///     .budget_used(dec!(18_000_000))
///     .build()
///     .unwrap();
///
/// let report = build_investor_report(
///     &project,
///     NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
/// );
/// assert_eq!(report.quarterly.len(), 4);
/// ```
#[must_use]
pub fn build_investor_report(project: &Project, generated_on: NaiveDate) -> InvestorReport {
    let quarterly = quarterly_series(project);

    let utilization_display = match project.budget_utilization_pct() {
        Some(pct) => format!("{pct:.1}%"),
        None => "n/a".to_string(),
    };

    let performance_summary = format!(
        "The project is currently {}% complete with a {} ROI projection. \
         Budget utilization stands at {}.",
        project.progress,
        format::format_percentage(project.roi, 1),
        utilization_display,
    );

    let risk_summary = format!(
        "Risk level: {}. Status: {}. Timeline: {} months.",
        project.risk, project.status, project.timeline_months,
    );

    InvestorReport {
        project_id: project.id.clone(),
        project_name: project.name.clone(),
        investor: project.investor.clone(),
        generated_on,
        budget_variance_pct: project.budget_variance_pct(),
        budget_utilization_pct: project.budget_utilization_pct(),
        roi_pct: project.roi_pct(),
        progress: project.progress,
        risk: project.risk,
        status: project.status,
        timeline_months: project.timeline_months,
        quarterly,
        performance_summary,
        risk_summary,
    }
}

/// Splits the planned and actual budgets evenly across four quarters,
/// in millions.
fn quarterly_series(project: &Project) -> Vec<QuarterPoint> {
    let four = Decimal::from(4);
    let planned_m = (project.budget_planned / four / MILLION)
        .to_f64()
        .unwrap_or(0.0);
    let actual_m = (project.budget_used / four / MILLION)
        .to_f64()
        .unwrap_or(0.0);

    ["Q1", "Q2", "Q3", "Q4"]
        .iter()
        .map(|&label| QuarterPoint {
            label: label.to_string(),
            planned_m,
            actual_m,
        })
        .collect()
}

/// Builds the report register listing: one completed quarterly report
/// per project, with generated dates stepping back one day per row.
#[must_use]
pub fn report_register(projects: &[Project], as_of: NaiveDate) -> Vec<ReportLogEntry> {
    projects
        .iter()
        .enumerate()
        .map(|(index, project)| ReportLogEntry {
            id: index + 1,
            project_id: project.id.clone(),
            project_name: project.name.clone(),
            investor: project.investor.clone(),
            generated_on: as_of - Duration::days(index as i64),
            report_type: "Quarterly Report".to_string(),
            status: "Completed".to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn create_test_project() -> Project {
        Project::builder()
            .id("P-001")
            .name("Harbor Point Tower")
            .investor("Meridian Capital")
            .region("Northeast")
            .budget_planned(dec!(24_000_000))
            .budget_used(dec!(27_000_000))
            .roi(0.18)
            .risk(RiskLevel::Medium)
            .status(ProjectStatus::Delayed)
            .progress(72)
            .timeline_months(30)
            .build()
            .unwrap()
    }

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
    }

    #[test]
    fn test_report_scalars() {
        let report = build_investor_report(&create_test_project(), as_of());

        // 27M vs 24M plan: +12.5% variance, 112.5% utilization
        assert!((report.budget_variance_pct.unwrap() - 12.5).abs() < 1e-9);
        assert!((report.budget_utilization_pct.unwrap() - 112.5).abs() < 1e-9);
        assert!((report.roi_pct - 18.0).abs() < 1e-9);
        assert_eq!(report.risk, RiskLevel::Medium);
        assert_eq!(report.generated_on, as_of());
    }

    #[test]
    fn test_quarterly_series_is_even_split() {
        let report = build_investor_report(&create_test_project(), as_of());

        assert_eq!(report.quarterly.len(), 4);
        for point in &report.quarterly {
            assert!((point.planned_m - 6.0).abs() < 1e-9);
            assert!((point.actual_m - 6.75).abs() < 1e-9);
        }
        assert_eq!(report.quarterly[0].label, "Q1");
        assert_eq!(report.quarterly[3].label, "Q4");
    }

    #[test]
    fn test_summary_paragraphs() {
        let report = build_investor_report(&create_test_project(), as_of());

        assert!(report.performance_summary.contains("72% complete"));
        assert!(report.performance_summary.contains("18.0% ROI"));
        assert!(report.performance_summary.contains("112.5%"));

        assert!(report.risk_summary.contains("Risk level: Medium"));
        assert!(report.risk_summary.contains("Status: Delayed"));
        assert!(report.risk_summary.contains("30 months"));
    }

    #[test]
    fn test_zero_plan_renders_placeholder() {
        let project = Project::builder()
            .id("P-000")
            .name("Unfunded")
            .budget_planned(Decimal::ZERO)
            .budget_used(Decimal::ZERO)
            .build()
            .unwrap();

        let report = build_investor_report(&project, as_of());
        assert_eq!(report.budget_variance_pct, None);
        assert!(report.performance_summary.contains("n/a"));
    }

    #[test]
    fn test_report_register_dates_step_back() {
        let projects = vec![
            create_test_project(),
            Project::builder()
                .id("P-002")
                .name("Riverside Commons")
                .budget_planned(dec!(8_000_000))
                .budget_used(dec!(2_000_000))
                .build()
                .unwrap(),
        ];

        let register = report_register(&projects, as_of());

        assert_eq!(register.len(), 2);
        assert_eq!(register[0].id, 1);
        assert_eq!(register[0].generated_on, as_of());
        assert_eq!(register[1].generated_on, as_of() - Duration::days(1));
        assert_eq!(register[1].project_id, "P-002");
        assert_eq!(register[0].report_type, "Quarterly Report");
    }
}
