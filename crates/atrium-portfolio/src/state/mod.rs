//! Unidirectional dashboard state.
//!
//! UI state (active filters, selection, open modals) is explicit data
//! threaded through a pure update function; there are no ambient
//! globals. The view layer dispatches a [`DashboardEvent`] and re-renders
//! from the returned state.

use crate::filter::filter_projects;
use crate::types::FilterCriteria;
use atrium_core::{Project, ProjectStatus, RiskLevel};
use serde::{Deserialize, Serialize};

/// The dashboard's explicit UI state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardState {
    /// Active filter criteria.
    pub criteria: FilterCriteria,

    /// Id of the selected project, if any.
    pub selected_project: Option<String>,

    /// Explicit report subject, if one was requested.
    pub report_project: Option<String>,

    /// Whether the project detail modal is open.
    pub project_modal_open: bool,

    /// Whether the report modal is open.
    pub report_modal_open: bool,
}

/// Events the view layer can dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    /// The search box changed.
    SearchChanged(String),
    /// The risk filter changed; `None` is "All".
    RiskFilterChanged(Option<RiskLevel>),
    /// The region filter changed; `None` is "All".
    RegionFilterChanged(Option<String>),
    /// The status filter changed; `None` is "All".
    StatusFilterChanged(Option<ProjectStatus>),
    /// All filters reset to the identity criteria.
    FiltersCleared,
    /// A project was selected; opens the detail modal.
    ProjectSelected(String),
    /// The detail modal was dismissed. Selection is kept.
    ProjectModalClosed,
    /// A report was requested, optionally for a specific project.
    ReportRequested(Option<String>),
    /// The report modal was dismissed.
    ReportModalClosed,
}

impl DashboardState {
    /// Creates the initial state: identity filter, nothing selected,
    /// all modals closed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the projects visible under the active criteria.
    #[must_use]
    pub fn visible_projects(&self, projects: &[Project]) -> Vec<Project> {
        filter_projects(projects, &self.criteria)
    }

    /// Resolves the report subject: the explicit target if set, else the
    /// selection, else the first project.
    #[must_use]
    pub fn report_target<'a>(&self, projects: &'a [Project]) -> Option<&'a Project> {
        let by_id = |id: &String| projects.iter().find(|p| &p.id == id);

        self.report_project
            .as_ref()
            .and_then(by_id)
            .or_else(|| self.selected_project.as_ref().and_then(by_id))
            .or_else(|| projects.first())
    }
}

/// Applies an event to the state, returning the next state.
///
/// Pure: no I/O, no timers. The view layer owns rendering and the
/// cosmetic report-generation spinner.
#[must_use]
pub fn update(mut state: DashboardState, event: DashboardEvent) -> DashboardState {
    match event {
        DashboardEvent::SearchChanged(term) => {
            state.criteria.search_term = term;
        }
        DashboardEvent::RiskFilterChanged(risk) => {
            state.criteria.risk = risk;
        }
        DashboardEvent::RegionFilterChanged(region) => {
            state.criteria.region = region;
        }
        DashboardEvent::StatusFilterChanged(status) => {
            state.criteria.status = status;
        }
        DashboardEvent::FiltersCleared => {
            state.criteria = FilterCriteria::new();
        }
        DashboardEvent::ProjectSelected(id) => {
            state.selected_project = Some(id);
            state.project_modal_open = true;
        }
        DashboardEvent::ProjectModalClosed => {
            state.project_modal_open = false;
        }
        DashboardEvent::ReportRequested(target) => {
            state.report_project = target;
            state.report_modal_open = true;
        }
        DashboardEvent::ReportModalClosed => {
            state.report_modal_open = false;
            state.report_project = None;
        }
    }
    state
}
