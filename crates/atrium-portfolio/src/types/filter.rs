//! Filter criteria for project views.

use atrium_core::{Project, ProjectStatus, RiskLevel};
use serde::{Deserialize, Serialize};

/// Criteria applied when deriving a project view.
///
/// Each field is an independent predicate; a record must satisfy all of
/// them (logical AND). `None` means "All" for the categorical fields and
/// an empty `search_term` matches everything, so the default value is the
/// identity filter.
///
/// # Examples
///
/// ```
/// use atrium_portfolio::FilterCriteria;
/// use atrium_core::RiskLevel;
///
/// let criteria = FilterCriteria::new()
///     .with_risk(RiskLevel::High)
///     .with_search("tower");
///
/// assert!(!criteria.is_identity());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against project names.
    #[serde(default)]
    pub search_term: String,

    /// Keep only this risk tier. `None` keeps all.
    #[serde(default)]
    pub risk: Option<RiskLevel>,

    /// Keep only this region. `None` keeps all.
    #[serde(default)]
    pub region: Option<String>,

    /// Keep only this status. `None` keeps all.
    #[serde(default)]
    pub status: Option<ProjectStatus>,
}

impl FilterCriteria {
    /// Creates the identity filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search term.
    #[must_use]
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// Restricts the view to one risk tier.
    #[must_use]
    pub fn with_risk(mut self, risk: RiskLevel) -> Self {
        self.risk = Some(risk);
        self
    }

    /// Restricts the view to one region.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Restricts the view to one status.
    #[must_use]
    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Returns true if this filter keeps every record.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.search_term.is_empty()
            && self.risk.is_none()
            && self.region.is_none()
            && self.status.is_none()
    }

    /// Returns true if the project satisfies all four predicates.
    #[must_use]
    pub fn matches(&self, project: &Project) -> bool {
        let matches_search = self.search_term.is_empty()
            || project
                .name
                .to_lowercase()
                .contains(&self.search_term.to_lowercase());

        let matches_risk = self.risk.map_or(true, |risk| project.risk == risk);
        let matches_region = self
            .region
            .as_deref()
            .map_or(true, |region| project.region == region);
        let matches_status = self.status.map_or(true, |status| project.status == status);

        matches_search && matches_risk && matches_region && matches_status
    }
}
