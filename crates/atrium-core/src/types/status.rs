//! Delivery status classification for projects.

use serde::{Deserialize, Serialize};

/// Delivery status label assigned to a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProjectStatus {
    /// Tracking to plan.
    #[serde(rename = "On Track")]
    #[default]
    OnTrack,
    /// Behind schedule.
    Delayed,
    /// Delivery at risk.
    #[serde(rename = "At Risk")]
    AtRisk,
}

impl ProjectStatus {
    /// Returns all statuses in a standard order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[Self::OnTrack, Self::Delayed, Self::AtRisk]
    }

    /// Returns the display label.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::OnTrack => "On Track",
            Self::Delayed => "Delayed",
            Self::AtRisk => "At Risk",
        }
    }

    /// Parses a display label, case-insensitively. `None` for unknown labels.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::all()
            .iter()
            .copied()
            .find(|status| status.name().eq_ignore_ascii_case(label))
    }

    /// Returns true if the project needs attention (not on track).
    #[must_use]
    pub fn needs_attention(&self) -> bool {
        !matches!(self, Self::OnTrack)
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(ProjectStatus::OnTrack.name(), "On Track");
        assert_eq!(ProjectStatus::AtRisk.name(), "At Risk");
    }

    #[test]
    fn test_from_label() {
        assert_eq!(
            ProjectStatus::from_label("On Track"),
            Some(ProjectStatus::OnTrack)
        );
        assert_eq!(
            ProjectStatus::from_label("at risk"),
            Some(ProjectStatus::AtRisk)
        );
        assert_eq!(ProjectStatus::from_label("Cancelled"), None);
    }

    #[test]
    fn test_needs_attention() {
        assert!(!ProjectStatus::OnTrack.needs_attention());
        assert!(ProjectStatus::Delayed.needs_attention());
        assert!(ProjectStatus::AtRisk.needs_attention());
    }

    #[test]
    fn test_serde_labels() {
        let json = serde_json::to_string(&ProjectStatus::OnTrack).unwrap();
        assert_eq!(json, "\"On Track\"");

        let parsed: ProjectStatus = serde_json::from_str("\"At Risk\"").unwrap();
        assert_eq!(parsed, ProjectStatus::AtRisk);
    }
}
