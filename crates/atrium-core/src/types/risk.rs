//! Risk tier classification for projects.

use serde::{Deserialize, Serialize};

/// Categorical risk label assigned to a project.
///
/// The three tiers are fixed display labels; anything outside them is
/// tolerated at the rendering layer (see [`RiskLevel::from_label`]) rather
/// than rejected.
///
/// # Examples
///
/// ```
/// use atrium_core::RiskLevel;
///
/// assert!(RiskLevel::High.score() > RiskLevel::Low.score());
/// assert_eq!(RiskLevel::from_label("medium"), Some(RiskLevel::Medium));
/// assert_eq!(RiskLevel::from_label("Severe"), None);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub enum RiskLevel {
    /// Low risk
    #[default]
    Low,
    /// Medium risk
    Medium,
    /// High risk
    High,
}

impl RiskLevel {
    /// Returns all risk tiers from lowest to highest.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[Self::Low, Self::Medium, Self::High]
    }

    /// Returns the display label.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Returns a numeric severity score (Low=1, High=3).
    #[must_use]
    pub fn score(&self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }

    /// Parses a display label, case-insensitively.
    ///
    /// Returns `None` for labels outside the known tier set; callers that
    /// color-code labels fall back to the danger palette instead of
    /// failing.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::all()
            .iter()
            .copied()
            .find(|tier| tier.name().eq_ignore_ascii_case(label))
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
    }

    #[test]
    fn test_score() {
        assert_eq!(RiskLevel::Low.score(), 1);
        assert_eq!(RiskLevel::Medium.score(), 2);
        assert_eq!(RiskLevel::High.score(), 3);
    }

    #[test]
    fn test_from_label() {
        assert_eq!(RiskLevel::from_label("Low"), Some(RiskLevel::Low));
        assert_eq!(RiskLevel::from_label("HIGH"), Some(RiskLevel::High));
        assert_eq!(RiskLevel::from_label(" medium "), Some(RiskLevel::Medium));
        assert_eq!(RiskLevel::from_label("Critical"), None);
        assert_eq!(RiskLevel::from_label(""), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", RiskLevel::Medium), "Medium");
    }

    #[test]
    fn test_serde_labels() {
        let json = serde_json::to_string(&RiskLevel::High).unwrap();
        assert_eq!(json, "\"High\"");

        let parsed: RiskLevel = serde_json::from_str("\"Low\"").unwrap();
        assert_eq!(parsed, RiskLevel::Low);
    }
}
