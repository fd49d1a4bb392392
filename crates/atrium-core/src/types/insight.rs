//! Insight feed entries shown alongside the dashboard.

use serde::{Deserialize, Serialize};

/// Tone of an insight entry, used for panel color-coding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    /// Favorable signal.
    Positive,
    /// Something to watch.
    Warning,
    /// Unfavorable signal.
    Negative,
}

impl InsightKind {
    /// Returns the display label.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Warning => "warning",
            Self::Negative => "negative",
        }
    }
}

impl std::fmt::Display for InsightKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A generated insight entry from the bundled feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    /// Unique identifier within the feed.
    pub id: String,

    /// Entry tone.
    #[serde(rename = "type")]
    pub kind: InsightKind,

    /// Short glyph shown beside the entry.
    pub icon: String,

    /// Headline.
    pub title: String,

    /// Body text.
    pub description: String,

    /// Display timestamp ("2 hours ago"); not parsed.
    pub timestamp: String,
}
