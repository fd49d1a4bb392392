//! Configuration for chart series construction.

use serde::{Deserialize, Serialize};

/// Label width for the compact chart layout.
pub const LABEL_WIDTH_COMPACT: usize = 12;

/// Label width for the wide chart layout.
pub const LABEL_WIDTH_WIDE: usize = 15;

/// Configuration for chart series construction.
///
/// Only display policy lives here; analytic thresholds (ROI color bands,
/// risk palette) are fixed constants and intentionally not configurable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesConfig {
    /// Maximum label length before truncation with an ellipsis.
    pub label_width: usize,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            label_width: LABEL_WIDTH_COMPACT,
        }
    }
}

impl SeriesConfig {
    /// Creates the default (compact) configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the wide-layout configuration.
    #[must_use]
    pub fn wide() -> Self {
        Self {
            label_width: LABEL_WIDTH_WIDE,
        }
    }

    /// Sets the label width.
    #[must_use]
    pub fn with_label_width(mut self, width: usize) -> Self {
        self.label_width = width;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_compact() {
        assert_eq!(SeriesConfig::default().label_width, LABEL_WIDTH_COMPACT);
    }

    #[test]
    fn test_wide() {
        assert_eq!(SeriesConfig::wide().label_width, LABEL_WIDTH_WIDE);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SeriesConfig::new().with_label_width(20);
        assert_eq!(config.label_width, 20);
    }
}
