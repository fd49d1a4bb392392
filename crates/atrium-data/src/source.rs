//! Project data sources.

use crate::error::{DataError, DataResult};
use atrium_core::{Insight, Project};

const PROJECTS_FIXTURE: &str = include_str!("../fixtures/projects.json");
const INSIGHTS_FIXTURE: &str = include_str!("../fixtures/insights.json");

/// A provider of project records.
///
/// The aggregation layer never loads data itself; it consumes whatever a
/// source hands it, which keeps the analytics testable against any
/// in-memory set. Sources are synchronous: the bundled data involves no
/// I/O wait.
pub trait ProjectSource {
    /// Returns the full project set, in its stable load order.
    fn list_projects(&self) -> DataResult<Vec<Project>>;
}

/// Source backed by the JSON fixture bundled into the binary.
#[derive(Debug, Clone, Default)]
pub struct FixtureSource;

impl FixtureSource {
    /// Creates a new fixture source.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ProjectSource for FixtureSource {
    fn list_projects(&self) -> DataResult<Vec<Project>> {
        let projects = parse_projects(PROJECTS_FIXTURE)?;
        tracing::debug!(count = projects.len(), "loaded bundled project fixture");
        Ok(projects)
    }
}

/// Source wrapping an in-memory project set.
///
/// Useful in tests and anywhere the records are already at hand.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    projects: Vec<Project>,
}

impl StaticSource {
    /// Creates a source over the given records.
    #[must_use]
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }
}

impl ProjectSource for StaticSource {
    fn list_projects(&self) -> DataResult<Vec<Project>> {
        Ok(self.projects.clone())
    }
}

/// Parses a JSON array of project records.
pub fn parse_projects(json: &str) -> DataResult<Vec<Project>> {
    serde_json::from_str(json).map_err(|e| DataError::ParseError(e.to_string()))
}

/// Returns the bundled insight feed.
pub fn load_insights() -> DataResult<Vec<Insight>> {
    let insights: Vec<Insight> = serde_json::from_str(INSIGHTS_FIXTURE)
        .map_err(|e| DataError::ParseError(e.to_string()))?;
    tracing::debug!(count = insights.len(), "loaded bundled insight fixture");
    Ok(insights)
}
