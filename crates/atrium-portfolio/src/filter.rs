//! Stable project filtering.

use crate::types::FilterCriteria;
use atrium_core::Project;

/// Applies the four filter predicates conjunctively and returns the
/// matching projects as a new sequence.
///
/// The result preserves the input's relative order (a stable
/// subsequence); no resorting happens. Empty input or all-excluding
/// criteria yields an empty vector, never an error. Filtering an
/// already-filtered result with the same criteria is a no-op.
///
/// # Examples
///
/// ```
/// use atrium_portfolio::{filter_projects, FilterCriteria};
///
/// let filtered = filter_projects(&[], &FilterCriteria::new());
/// assert!(filtered.is_empty());
/// ```
#[must_use]
pub fn filter_projects(projects: &[Project], criteria: &FilterCriteria) -> Vec<Project> {
    projects
        .iter()
        .filter(|project| criteria.matches(project))
        .cloned()
        .collect()
}
