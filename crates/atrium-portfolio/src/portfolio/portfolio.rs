//! Portfolio struct and core methods.

use crate::types::FilterCriteria;
use atrium_core::Project;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A portfolio of tracked projects.
///
/// The project set is loaded once from a data source and only ever viewed
/// through filters; it is never mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    /// Unique identifier for the portfolio.
    pub id: String,

    /// Portfolio name.
    pub name: String,

    /// As-of date for reporting.
    pub as_of_date: NaiveDate,

    /// Project records, in load order.
    pub projects: Vec<Project>,
}

impl Portfolio {
    /// Creates a new portfolio builder.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> super::PortfolioBuilder {
        super::PortfolioBuilder::new().name(name)
    }

    /// Returns the number of projects.
    #[must_use]
    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    /// Returns true if the portfolio has no projects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Returns the total planned budget across all projects.
    #[must_use]
    pub fn total_budget_planned(&self) -> Decimal {
        self.projects.iter().map(|p| p.budget_planned).sum()
    }

    /// Returns the total spend across all projects.
    #[must_use]
    pub fn total_budget_used(&self) -> Decimal {
        self.projects.iter().map(|p| p.budget_used).sum()
    }

    /// Returns the distinct regions present, sorted.
    #[must_use]
    pub fn regions(&self) -> Vec<String> {
        let mut regions: Vec<String> = self.projects.iter().map(|p| p.region.clone()).collect();
        regions.sort();
        regions.dedup();
        regions
    }

    /// Looks up a project by id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Returns the projects satisfying the given criteria, in load order.
    #[must_use]
    pub fn filtered(&self, criteria: &FilterCriteria) -> Vec<Project> {
        crate::filter::filter_projects(&self.projects, criteria)
    }
}
