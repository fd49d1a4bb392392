//! Builder for constructing a Portfolio.

use super::Portfolio;
use crate::error::{PortfolioError, PortfolioResult};
use atrium_core::Project;
use chrono::NaiveDate;
use std::collections::HashSet;

/// Builder for constructing a [`Portfolio`].
#[derive(Debug, Clone, Default)]
pub struct PortfolioBuilder {
    id: Option<String>,
    name: Option<String>,
    as_of_date: Option<NaiveDate>,
    projects: Vec<Project>,
}

impl PortfolioBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the portfolio id. Defaults to the name if unset.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the portfolio name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the as-of date.
    #[must_use]
    pub fn as_of_date(mut self, date: NaiveDate) -> Self {
        self.as_of_date = Some(date);
        self
    }

    /// Adds a single project.
    #[must_use]
    pub fn add_project(mut self, project: Project) -> Self {
        self.projects.push(project);
        self
    }

    /// Adds a batch of projects, preserving order.
    #[must_use]
    pub fn add_projects(mut self, projects: impl IntoIterator<Item = Project>) -> Self {
        self.projects.extend(projects);
        self
    }

    /// Builds the portfolio.
    ///
    /// # Errors
    ///
    /// Returns an error if the name or as-of date is missing, or if two
    /// projects share an id.
    pub fn build(self) -> PortfolioResult<Portfolio> {
        let name = self
            .name
            .ok_or_else(|| PortfolioError::missing_field("name"))?;

        let as_of_date = self
            .as_of_date
            .ok_or_else(|| PortfolioError::missing_field("as_of_date"))?;

        let mut seen = HashSet::new();
        for project in &self.projects {
            if !seen.insert(project.id.as_str()) {
                return Err(PortfolioError::duplicate_id(&project.id));
            }
        }

        Ok(Portfolio {
            id: self.id.unwrap_or_else(|| name.clone()),
            name,
            as_of_date,
            projects: self.projects,
        })
    }
}
