//! Error types for domain record construction.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while constructing domain records.
#[derive(Error, Debug, Clone)]
pub enum CoreError {
    /// Missing required field during construction.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// Invalid project data.
    #[error("Invalid project '{id}': {reason}")]
    InvalidProject {
        /// The project ID.
        id: String,
        /// The reason the project is invalid.
        reason: String,
    },
}

impl CoreError {
    /// Create a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an invalid project error.
    #[must_use]
    pub fn invalid_project(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidProject {
            id: id.into(),
            reason: reason.into(),
        }
    }
}
