//! Error types for data source operations.

use thiserror::Error;

/// Result type for data source operations.
pub type DataResult<T> = Result<T, DataError>;

/// Errors that can occur while loading project data.
#[derive(Debug, Error)]
pub enum DataError {
    /// Parse/deserialization error
    #[error("parse error: {0}")]
    ParseError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DataError::ParseError("unexpected end of input".into());
        assert!(err.to_string().contains("unexpected end of input"));
    }
}
