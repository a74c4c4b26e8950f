//! Custom error types for Eclosion
//!
//! This module defines the error hierarchy for the savings engine using
//! thiserror for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Eclosion operations
#[derive(Error, Debug)]
pub enum EclosionError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// A date string that could not be interpreted
    #[error("Invalid date '{input}': expected YYYY-MM-DD")]
    DateParse { input: String },

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl EclosionError {
    /// Create a "not found" error for stash goals
    pub fn goal_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Stash goal",
            identifier: identifier.into(),
        }
    }

    /// Create a "duplicate" error for stash goals
    pub fn duplicate_goal(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Stash goal",
            identifier: identifier.into(),
        }
    }

    /// Create a date parse error for the given input
    pub fn invalid_date(input: impl Into<String>) -> Self {
        Self::DateParse {
            input: input.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::DateParse { .. })
    }
}

impl From<std::io::Error> for EclosionError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for EclosionError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Eclosion operations
pub type EclosionResult<T> = Result<T, EclosionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EclosionError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = EclosionError::goal_not_found("Vacation");
        assert_eq!(err.to_string(), "Stash goal not found: Vacation");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_date_parse_error() {
        let err = EclosionError::invalid_date("soon");
        assert_eq!(err.to_string(), "Invalid date 'soon': expected YYYY-MM-DD");
        assert!(err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: EclosionError = io_err.into();
        assert!(matches!(err, EclosionError::Io(_)));
    }
}
