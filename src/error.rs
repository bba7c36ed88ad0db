//! Custom error types for famplan
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for famplan operations
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid or incomplete expense submission; the ledger is unchanged
    #[error("Validation error: {0}")]
    Validation(String),

    /// Negative or non-finite income figure; no plan is computed
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The prediction service could not produce a usable answer
    #[error("Prediction unavailable: {0}")]
    PredictionUnavailable(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl PlannerError {
    /// Create a validation error with a formatted message
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an invalid-input error for an income field
    pub fn invalid_income(field: &'static str, value: f64) -> Self {
        Self::InvalidInput(format!(
            "{} must be a finite, non-negative amount (got {})",
            field, value
        ))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a prediction failure
    pub fn is_prediction_unavailable(&self) -> bool {
        matches!(self, Self::PredictionUnavailable(_))
    }

    /// Whether a dashboard session can carry on after this error
    ///
    /// Every error in the taxonomy is recoverable by a subsequent user
    /// action; only TUI terminal failures tear the session down.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Tui(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for PlannerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PlannerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for famplan operations
pub type PlannerResult<T> = Result<T, PlannerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PlannerError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_invalid_income_error() {
        let err = PlannerError::invalid_income("salary", -1.0);
        assert_eq!(
            err.to_string(),
            "Invalid input: salary must be a finite, non-negative amount (got -1)"
        );
    }

    #[test]
    fn test_validation_check() {
        let err = PlannerError::validation("empty title");
        assert!(err.is_validation());
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_prediction_unavailable() {
        let err = PlannerError::PredictionUnavailable("connection refused".into());
        assert!(err.is_prediction_unavailable());
        assert!(err.is_recoverable());
        assert_eq!(
            err.to_string(),
            "Prediction unavailable: connection refused"
        );
    }

    #[test]
    fn test_tui_error_not_recoverable() {
        assert!(!PlannerError::Tui("terminal gone".into()).is_recoverable());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let planner_err: PlannerError = io_err.into();
        assert!(matches!(planner_err, PlannerError::Io(_)));
    }
}
