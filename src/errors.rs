//! # Error Handling Module
//!
//! ## Purpose
//! Centralized error handling for the advisor service, providing a typed
//! error enum and conversion utilities for all system components.
//!
//! ## Input/Output Specification
//! - **Input**: Error conditions from dataset loading, request validation,
//!   record lookup and the upstream completion service
//! - **Output**: Structured error values with context, mapped to distinct
//!   HTTP statuses at the API boundary
//!
//! ## Error taxonomy
//! - `Validation`: a required input field is missing or empty
//! - `ProjectNotFound`: a comparison query matched zero records; carries
//!   which side of the comparison failed
//! - `DatasetUnavailable`: the record store could not be loaded
//! - `Upstream`: the external completion service failed
//! - `Config` / `Internal`: startup and wiring failures
//!
//! Heuristic functions (classifier, estimator) are total and never return
//! errors; "no match" is a legitimate value, not an error path.

use thiserror::Error;

/// Result type used throughout the application
pub type Result<T> = std::result::Result<T, AdvisorError>;

/// Which side of a two-project comparison failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareSide {
    First,
    Second,
}

impl CompareSide {
    /// Human-readable label used in error payloads ("Project 1" / "Project 2").
    pub fn label(&self) -> &'static str {
        match self {
            CompareSide::First => "Project 1",
            CompareSide::Second => "Project 2",
        }
    }
}

/// Error types for the advisor service
#[derive(Debug, Error)]
pub enum AdvisorError {
    /// Required input field missing or empty
    #[error("Validation failed for field '{field}': {reason}")]
    Validation { field: String, reason: String },

    /// A comparison lookup matched zero records
    #[error("{} not found: '{query}'", .side.label())]
    ProjectNotFound { side: CompareSide, query: String },

    /// The record store could not be loaded or queried
    #[error("Record store unavailable: {details}")]
    DatasetUnavailable { details: String },

    /// The external completion service failed
    #[error("Completion service error: {details}")]
    Upstream { details: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Internal system errors
    #[error("Internal error: {message}")]
    Internal { message: String },

    /// Generic I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP client errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl AdvisorError {
    /// Error category for metrics and logging
    pub fn category(&self) -> &'static str {
        match self {
            AdvisorError::Validation { .. } => "validation",
            AdvisorError::ProjectNotFound { .. } => "not_found",
            AdvisorError::DatasetUnavailable { .. } => "dataset",
            AdvisorError::Upstream { .. } | AdvisorError::Http(_) => "upstream",
            AdvisorError::Config { .. } => "configuration",
            AdvisorError::Internal { .. }
            | AdvisorError::Io(_)
            | AdvisorError::Json(_) => "internal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_names_the_side() {
        let err = AdvisorError::ProjectNotFound {
            side: CompareSide::First,
            query: "nonexistent-zzz".to_string(),
        };
        assert_eq!(err.to_string(), "Project 1 not found: 'nonexistent-zzz'");

        let err = AdvisorError::ProjectNotFound {
            side: CompareSide::Second,
            query: "x".to_string(),
        };
        assert!(err.to_string().starts_with("Project 2"));
    }

    #[test]
    fn test_categories_are_distinct_for_user_visible_errors() {
        let validation = AdvisorError::Validation {
            field: "question".to_string(),
            reason: "missing".to_string(),
        };
        let not_found = AdvisorError::ProjectNotFound {
            side: CompareSide::Second,
            query: "q".to_string(),
        };
        assert_ne!(validation.category(), not_found.category());
    }
}
