//! Error types for the Payroll Estimation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during a payroll computation.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Payroll Estimation Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use paie_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Classification code was not found in the pay grid.
    #[error("Classification not found: {code}")]
    ClassificationNotFound {
        /// The classification code that was not found.
        code: String,
    },

    /// No point-value revision is in effect for the given date.
    #[error("No point value in effect on date {date}")]
    PointValueNotFound {
        /// The date for which a point value was requested.
        date: NaiveDate,
    },

    /// An input value was rejected before reaching the calculation rules.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The input field that was invalid.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// A result is mathematically undefined and cannot be produced.
    #[error("Result not computable: {message}")]
    NotComputable {
        /// A description of why the result is undefined.
        message: String,
    },

    /// The timesheet resource is absent or unreadable.
    #[error("Timesheet resource not readable: {path}")]
    TimesheetNotFound {
        /// The path to the missing resource.
        path: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
