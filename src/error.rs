//! Error types for the Recruiter Margin Calculator.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading rate tables,
//! computing a pay breakdown, or exporting a result.

use thiserror::Error;

/// The main error type for the calculator.
///
/// All fallible operations in the crate return this error type, making it
/// easy to handle errors consistently from the core up to the HTTP layer.
///
/// # Example
///
/// ```
/// use recruiter_margin_calc::error::EngineError;
///
/// let error = EngineError::InvalidInput {
///     field: "hours_per_week".to_string(),
///     message: "must be greater than zero".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid input 'hours_per_week': must be greater than zero"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A calculation input was missing, unparsable, or out of range.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The input field that was rejected.
        field: String,
        /// A description of why the value was rejected.
        message: String,
    },

    /// The destination is not present in the rate table.
    #[error("Unknown destination: {destination}")]
    UnknownDestination {
        /// The destination that was looked up.
        destination: String,
    },

    /// Rate table file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Rate table file could not be parsed or contained invalid values.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Arithmetic could not be completed (e.g. a value overflowed).
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },

    /// The document renderer failed to produce an export.
    #[error("Export failed: {message}")]
    ExportFailed {
        /// A description of the rendering failure.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for an [`EngineError::InvalidInput`] on `field`.
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
