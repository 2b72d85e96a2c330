//! Error types for the exit compliance engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the conditions the engine and its configuration layer can report.
//! Per-record reconciliation failures never leave the engine; they are
//! absorbed into conservative `NotPunched` results.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the exit compliance engine.
///
/// # Example
///
/// ```
/// use exit_compliance_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/reconciliation.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/reconciliation.yaml"
/// );
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

    /// A configuration value was out of its allowed range.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// A report was requested for a range whose start is after its end.
    #[error("Invalid date range: {from} is after {to}")]
    InvalidDateRange {
        /// Requested start of the range.
        from: NaiveDate,
        /// Requested end of the range.
        to: NaiveDate,
    },

    /// An authorization record could not be reconciled.
    #[error("Invalid authorization '{authorization_id}': {message}")]
    InvalidAuthorization {
        /// The ID of the offending authorization.
        authorization_id: String,
        /// A description of what made the record invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
