//! Error types for the salary statistics engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the pipeline and its adapters can report.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::WageField;

/// The main error type for the salary statistics engine.
///
/// # Example
///
/// ```
/// use salary_stats::error::PayrollError;
///
/// let error = PayrollError::DataNotFound {
///     path: "/missing/employees.json".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee data file not found: /missing/employees.json");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or held invalid values.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Employee data file was not found at the specified path.
    #[error("Employee data file not found: {path}")]
    DataNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Employee data could not be parsed into a roster.
    #[error("Failed to parse employee data '{path}': {message}")]
    DataParseError {
        /// The source of the data (a path, or "<inline>").
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A wage field held a negative value.
    #[error("Invalid wage data for '{employee}' in '{subsidiary}': {field} is {value}")]
    InvalidWageData {
        /// The subsidiary the employee belongs to.
        subsidiary: String,
        /// The employee's display name.
        employee: String,
        /// The offending field.
        field: WageField,
        /// The value that was rejected.
        value: Decimal,
    },

    /// A wage field was absent and the configured policy rejects missing data.
    #[error("Missing wage data for '{employee}' in '{subsidiary}': {field} not provided")]
    MissingWageData {
        /// The subsidiary the employee belongs to.
        subsidiary: String,
        /// The employee's display name.
        employee: String,
        /// The missing field.
        field: WageField,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },

    /// Writing an export failed.
    #[error("Failed to export '{path}': {message}")]
    ExportError {
        /// The destination that could not be written.
        path: String,
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
