//! Error types for the payroll provision engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every batch-level failure the pipeline and its transport can report.
//! Rows without a usable salary are not errors; they are dropped by the
//! normalizer and reported through [`NormalizedTable::skipped_rows`].
//!
//! [`NormalizedTable::skipped_rows`]: crate::normalization::NormalizedTable

use thiserror::Error;

/// The main error type for the payroll provision engine.
///
/// # Example
///
/// ```
/// use payroll_provisions::error::ProvisionError;
///
/// let error = ProvisionError::Schema {
///     missing: vec!["secao".to_string(), "seguro".to_string()],
/// };
/// assert_eq!(error.to_string(), "Required columns missing: secao, seguro");
/// ```
#[derive(Debug, Error)]
pub enum ProvisionError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or holds invalid values.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Required columns are absent after canonicalization.
    #[error("Required columns missing: {}", missing.join(", "))]
    Schema {
        /// Every missing column, in declared order.
        missing: Vec<String>,
    },

    /// The uploaded file name has no allowed extension.
    #[error("File type not allowed: '{filename}' (allowed: {})", allowed.join(", "))]
    UnsupportedFileType {
        /// The rejected file name.
        filename: String,
        /// The extensions accepted by the transport.
        allowed: Vec<String>,
    },

    /// The uploaded bytes could not be decoded into a table.
    #[error("Failed to read spreadsheet: {message}")]
    Spreadsheet {
        /// A description of the decoding failure.
        message: String,
    },

    /// The computed table could not be rendered or read back.
    #[error("Export failed: {message}")]
    Export {
        /// A description of the export failure.
        message: String,
    },

    /// An export was requested for an empty record list.
    #[error("No data to export")]
    NoData,
}

/// A type alias for Results that return ProvisionError.
pub type ProvisionResult<T> = Result<T, ProvisionError>;

impl From<csv::Error> for ProvisionError {
    fn from(error: csv::Error) -> Self {
        ProvisionError::Spreadsheet {
            message: error.to_string(),
        }
    }
}
