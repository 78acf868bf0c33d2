//! Response types for the payroll provisions API.
//!
//! This module defines the success bodies of each endpoint, the error
//! response structure, and the mapping from [`ProvisionError`] to HTTP.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::PayrollRun;
use crate::error::ProvisionError;
use crate::models::PayrollSummary;

use super::request::RecordRow;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates the error for a multipart body without a `file` part.
    pub fn no_file() -> Self {
        Self::new("NO_FILE", "No file part in the request")
    }

    /// Creates the error for a `file` part with an empty file name.
    pub fn no_file_selected() -> Self {
        Self::new("NO_FILE_SELECTED", "No file selected")
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response with the given body.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<ProvisionError> for ApiErrorResponse {
    fn from(error: ProvisionError) -> Self {
        match error {
            ProvisionError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            ProvisionError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            error @ ProvisionError::Schema { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("SCHEMA_ERROR", error.to_string()))
            }
            ProvisionError::UnsupportedFileType { filename, allowed } => {
                ApiErrorResponse::bad_request(ApiError::with_details(
                    "UNSUPPORTED_FILE_TYPE",
                    format!("File type not allowed: '{}'", filename),
                    format!("Allowed extensions: {}", allowed.join(", ")),
                ))
            }
            ProvisionError::Spreadsheet { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "PROCESSING_ERROR",
                    "Failed to process the uploaded file",
                    message,
                ),
            },
            ProvisionError::Export { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("EXPORT_ERROR", "Export failed", message),
            },
            ProvisionError::NoData => {
                ApiErrorResponse::bad_request(ApiError::new("NO_DATA", "No data to export"))
            }
        }
    }
}

/// Summary totals as exposed over JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryBody {
    /// Number of retained employees.
    pub total_funcionarios: usize,
    /// Sum of salaries.
    pub total_salarios: Decimal,
    /// Sum of meal allowances and insurance.
    pub total_beneficios: Decimal,
    /// Sum of social charges.
    pub total_encargos: Decimal,
    /// Sum of the three provisions.
    pub total_provisoes: Decimal,
    /// Sum of monthly total costs.
    pub custo_total_mensal: Decimal,
}

impl From<PayrollSummary> for SummaryBody {
    fn from(summary: PayrollSummary) -> Self {
        Self {
            total_funcionarios: summary.employee_count,
            total_salarios: summary.total_salaries,
            total_beneficios: summary.total_benefits,
            total_encargos: summary.total_social_charges,
            total_provisoes: summary.total_provisions,
            custo_total_mensal: summary.total_monthly_cost,
        }
    }
}

/// Response body of `/api/upload`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Always `true`; failures use [`ApiError`].
    pub success: bool,
    /// Computed rows in input order.
    pub data: Vec<RecordRow>,
    /// Totals over `data`.
    pub summary: SummaryBody,
    /// Zero-based data rows dropped for lack of a numeric salary.
    #[serde(default)]
    pub skipped_rows: Vec<usize>,
}

impl From<PayrollRun> for UploadResponse {
    fn from(run: PayrollRun) -> Self {
        Self {
            success: true,
            data: run.records.into_iter().map(RecordRow::from).collect(),
            summary: run.summary.into(),
            skipped_rows: run.skipped_rows,
        }
    }
}

/// Response body of `/api/export`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportResponse {
    /// Always `true`; failures use [`ApiError`].
    pub success: bool,
    /// The semicolon-separated export.
    pub csv: String,
    /// Suggested download name.
    pub filename: String,
}

/// Response body of `/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `"ok"` while the service is up.
    pub status: String,
    /// Crate version.
    pub version: String,
}
