//! HTTP API module for the payroll provisions engine.
//!
//! This module provides the REST endpoints for uploading a payroll
//! spreadsheet, exporting computed rows and downloading the example file.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ExportRequest, RecordRow};
pub use response::{ApiError, ExportResponse, HealthResponse, SummaryBody, UploadResponse};
pub use state::AppState;
