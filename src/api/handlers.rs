//! HTTP request handlers for the payroll provisions API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{
        DefaultBodyLimit, Multipart, State,
        multipart::{MultipartError, MultipartRejection},
        rejection::JsonRejection,
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Local;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{PayrollRun, process_payroll};
use crate::error::ProvisionResult;
use crate::export::{export_csv, export_filename};
use crate::models::ProvisionedRecord;
use crate::spreadsheet::{EXAMPLE_FILENAME, example_workbook, read_upload};

use super::request::ExportRequest;
use super::response::{ApiError, ApiErrorResponse, ExportResponse, HealthResponse, UploadResponse};
use super::state::AppState;

const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Name of the multipart field carrying the uploaded spreadsheet.
const FILE_FIELD: &str = "file";

/// Creates the API router with all endpoints.
///
/// Request bodies are capped at the configured upload size; larger uploads
/// are answered with `413 Payload Too Large`.
pub fn create_router(state: AppState) -> Router {
    let body_limit = state.config().upload().max_bytes;

    Router::new()
        .route("/api/upload", post(upload_handler))
        .route("/api/export", post(export_handler))
        .route("/api/example", get(example_handler))
        .route("/health", get(health_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

struct FilePart {
    filename: String,
    bytes: Bytes,
}

/// Handler for POST /api/upload.
///
/// Decodes the spreadsheet in the `file` part and returns every computed row
/// plus the summary.
async fn upload_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing upload request");

    let mut multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Request is not multipart"
            );
            return ApiErrorResponse::bad_request(ApiError::no_file()).into_response();
        }
    };

    let upload = match read_file_part(&mut multipart).await {
        Ok(Some(upload)) => upload,
        Ok(None) => {
            warn!(correlation_id = %correlation_id, "No file part in upload");
            return ApiErrorResponse::bad_request(ApiError::no_file()).into_response();
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err.body_text(),
                "Failed to read multipart body"
            );
            return multipart_error_response(err).into_response();
        }
    };

    if upload.filename.is_empty() {
        warn!(correlation_id = %correlation_id, "Upload without file name");
        return ApiErrorResponse::bad_request(ApiError::no_file_selected()).into_response();
    }

    let start_time = Instant::now();
    match perform_upload(&state, &upload) {
        Ok(run) => {
            info!(
                correlation_id = %correlation_id,
                filename = %upload.filename,
                employees = run.summary.employee_count,
                skipped_rows = run.skipped_rows.len(),
                total_monthly_cost = %run.summary.total_monthly_cost,
                duration_us = start_time.elapsed().as_micros(),
                "Upload processed successfully"
            );
            (StatusCode::OK, Json(UploadResponse::from(run))).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                filename = %upload.filename,
                error = %err,
                "Upload processing failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

async fn read_file_part(multipart: &mut Multipart) -> Result<Option<FilePart>, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await?;
        return Ok(Some(FilePart { filename, bytes }));
    }
    Ok(None)
}

fn multipart_error_response(err: MultipartError) -> ApiErrorResponse {
    let status = err.status();
    let code = if status == StatusCode::PAYLOAD_TOO_LARGE {
        "PAYLOAD_TOO_LARGE"
    } else {
        "MALFORMED_MULTIPART"
    };
    ApiErrorResponse {
        status,
        error: ApiError::new(code, err.body_text()),
    }
}

/// Decodes the uploaded file and runs the payroll pipeline.
fn perform_upload(state: &AppState, upload: &FilePart) -> ProvisionResult<PayrollRun> {
    let config = state.config();
    let table = read_upload(
        &upload.filename,
        &upload.bytes,
        &config.upload().allowed_extensions,
    )?;
    process_payroll(&table, &config.rates())
}

/// Handler for POST /api/export.
///
/// Renders previously computed rows as a semicolon-separated export.
async fn export_handler(payload: Result<Json<ExportRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing export request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = json_rejection_error(rejection, correlation_id);
            return ApiErrorResponse::bad_request(error).into_response();
        }
    };

    let records: Vec<ProvisionedRecord> = request.data.into_iter().map(Into::into).collect();
    match export_csv(&records) {
        Ok(csv) => {
            let filename = export_filename(Local::now().naive_local());
            info!(
                correlation_id = %correlation_id,
                rows = records.len(),
                filename = %filename,
                "Export completed successfully"
            );
            (
                StatusCode::OK,
                Json(ExportResponse {
                    success: true,
                    csv,
                    filename,
                }),
            )
                .into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Export failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

fn json_rejection_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Handler for GET /api/example.
///
/// Returns the example workbook as a download.
async fn example_handler() -> Response {
    match example_workbook() {
        Ok(bytes) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", EXAMPLE_FILENAME),
                ),
            ],
            bytes,
        )
            .into_response(),
        Err(err) => {
            warn!(error = %err, "Failed to build example workbook");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /health.
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request::RecordRow;
    use crate::calculation::process_payroll;
    use crate::config::{AppConfig, ConfigLoader, ProvisionRates};
    use crate::spreadsheet::example_table;
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/provisions.yaml").expect("Failed to load config");
        AppState::new(config)
    }

    fn example_rows() -> Vec<RecordRow> {
        process_payroll(&example_table(), &ProvisionRates::default())
            .unwrap()
            .records
            .into_iter()
            .map(RecordRow::from)
            .collect()
    }

    async fn post_json(router: Router, uri: &str, body: String) -> Response {
        router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_returns_ok() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let health: HealthResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(health.status, "ok");
        assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_export_returns_csv_and_filename() {
        let router = create_router(create_test_state());
        let body = serde_json::to_string(&ExportRequest {
            data: example_rows(),
        })
        .unwrap();

        let response = post_json(router, "/api/export", body).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: ExportResponse = serde_json::from_slice(&body).unwrap();

        assert!(result.success);
        assert!(result.filename.starts_with("provisao_folha_"));
        assert!(result.filename.ends_with(".csv"));
        assert_eq!(result.csv.lines().count(), 4);
        assert!(result.csv.contains(";8542,23"));
    }

    #[tokio::test]
    async fn test_export_without_rows_returns_no_data() {
        let router = create_router(create_test_state());

        let response = post_json(router, "/api/export", r#"{"data": []}"#.to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "NO_DATA");
    }

    #[tokio::test]
    async fn test_export_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = post_json(router, "/api/export", "{invalid json".to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_export_row_missing_salary_returns_validation_error() {
        let router = create_router(create_test_state());
        let body = r#"{"data": [{"codigo_funcionario": "001"}]}"#.to_string();

        let response = post_json(router, "/api/export", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("missing field"));
    }

    #[tokio::test]
    async fn test_example_download_headers() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(Request::builder().uri("/api/example").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            XLSX_CONTENT_TYPE
        );
        assert_eq!(
            response.headers().get(header::CONTENT_DISPOSITION).unwrap(),
            "attachment; filename=\"folha_exemplo.xlsx\""
        );
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.starts_with(b"PK"));
    }

    #[tokio::test]
    async fn test_upload_without_multipart_returns_no_file() {
        let router = create_router(AppState::new(ConfigLoader::from_config(AppConfig::default())));

        let response = post_json(router, "/api/upload", "{}".to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "NO_FILE");
    }
}
