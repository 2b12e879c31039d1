pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Standard error response structure.
///
/// ```json
/// {
///   "code": 1008,
///   "error": "CONFLICT",
///   "message": "Resource already exists",
///   "details": null
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Machine-readable error identifier
    pub error: String,
    /// Human-readable error message
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code(),
            error: code.as_str().to_string(),
            message: message.into(),
            details: None,
        }
    }
}

/// Application error type that can be converted to HTTP responses.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, code) = match self {
            AppError::Database(e) => map_db_error(&e),
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!(
                    error_code = ErrorCode::JsonExtraction.code(),
                    "JSON extraction error: {:?}",
                    e
                );
                (e.status(), e.body_text(), ErrorCode::JsonExtraction)
            }
            AppError::BadRequest(msg) => {
                tracing::info!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, msg, ErrorCode::BadRequest)
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = ErrorCode::NotFound.code(), "Not found: {}", msg);
                (StatusCode::NOT_FOUND, msg, ErrorCode::NotFound)
            }
            AppError::Conflict(msg) => {
                tracing::info!("Conflict: {}", msg);
                (StatusCode::CONFLICT, msg, ErrorCode::Conflict)
            }
        };

        (status, Json(ErrorResponse::new(code, message))).into_response()
    }
}

/// Maps a sea-orm error to status, client message and code.
///
/// Driver details are logged but never returned to the client.
fn map_db_error(error: &DbErr) -> (StatusCode, String, ErrorCode) {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = error.sql_err() {
        tracing::info!(
            error_code = ErrorCode::Conflict.code(),
            "Unique constraint violation: {}",
            detail
        );
        return (
            StatusCode::CONFLICT,
            ErrorCode::Conflict.default_message().to_string(),
            ErrorCode::Conflict,
        );
    }

    let (status, code) = match error {
        DbErr::RecordNotFound(_) => (StatusCode::NOT_FOUND, ErrorCode::DatabaseNotFound),
        DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => {
            (StatusCode::SERVICE_UNAVAILABLE, ErrorCode::DatabaseConnection)
        }
        DbErr::Exec(_) => (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::DatabaseExec),
        DbErr::Query(_) => (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::DatabaseQuery),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCode::DatabaseUnhandled,
        ),
    };

    if status.is_server_error() {
        tracing::error!(error_code = code.code(), "Database error: {:?}", error);
    } else {
        tracing::info!(error_code = code.code(), "Database error: {:?}", error);
    }

    (status, code.default_message().to_string(), code)
}
