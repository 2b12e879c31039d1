use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_helpers::AppError;
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::models::RequiredField;

/// Message for add and edit requests whose body is not declared as JSON.
pub const JSON_REQUIRED: &str = "Error: Data must be sent as JSON";

/// Message for bulk add requests whose body is not declared as JSON.
pub const BULK_JSON_REQUIRED: &str = "Error: Your Data must be sent as JSON";

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("{0}")]
    ContentType(&'static str),

    #[error("{}", .0.message())]
    MissingField(RequiredField),

    #[error("Product not found: {0}")]
    NotFound(i32),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Invalid JSON body: {0}")]
    InvalidJson(#[from] JsonRejection),

    #[error("Database error: {0}")]
    Database(DbErr),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl From<RequiredField> for ProductError {
    fn from(field: RequiredField) -> Self {
        ProductError::MissingField(field)
    }
}

impl From<DbErr> for ProductError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                ProductError::ConstraintViolation(detail)
            }
            _ => ProductError::Database(err),
        }
    }
}

/// Contract errors clients already expect in-band are a `200` with the
/// message as a bare JSON string; everything else goes through the shared
/// [`AppError`] envelope, which keeps driver details out of the body.
impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error = match self {
            ProductError::ContentType(msg) => {
                return (StatusCode::OK, Json(msg)).into_response();
            }
            ProductError::MissingField(field) => {
                tracing::info!(field = ?field, "Rejected product without required field");
                return (StatusCode::OK, Json(field.message())).into_response();
            }
            ProductError::NotFound(id) => AppError::NotFound(format!("Product {} not found", id)),
            ProductError::ConstraintViolation(detail) => {
                tracing::debug!(detail = %detail, "Unique constraint violated");
                AppError::Conflict("A product with this name or image already exists".to_string())
            }
            ProductError::InvalidJson(rejection) => AppError::JsonExtractorRejection(rejection),
            ProductError::Database(err) => AppError::Database(err),
        };

        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_content_type_is_a_bare_string_with_200() {
        let response = ProductError::ContentType(BULK_JSON_REQUIRED).into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            Value::String("Error: Your Data must be sent as JSON".into())
        );
    }

    #[tokio::test]
    async fn test_missing_field_is_a_bare_string_with_200() {
        let response = ProductError::MissingField(RequiredField::Category).into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, "Error: Please, provide a category.");
    }

    #[tokio::test]
    async fn test_not_found_uses_envelope() {
        let response = ProductError::NotFound(42).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["error"], "NOT_FOUND");
        assert_eq!(body["message"], "Product 42 not found");
    }

    #[tokio::test]
    async fn test_constraint_violation_is_409_without_driver_detail() {
        let response =
            ProductError::ConstraintViolation("UNIQUE constraint failed: products.name".into())
                .into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        let body = body_json(response).await;
        assert_eq!(body["error"], "CONFLICT");
        assert!(!body["message"].as_str().unwrap().contains("products.name"));
    }

    #[tokio::test]
    async fn test_database_error_is_500() {
        let err: ProductError = DbErr::Custom("pool closed by driver".into()).into();
        assert!(matches!(err, ProductError::Database(_)));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "DATABASE_UNHANDLED");
        assert!(!body.to_string().contains("pool closed by driver"));
    }

    #[test]
    fn test_missing_field_display_is_the_client_message() {
        let err: ProductError = RequiredField::Name.into();
        assert_eq!(err.to_string(), "Error: Please, provide a product name.");
    }
}
