//! Integer id path parameter extractor.

use crate::errors::{AppError, ErrorCode, ErrorResponse};
use axum::{
    Json,
    extract::{FromRequestParts, Path},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use std::num::IntErrorKind;

/// Extractor for a single integer `{id}` path segment.
///
/// Anything that does not parse as `i32` is rejected with 400 and the
/// `INVALID_ID` code before the handler runs.
///
/// ```ignore
/// async fn get_product(IdPath(id): IdPath) -> String {
///     format!("Product {id}")
/// }
///
/// let app = Router::new().route("/product/get/{id}", get(get_product));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub i32);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = raw_id(parts, state).await?;
        match raw.parse::<i32>() {
            Ok(id) => Ok(IdPath(id)),
            Err(_) => Err(invalid_id(&raw)),
        }
    }
}

/// Extractor for an `{id}` path segment used only to look a record up.
///
/// Behaves like [`IdPath`], except that a well-formed integer outside the
/// `i32` range yields `None` instead of a 400. No record can have such an
/// id, so the handler answers as it would for any unknown id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupIdPath(pub Option<i32>);

impl<S> FromRequestParts<S> for LookupIdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = raw_id(parts, state).await?;
        match raw.parse::<i32>() {
            Ok(id) => Ok(LookupIdPath(Some(id))),
            Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
                tracing::debug!(id = %raw, "Id out of range, treating as unknown");
                Ok(LookupIdPath(None))
            }
            Err(_) => Err(invalid_id(&raw)),
        }
    }
}

async fn raw_id<S>(parts: &mut Parts, state: &S) -> Result<String, Response>
where
    S: Send + Sync,
{
    let Path(raw) = Path::<String>::from_request_parts(parts, state)
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()).into_response())?;
    Ok(raw)
}

fn invalid_id(raw: &str) -> Response {
    tracing::info!(error_code = ErrorCode::InvalidId.code(), id = %raw, "Invalid id");
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new(
            ErrorCode::InvalidId,
            format!("Invalid id: {raw}"),
        )),
    )
        .into_response()
}
