//! Type-safe error codes for API responses.
//!
//! Each code carries a string identifier for clients, an integer for logs
//! and a default message.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::InvalidId;
//! assert_eq!(code.as_str(), "INVALID_ID");
//! assert_eq!(code.code(), 1002);
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Malformed request that does not fit a more specific code
    BadRequest,

    /// Path id is not an integer
    InvalidId,

    /// JSON extraction from request body failed
    JsonExtraction,

    /// Requested resource was not found
    NotFound,

    /// Request conflicts with stored state (duplicate unique value)
    Conflict,

    // Database errors (2000-2999)
    /// Query returned no row where one was required
    DatabaseNotFound,

    /// Could not acquire or open a connection
    DatabaseConnection,

    /// Statement failed to execute
    DatabaseExec,

    /// Query failed or returned rows that could not be decoded
    DatabaseQuery,

    DatabaseUnhandled,
}

impl ErrorCode {
    /// SCREAMING_SNAKE_CASE identifier returned to clients.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidId => "INVALID_ID",
            Self::JsonExtraction => "JSON_EXTRACTION",
            Self::NotFound => "NOT_FOUND",
            Self::Conflict => "CONFLICT",
            Self::DatabaseNotFound => "DATABASE_NOT_FOUND",
            Self::DatabaseConnection => "DATABASE_CONNECTION",
            Self::DatabaseExec => "DATABASE_EXEC",
            Self::DatabaseQuery => "DATABASE_QUERY",
            Self::DatabaseUnhandled => "DATABASE_UNHANDLED",
        }
    }

    /// Integer code for structured logs.
    ///
    /// Ranges: 1000s client, 2000s database.
    pub fn code(&self) -> i32 {
        match self {
            Self::BadRequest => 1001,
            Self::InvalidId => 1002,
            Self::JsonExtraction => 1003,
            Self::NotFound => 1004,
            Self::Conflict => 1008,

            Self::DatabaseNotFound => 2001,
            Self::DatabaseConnection => 2002,
            Self::DatabaseExec => 2003,
            Self::DatabaseQuery => 2004,
            Self::DatabaseUnhandled => 2099,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::BadRequest => "Bad request",
            Self::InvalidId => "Invalid id format",
            Self::JsonExtraction => "Failed to parse request body",
            Self::NotFound => "Resource not found",
            Self::Conflict => "Resource already exists",
            Self::DatabaseNotFound => "Database record not found",
            Self::DatabaseConnection => "Database connection unavailable",
            Self::DatabaseExec => "Database statement failed",
            Self::DatabaseQuery => "Database query failed",
            Self::DatabaseUnhandled => "Unhandled database error",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
