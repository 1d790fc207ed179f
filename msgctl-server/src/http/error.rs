//! API error types with IntoResponse
//!
//! Errors are converted to `{"detail": "..."}` JSON responses. Database
//! failures are all reported as 500 with the underlying message; their class
//! is logged and exposed in the `x-error-kind` header.

use axum::extract::rejection::{BytesRejection, JsonRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;

/// Response header carrying the database error class
pub const ERROR_KIND_HEADER: &str = "x-error-kind";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Request body could not be read or parsed (4xx, usually 422)
    Validation { status: StatusCode, message: String },

    /// Database error (500, logged)
    Database(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation { status, message } => {
                tracing::debug!(%status, "rejected request body: {}", message);
                (status, Json(json!({ "detail": message }))).into_response()
            }
            Self::Database(e) => {
                tracing::error!(kind = e.kind(), "Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    [(ERROR_KIND_HEADER, e.kind())],
                    Json(json!({ "detail": e.to_string() })),
                )
                    .into_response()
            }
        }
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Database(e)
    }
}

/// Any body that is not valid JSON for the request type is a 422
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: rejection.body_text(),
        }
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        Self::Validation {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}
