//! Custom Axum extractors

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// JSON body extractor whose rejection is an `ApiError`.
///
/// Unlike `axum::Json`, a request without a `Content-Type` header is still
/// parsed as JSON. Any body that cannot be turned into `T` is answered with
/// 422 and `{"detail": "..."}`. Nothing reaches the database in that case.
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let json_body = accepts_json(req.headers());
        let bytes = Bytes::from_request(req, state).await?;

        if !json_body {
            return Err(ApiError::Validation {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: "Expected request with `Content-Type: application/json`".to_string(),
            });
        }

        let Json(value) = Json::<T>::from_bytes(&bytes)?;
        Ok(Self(value))
    }
}

/// A missing content type counts as JSON; otherwise `application/json` or
/// any `application/*+json`.
fn accepts_json(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(CONTENT_TYPE) else {
        return true;
    };
    let Ok(value) = value.to_str() else {
        return false;
    };

    let essence = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}
