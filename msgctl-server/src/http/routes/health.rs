//! Health check endpoint
//!
//! A failed database round-trip is still answered with 200; callers have to
//! look at `status` in the body.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::db;
use crate::http::server::AppState;

/// Greeting returned when the database answers
pub const GREETING: &str = "Hello Amakoe, the EC2 instance reached PostgreSQL successfully";

/// Health check response
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum HealthResponse {
    Ok { message: &'static str },
    Error { details: String },
}

/// GET /
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    match db::ping(&state.pool).await {
        Ok(()) => Json(HealthResponse::Ok { message: GREETING }),
        Err(e) => {
            tracing::warn!(kind = e.kind(), "Health check failed: {}", e);
            Json(HealthResponse::Error {
                details: e.to_string(),
            })
        }
    }
}

/// Health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(health))
}
