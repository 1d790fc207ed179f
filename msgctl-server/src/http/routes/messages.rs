//! Message endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::{Message, MessageRepo};
use crate::http::error::ApiError;
use crate::http::extractors::ApiJson;
use crate::http::server::AppState;

/// Create message request
#[derive(Debug, Deserialize)]
pub struct CreateMessageRequest {
    pub content: String,
    #[serde(default)]
    pub author: Option<String>,
}

/// Create message response
#[derive(Debug, Serialize)]
pub struct CreateMessageResponse {
    pub status: &'static str,
    pub id: i32,
}

/// Message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub id: i32,
    pub author: Option<String>,
    pub content: String,
}

impl From<Message> for MessageResponse {
    fn from(m: Message) -> Self {
        Self {
            id: m.id,
            author: m.author,
            content: m.content,
        }
    }
}

/// POST /messages/add - store a message
async fn add_message(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<CreateMessageRequest>,
) -> Result<Json<CreateMessageResponse>, ApiError> {
    let id = MessageRepo::new(&state.pool)
        .create(req.author.as_deref(), &req.content)
        .await?;

    tracing::debug!(id, "message stored");
    Ok(Json(CreateMessageResponse {
        status: "success",
        id,
    }))
}

/// GET /messages/all - list every stored message
async fn list_messages(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<MessageResponse>>, ApiError> {
    let messages = MessageRepo::new(&state.pool).list_all().await?;

    Ok(Json(
        messages.into_iter().map(MessageResponse::from).collect(),
    ))
}

/// Message routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/messages/add", post(add_message))
        .route("/messages/all", get(list_messages))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn author_is_optional() {
        let req: CreateMessageRequest =
            serde_json::from_value(json!({ "content": "no author" })).unwrap();
        assert_eq!(req.content, "no author");
        assert_eq!(req.author, None);

        let req: CreateMessageRequest =
            serde_json::from_value(json!({ "content": "hi", "author": null })).unwrap();
        assert_eq!(req.author, None);
    }

    #[test]
    fn content_is_required() {
        let err = serde_json::from_value::<CreateMessageRequest>(json!({ "author": "alice" }))
            .unwrap_err();
        assert!(err.to_string().contains("missing field `content`"));
    }

    #[test]
    fn empty_content_is_accepted() {
        let req: CreateMessageRequest =
            serde_json::from_value(json!({ "content": "" })).unwrap();
        assert_eq!(req.content, "");
    }

    #[test]
    fn missing_author_serializes_as_null() {
        let body = serde_json::to_value(MessageResponse::from(Message {
            id: 2,
            author: None,
            content: "no author".into(),
        }))
        .unwrap();
        assert_eq!(
            body,
            json!({ "id": 2, "author": null, "content": "no author" })
        );
    }
}
