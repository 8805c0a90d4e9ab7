//! Chat endpoints: summaries, per-chat history, and posting messages.

use axum::Json;
use axum::extract::{Path, State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use catchat_core::chat::catalog::default_catalog;
use catchat_core::repository::archive::MessageArchive;
use catchat_types::chat::ChatSummary;
use catchat_types::message::{Message, NewMessage};

use crate::http::error::AppError;
use crate::http::handlers::log_preview;
use crate::http::response::{ApiResponse, RequestTimer};
use crate::state::AppState;

/// Request body for posting a message.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PostMessageRequest {
    pub text: String,
    pub sender: Option<String>,
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Messages of one chat, oldest first.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatHistory {
    pub id: String,
    pub messages: Vec<Message>,
    pub total: usize,
    pub last_updated: DateTime<Utc>,
}

/// GET /api/chats - Summaries of the advertised chats.
pub async fn list_chats(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ChatSummary>>>, AppError> {
    let timer = RequestTimer::start();

    let summaries = state.store.summarize_chats(&default_catalog());

    Ok(Json(timer.finish(summaries).with_link("self", "/api/chats")))
}

/// GET /api/chats/{chat_id} - Messages of one chat. Unknown chats are empty, not 404.
pub async fn get_chat(
    State(state): State<AppState>,
    Path(chat_id): Path<String>,
) -> Result<Json<ApiResponse<ChatHistory>>, AppError> {
    let timer = RequestTimer::start();

    let messages = state.store.list_by_chat(&chat_id);
    let last_updated = messages.last().map_or_else(Utc::now, |m| m.timestamp);
    let history = ChatHistory {
        id: chat_id.clone(),
        total: messages.len(),
        messages,
        last_updated,
    };

    let self_link = format!("/api/chats/{chat_id}");
    let messages_link = format!("/api/chats/{chat_id}/messages");
    Ok(Json(
        timer
            .finish(history)
            .with_link("self", &self_link)
            .with_link("messages", &messages_link),
    ))
}

/// POST /api/chats/{chat_id}/messages - Append a message.
///
/// The in-memory store is canonical. When an archive is configured the
/// message is also written there; archive failures are logged and ignored.
pub async fn post_message(
    State(state): State<AppState>,
    Path(chat_id): Path<String>,
    Json(body): Json<PostMessageRequest>,
) -> Result<Json<ApiResponse<Message>>, AppError> {
    let timer = RequestTimer::start();

    let mut input = NewMessage::new(chat_id.clone(), body.text);
    if let Some(sender) = body.sender {
        input = input.with_sender(sender);
    }
    if let Some(metadata) = body.metadata {
        input = input.with_metadata(metadata);
    }

    let message = state.store.append(input)?;

    info!(
        chat_id = %message.chat_id,
        preview = %log_preview(&message.text),
        "Message sent"
    );

    if let Some(archive) = &state.archive {
        if let Err(e) = archive.save_message(&message).await {
            warn!(message_id = %message.id, error = %e, "Failed to archive message");
        }
    }

    let self_link = format!("/api/chats/{chat_id}");
    Ok(Json(timer.finish(message).with_link("chat", &self_link)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::http::router::build_router;
    use crate::http::router::tests::send;
    use crate::state::tests::test_state;

    #[tokio::test]
    async fn test_list_chats_reflects_demo_data() {
        let state = test_state(&[]).await;
        let (status, json) = send(build_router(state), "GET", "/api/chats", None).await;

        assert_eq!(status, StatusCode::OK);
        let chats = json["data"].as_array().unwrap();
        assert_eq!(chats.len(), 3);
        assert_eq!(chats[0]["id"], "general");
        assert_eq!(chats[0]["messageCount"], 2);
        assert_eq!(chats[0]["type"], "group");
        assert_eq!(chats[2]["id"], "support");
        assert_eq!(chats[2]["messageCount"], 0);
        assert_eq!(chats[2]["lastMessage"], "Need help with deployment?");
    }

    #[tokio::test]
    async fn test_post_then_get_chat() {
        let state = test_state(&["--no-demo-data"]).await;
        let router = build_router(state.clone());

        let (status, json) = send(
            router.clone(),
            "POST",
            "/api/chats/general/messages",
            Some(json!({"text": "  hello cats  ", "metadata": {"client": "web"}})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["text"], "hello cats");
        assert_eq!(json["data"]["sender"], "user");
        assert_eq!(json["data"]["chatId"], "general");
        assert_eq!(json["data"]["status"], "sent");
        assert_eq!(json["data"]["metadata"]["client"], "web");
        assert_eq!(json["data"]["metadata"]["environment"], "test");
        assert_eq!(json["data"]["metadata"]["platform"], "Railway");

        let (status, json) = send(router, "GET", "/api/chats/general", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["id"], "general");
        assert_eq!(json["data"]["total"], 1);
        assert_eq!(json["data"]["messages"][0]["text"], "hello cats");
    }

    #[tokio::test]
    async fn test_empty_text_is_rejected() {
        let state = test_state(&["--no-demo-data"]).await;
        let (status, json) = send(
            build_router(state.clone()),
            "POST",
            "/api/chats/general/messages",
            Some(json!({"text": "   "})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["errors"][0]["code"], "VALIDATION_ERROR");
        assert!(state.store.is_empty());
    }

    #[tokio::test]
    async fn test_missing_text_is_rejected() {
        let state = test_state(&["--no-demo-data"]).await;
        let (status, _) = send(
            build_router(state),
            "POST",
            "/api/chats/general/messages",
            Some(json!({"sender": "tom"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_chat_is_empty() {
        let state = test_state(&[]).await;
        let (status, json) = send(build_router(state), "GET", "/api/chats/nobody", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["total"], 0);
        assert!(json["data"]["messages"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_post_truncates_at_ceiling() {
        let state = test_state(&["--no-demo-data", "--max-messages", "4", "--retain-messages", "2"]).await;
        let router = build_router(state.clone());

        for i in 1..=5 {
            let (status, _) = send(
                router.clone(),
                "POST",
                "/api/chats/general/messages",
                Some(json!({"text": format!("m{i}")})),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
        }

        let texts: Vec<String> = state
            .store
            .list_by_chat("general")
            .into_iter()
            .map(|m| m.text)
            .collect();
        assert_eq!(texts, vec!["m4", "m5"]);
    }
}
