//! Assistant endpoint.
//!
//! POST /api/ai/chat
//!
//! Accepts `message` or `prompt` (the first non-blank wins), an optional
//! personality name, and optional prior turns. Replies come from the
//! configured provider or, when it is absent or failing, a canned template.

use axum::Json;
use axum::extract::State;
use serde::Deserialize;
use tracing::info;

use catchat_core::llm::assistant::{AssistantReply, AssistantRequest};
use catchat_types::llm::{LlmMessage, Personality};

use crate::http::error::AppError;
use crate::http::handlers::log_preview;
use crate::http::response::{ApiResponse, RequestTimer};
use crate::state::AppState;

/// Request body for the assistant endpoint.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AiChatRequest {
    pub message: Option<String>,
    pub prompt: Option<String>,
    /// Unknown names resolve to the default personality.
    pub personality: Option<String>,
    pub context: Vec<LlmMessage>,
}

impl AiChatRequest {
    fn text(&self) -> String {
        [&self.message, &self.prompt]
            .into_iter()
            .flatten()
            .find(|t| !t.trim().is_empty())
            .cloned()
            .unwrap_or_default()
    }
}

/// POST /api/ai/chat - Generate an assistant reply.
pub async fn chat(
    State(state): State<AppState>,
    Json(body): Json<AiChatRequest>,
) -> Result<Json<ApiResponse<AssistantReply>>, AppError> {
    let timer = RequestTimer::start();

    let text = body.text();
    let personality = Personality::from_name(body.personality.as_deref().unwrap_or_default());

    info!(
        personality = %personality,
        preview = %log_preview(&text),
        "AI request"
    );

    let reply = state
        .assistant
        .reply(AssistantRequest {
            text,
            personality,
            context: body.context,
        })
        .await?;

    Ok(Json(timer.finish(reply)))
}
