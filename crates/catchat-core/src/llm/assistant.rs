//! Assistant service: external completion with a deterministic fallback.
//!
//! `AssistantService` asks the configured `BoxLlmProvider` for a reply. When
//! no provider is configured, or the provider fails, it answers with the
//! canned reply for the requested personality instead. Provider failures
//! are logged here and never reach the caller.

use serde::Serialize;
use thiserror::Error;
use tracing::{Instrument, debug, info_span, warn};

use catchat_types::llm::{CompletionRequest, LlmMessage, Personality};

use super::box_provider::BoxLlmProvider;
use super::canned::canned_reply;

/// Default sampling temperature for assistant replies.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Default output token cap for assistant replies.
pub const DEFAULT_MAX_TOKENS: u32 = 200;

/// Errors surfaced to the caller of `AssistantService::reply`.
#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("validation error: {0}")]
    Validation(String),
}

/// Input for one assistant reply.
#[derive(Debug, Clone)]
pub struct AssistantRequest {
    pub text: String,
    pub personality: Personality,
    /// Earlier conversation turns, oldest first.
    pub context: Vec<LlmMessage>,
}

/// Reply returned to the serving layer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantReply {
    pub response: String,
    pub personality: Personality,
    /// True when the text came from the external provider.
    #[serde(rename = "realAI")]
    pub real_ai: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<u32>,
    /// Where the reply came from: the provider name or "mock".
    pub source: String,
}

/// Generates assistant replies.
pub struct AssistantService {
    provider: Option<BoxLlmProvider>,
}

impl AssistantService {
    /// Create a service. `None` means every reply is canned.
    pub fn new(provider: Option<BoxLlmProvider>) -> Self {
        Self { provider }
    }

    /// Whether an external provider is configured.
    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Name of the configured provider, if any.
    pub fn provider_name(&self) -> Option<&str> {
        self.provider.as_ref().map(|p| p.name())
    }

    /// Produce a reply for `request`.
    ///
    /// Only an empty prompt is an error. Provider unavailability falls back
    /// to `canned_reply`.
    pub async fn reply(&self, request: AssistantRequest) -> Result<AssistantReply, AssistantError> {
        let text = request.text.trim();
        if text.is_empty() {
            return Err(AssistantError::Validation(
                "Message or prompt is required".to_string(),
            ));
        }

        let Some(provider) = &self.provider else {
            debug!(personality = %request.personality, "No provider configured, using canned reply");
            return Ok(Self::fallback(request.personality, text));
        };

        let completion = self.build_request(provider, &request, text);
        let span = info_span!(
            "gen_ai.complete",
            gen_ai.system = provider.name(),
            gen_ai.request.model = %completion.model,
            gen_ai.request.max_tokens = completion.max_tokens,
            gen_ai.request.temperature = ?completion.temperature,
        );

        match provider.complete(&completion).instrument(span).await {
            Ok(response) if !response.content.trim().is_empty() => Ok(AssistantReply {
                response: response.content,
                personality: request.personality,
                real_ai: true,
                model: Some(response.model),
                tokens: Some(response.usage.total()),
                source: provider.name().to_string(),
            }),
            Ok(_) => {
                warn!(provider = provider.name(), "Provider returned an empty reply, using canned reply");
                Ok(Self::fallback(request.personality, text))
            }
            Err(e) => {
                warn!(provider = provider.name(), error = %e, "Provider unavailable, using canned reply");
                Ok(Self::fallback(request.personality, text))
            }
        }
    }

    fn build_request(
        &self,
        provider: &BoxLlmProvider,
        request: &AssistantRequest,
        text: &str,
    ) -> CompletionRequest {
        let mut messages = request.context.clone();
        messages.push(LlmMessage::user(text));

        CompletionRequest {
            model: provider.model().to_string(),
            messages,
            system: Some(system_prompt(request.personality)),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: Some(DEFAULT_TEMPERATURE),
        }
    }

    fn fallback(personality: Personality, text: &str) -> AssistantReply {
        AssistantReply {
            response: canned_reply(personality, text),
            personality,
            real_ai: false,
            model: None,
            tokens: None,
            source: "mock".to_string(),
        }
    }
}

/// System prompt naming the reply personality.
pub fn system_prompt(personality: Personality) -> String {
    format!(
        "You are a {personality} AI assistant in the CAT CHAT app. Keep replies short and conversational."
    )
}
