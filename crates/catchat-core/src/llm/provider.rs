//! LlmProvider trait definition.
//!
//! This is the abstraction the assistant uses to reach an external
//! completion service. Uses RPITIT for `complete`.

use catchat_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for LLM provider backends (OpenAI and OpenAI-compatible APIs).
///
/// Implementations live in catchat-infra (e.g., `OpenAiCompatibleProvider`).
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "openai").
    fn name(&self) -> &str;

    /// Model used when a request does not name one.
    fn model(&self) -> &str;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
