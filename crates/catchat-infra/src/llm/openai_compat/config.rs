//! Configuration for OpenAI-compatible providers.
//!
//! A factory function returns an [`OpenAiCompatConfig`] with the correct
//! base URL; `with_base_url` points the same client at any compatible proxy.

/// Default model for assistant replies.
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";

/// Configuration for an OpenAI-compatible LLM provider.
///
/// Used to construct an [`super::OpenAiCompatibleProvider`].
pub struct OpenAiCompatConfig {
    /// Human-readable provider name (e.g., "openai").
    pub provider_name: String,
    /// Base URL for the API (e.g., "https://api.openai.com/v1").
    pub base_url: String,
    /// API key for authentication.
    pub api_key: String,
    /// Model identifier (e.g., "gpt-3.5-turbo").
    pub model: String,
}

impl OpenAiCompatConfig {
    /// Override the base URL (self-hosted or proxied endpoints).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// OpenAI default configuration.
///
/// Base URL: `https://api.openai.com/v1`
pub fn openai_defaults(api_key: &str, model: &str) -> OpenAiCompatConfig {
    OpenAiCompatConfig {
        provider_name: "openai".into(),
        base_url: "https://api.openai.com/v1".into(),
        api_key: api_key.into(),
        model: model.into(),
    }
}
