//! LLM provider implementations.
//!
//! Contains the OpenAI-compatible implementation of the [`LlmProvider`]
//! trait defined in `catchat-core`, plus [`create_provider`], which builds
//! the boxed provider the assistant service holds.
//!
//! [`LlmProvider`]: catchat_core::llm::provider::LlmProvider

pub mod openai_compat;

use catchat_core::llm::box_provider::BoxLlmProvider;

use self::openai_compat::OpenAiCompatibleProvider;
use self::openai_compat::config::openai_defaults;

/// Build a provider from an API key, or `None` when no usable key is set.
///
/// A blank key counts as absent so the assistant falls back to canned
/// replies instead of failing every request with an auth error.
pub fn create_provider(
    api_key: Option<&str>,
    model: &str,
    base_url: Option<&str>,
) -> Option<BoxLlmProvider> {
    let api_key = api_key.map(str::trim).filter(|k| !k.is_empty())?;

    let mut config = openai_defaults(api_key, model);
    if let Some(url) = base_url.map(str::trim).filter(|u| !u.is_empty()) {
        config = config.with_base_url(url);
    }

    tracing::info!(provider = %config.provider_name, model, "LLM provider configured");
    Some(BoxLlmProvider::new(OpenAiCompatibleProvider::new(config)))
}
