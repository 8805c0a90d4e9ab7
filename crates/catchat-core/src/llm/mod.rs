//! Assistant reply generation for CatChat.
//!
//! - `LlmProvider`: RPITIT trait for concrete provider implementations
//! - `BoxLlmProvider`: Object-safe wrapper for dynamic dispatch
//! - `canned`: deterministic per-personality replies
//! - `AssistantService`: provider call with canned fallback

pub mod assistant;
pub mod box_provider;
pub mod canned;
pub mod provider;
