//! Infrastructure layer for CatChat.
//!
//! Contains implementations of the ports defined in `catchat-core`: the
//! SQLite message archive and the OpenAI-compatible LLM provider.

pub mod llm;
pub mod sqlite;
