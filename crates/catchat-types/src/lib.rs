//! Shared domain types for CatChat.
//!
//! This crate contains the domain types used across the CatChat backend:
//! messages, chat descriptors and summaries, assistant personalities and
//! LLM request shapes, demo user profiles, and their error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod chat;
pub mod error;
pub mod llm;
pub mod message;
pub mod user;
