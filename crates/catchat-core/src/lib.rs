//! Business logic and repository trait definitions for CatChat.
//!
//! The message store and chat aggregation live here, along with the
//! "ports" (archive and LLM provider traits) that the infrastructure layer
//! implements. It depends only on `catchat-types` -- never on
//! `catchat-infra` or any database/IO crate.

pub mod auth;
pub mod chat;
pub mod llm;
pub mod repository;
pub mod store;
