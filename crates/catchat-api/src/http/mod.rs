//! HTTP/REST API layer for CatChat.
//!
//! Axum-based REST API under `/api/` with envelope response format and
//! permissive CORS.

pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
