//! Application error type mapping to HTTP status codes and envelope format.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use catchat_core::llm::assistant::AssistantError;
use catchat_types::error::StoreError;

use crate::http::response::{ApiResponse, envelope_response};

/// Paths advertised in 404 responses.
pub const AVAILABLE_ENDPOINTS: &[&str] = &[
    "GET  /",
    "GET  /api/health",
    "GET  /api/status",
    "POST /api/auth/register",
    "POST /api/auth/login",
    "GET  /api/chats",
    "GET  /api/chats/{chat_id}",
    "POST /api/chats/{chat_id}/messages",
    "POST /api/ai/chat",
    "GET  /api/settings",
    "PUT  /api/settings",
    "GET  /api/deployment",
];

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Message store errors.
    Store(StoreError),
    /// Assistant errors.
    Assistant(AssistantError),
    /// No route matched.
    RouteNotFound { method: String, path: String },
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::Store(e)
    }
}

impl From<AssistantError> for AppError {
    fn from(e: AssistantError) -> Self {
        AppError::Assistant(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            AppError::Store(StoreError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone(), None)
            }
            AppError::Assistant(AssistantError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone(), None)
            }
            AppError::RouteNotFound { method, path } => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                "Route not found".to_string(),
                Some(json!({
                    "path": path,
                    "method": method,
                    "available_endpoints": AVAILABLE_ENDPOINTS,
                })),
            ),
        };

        envelope_response(status, &ApiResponse::error(code, &message, details))
    }
}
