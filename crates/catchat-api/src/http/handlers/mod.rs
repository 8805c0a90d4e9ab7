//! HTTP request handlers for the REST API.

pub mod ai;
pub mod auth;
pub mod chat;
pub mod deployment;
pub mod health;
pub mod settings;

/// Characters of message text shown in log lines.
const LOG_PREVIEW_CHARS: usize = 50;

/// Leading characters of `text` for log lines, cut on a char boundary.
pub(crate) fn log_preview(text: &str) -> String {
    text.chars().take(LOG_PREVIEW_CHARS).collect()
}
