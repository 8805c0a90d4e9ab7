//! MessageArchive trait definition.
//!
//! An archive is an optional durable copy of accepted messages. The
//! in-memory `MessageStore` stays canonical: archive failures are reported
//! to the caller, which logs and absorbs them.

use catchat_types::error::RepositoryError;
use catchat_types::message::Message;

/// Repository trait for best-effort message persistence.
///
/// Implementations live in catchat-infra (e.g., `SqliteMessageArchive`).
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
pub trait MessageArchive: Send + Sync {
    /// Persist one message. Insertion order per chat must be queryable.
    fn save_message(
        &self,
        message: &Message,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Archived messages for a chat, in insertion order.
    fn get_messages(
        &self,
        chat_id: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Message>, RepositoryError>> + Send;

    /// Count all archived messages.
    fn count_messages(
        &self,
    ) -> impl std::future::Future<Output = Result<u64, RepositoryError>> + Send;
}
