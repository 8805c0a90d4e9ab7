//! SQLite message archive implementation.
//!
//! Implements `MessageArchive` from `catchat-core` using sqlx with split
//! read/write pools. Metadata and reactions are stored as JSON text.
//!
//! Reads order by the store-assigned `timestamp` then `id`, never by when the
//! row was written, so concurrent writers finishing out of order still read
//! back in store order.

use catchat_core::repository::archive::MessageArchive;
use catchat_types::error::RepositoryError;
use catchat_types::message::{Message, MessageId, MessageStatus};
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::Row;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `MessageArchive`.
pub struct SqliteMessageArchive {
    pool: DatabasePool,
}

impl SqliteMessageArchive {
    /// Create a new archive backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

// ---------------------------------------------------------------------------
// Private Row type for SQLite-to-domain mapping
// ---------------------------------------------------------------------------

struct MessageRow {
    id: String,
    chat_id: String,
    text: String,
    sender: String,
    timestamp: String,
    metadata: String,
    reactions: String,
    status: String,
}

impl MessageRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            chat_id: row.try_get("chat_id")?,
            text: row.try_get("text")?,
            sender: row.try_get("sender")?,
            timestamp: row.try_get("timestamp")?,
            metadata: row.try_get("metadata")?,
            reactions: row.try_get("reactions")?,
            status: row.try_get("status")?,
        })
    }

    fn into_message(self) -> Result<Message, RepositoryError> {
        let metadata = serde_json::from_str(&self.metadata)
            .map_err(|e| RepositoryError::Query(format!("invalid metadata: {e}")))?;
        let reactions = serde_json::from_str(&self.reactions)
            .map_err(|e| RepositoryError::Query(format!("invalid reactions: {e}")))?;
        let status: MessageStatus = self
            .status
            .parse()
            .map_err(|e: String| RepositoryError::Query(e))?;

        Ok(Message {
            id: MessageId(self.id),
            chat_id: self.chat_id,
            text: self.text,
            sender: self.sender,
            timestamp: parse_datetime(&self.timestamp)?,
            metadata,
            reactions,
            status,
        })
    }
}

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

/// Fixed-width RFC 3339 so lexicographic order matches chronological order.
fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

// ---------------------------------------------------------------------------
// MessageArchive implementation
// ---------------------------------------------------------------------------

impl MessageArchive for SqliteMessageArchive {
    async fn save_message(&self, message: &Message) -> Result<(), RepositoryError> {
        let metadata = serde_json::to_string(&message.metadata)
            .map_err(|e| RepositoryError::Query(e.to_string()))?;
        let reactions = serde_json::to_string(&message.reactions)
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        sqlx::query(
            r#"INSERT INTO messages (id, chat_id, text, sender, timestamp, metadata, reactions, status)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(message.id.as_str())
        .bind(&message.chat_id)
        .bind(&message.text)
        .bind(&message.sender)
        .bind(format_datetime(&message.timestamp))
        .bind(metadata)
        .bind(reactions)
        .bind(message.status.to_string())
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(())
    }

    async fn get_messages(&self, chat_id: &str) -> Result<Vec<Message>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT * FROM messages WHERE chat_id = ? ORDER BY timestamp ASC, id ASC",
        )
        .bind(chat_id)
        .fetch_all(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let mut messages = Vec::with_capacity(rows.len());
        for row in &rows {
            let msg_row =
                MessageRow::from_row(row).map_err(|e| RepositoryError::Query(e.to_string()))?;
            messages.push(msg_row.into_message()?);
        }

        Ok(messages)
    }

    async fn count_messages(&self) -> Result<u64, RepositoryError> {
        let row = sqlx::query("SELECT COUNT(*) as cnt FROM messages")
            .fetch_one(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let count: i64 = row
            .try_get("cnt")
            .map_err(|e| RepositoryError::Query(e.to_string()))?;
        Ok(count as u64)
    }
}
