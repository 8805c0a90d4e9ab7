//! In-memory message store with chat aggregation.
//!
//! `MessageStore` owns the canonical, insertion-ordered list of messages for
//! the process lifetime. It answers chat-scoped and global queries and keeps
//! its size within [`StoreLimits`].
//!
//! The list sits behind a `parking_lot::RwLock`: `append` (including any
//! truncation it triggers) runs under the write lock, so readers never see a
//! half-applied trim and concurrent appends cannot interleave.

pub mod demo;
pub mod limits;

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use tracing::debug;

use catchat_types::chat::{ChatDescriptor, ChatSummary};
use catchat_types::error::StoreError;
use catchat_types::message::{DEFAULT_SENDER, Message, MessageId, MessageStatus, NewMessage};

pub use self::limits::StoreLimits;

/// Mutable state guarded by the store lock.
#[derive(Default)]
struct StoreState {
    messages: Vec<Message>,
    /// Timestamp handed to the most recent append.
    last_timestamp: Option<DateTime<Utc>>,
}

impl StoreState {
    /// Capture the append time, never earlier than the previous one.
    fn next_timestamp(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let ts = match self.last_timestamp {
            Some(prev) if prev > now => prev,
            _ => now,
        };
        self.last_timestamp = Some(ts);
        ts
    }
}

/// Canonical in-memory message list for the running process.
pub struct MessageStore {
    state: RwLock<StoreState>,
    limits: StoreLimits,
    /// Merged into every appended message's metadata; caller keys win.
    annotations: serde_json::Map<String, serde_json::Value>,
}

impl MessageStore {
    /// Create an empty store with the given limits.
    pub fn new(limits: StoreLimits) -> Self {
        Self {
            state: RwLock::new(StoreState::default()),
            limits,
            annotations: serde_json::Map::new(),
        }
    }

    /// Add a store-level metadata annotation (e.g. the environment tag).
    pub fn with_annotation(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.annotations.insert(key.into(), value.into());
        self
    }

    pub fn limits(&self) -> StoreLimits {
        self.limits
    }

    /// Append a message, trimming the oldest messages if the ceiling is exceeded.
    ///
    /// Rejects text that is empty after trimming and an empty chat id. A
    /// rejected call leaves the store untouched.
    pub fn append(&self, input: NewMessage) -> Result<Message, StoreError> {
        let text = input.text.trim();
        if text.is_empty() {
            return Err(StoreError::Validation(
                "Message cannot be empty".to_string(),
            ));
        }
        if input.chat_id.is_empty() {
            return Err(StoreError::Validation(
                "Chat id cannot be empty".to_string(),
            ));
        }

        let mut metadata = input.metadata.unwrap_or_default();
        for (key, value) in &self.annotations {
            metadata
                .entry(key.clone())
                .or_insert_with(|| value.clone());
        }
        let sender = input
            .sender
            .unwrap_or_else(|| DEFAULT_SENDER.to_string());
        let text = text.to_string();

        let mut state = self.state.write();
        let message = Message {
            id: MessageId::new(),
            chat_id: input.chat_id,
            text,
            sender,
            timestamp: state.next_timestamp(),
            metadata,
            reactions: Vec::new(),
            status: MessageStatus::Sent,
        };
        state.messages.push(message.clone());

        let excess = self.limits.excess(state.messages.len());
        if excess > 0 {
            state.messages.drain(..excess);
        }
        let retained = state.messages.len();
        drop(state);

        if excess > 0 {
            debug!(dropped = excess, retained, "Trimmed message store to floor");
        }

        Ok(message)
    }

    /// All messages for `chat_id`, in insertion order. Empty when none match.
    pub fn list_by_chat(&self, chat_id: &str) -> Vec<Message> {
        self.state
            .read()
            .messages
            .iter()
            .filter(|m| m.chat_id == chat_id)
            .cloned()
            .collect()
    }

    /// Summarize each descriptor's chat, preserving the caller's order.
    ///
    /// Empty chats report a count of zero, the descriptor's placeholder as
    /// the last message, and the time of this call as `last_updated`.
    pub fn summarize_chats(&self, descriptors: &[ChatDescriptor]) -> Vec<ChatSummary> {
        let now = Utc::now();
        let state = self.state.read();

        descriptors
            .iter()
            .map(|descriptor| {
                let mut count = 0;
                let mut last: Option<&Message> = None;
                for message in state.messages.iter().filter(|m| m.chat_id == descriptor.id) {
                    count += 1;
                    last = Some(message);
                }

                ChatSummary {
                    id: descriptor.id.clone(),
                    name: descriptor.name.clone(),
                    kind: descriptor.kind,
                    icon: descriptor.icon.clone(),
                    message_count: count,
                    last_message: last
                        .map(|m| m.text.clone())
                        .unwrap_or_else(|| descriptor.placeholder.clone()),
                    last_updated: last.map(|m| m.timestamp).unwrap_or(now),
                }
            })
            .collect()
    }

    /// Total number of retained messages.
    pub fn len(&self) -> usize {
        self.state.read().messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().messages.is_empty()
    }

    /// Number of distinct chat ids referenced by retained messages.
    pub fn chat_count(&self) -> usize {
        self.state
            .read()
            .messages
            .iter()
            .map(|m| m.chat_id.as_str())
            .collect::<HashSet<_>>()
            .len()
    }
}

impl Default for MessageStore {
    fn default() -> Self {
        Self::new(StoreLimits::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catchat_types::chat::ChatKind;
    use std::sync::Arc;

    fn descriptor(id: &str) -> ChatDescriptor {
        ChatDescriptor::new(id, id, ChatKind::Group, "#", "Start chatting!")
    }

    fn texts(messages: &[Message]) -> Vec<&str> {
        messages.iter().map(|m| m.text.as_str()).collect()
    }

    #[test]
    fn test_append_assigns_server_fields() {
        let store = MessageStore::default();
        let msg = store.append(NewMessage::new("general", "  hello  ")).unwrap();

        assert_eq!(msg.chat_id, "general");
        assert_eq!(msg.text, "hello");
        assert_eq!(msg.sender, "user");
        assert_eq!(msg.status, MessageStatus::Sent);
        assert!(msg.reactions.is_empty());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_append_keeps_explicit_sender() {
        let store = MessageStore::default();
        let msg = store
            .append(NewMessage::new("ai", "hi there").with_sender("ai"))
            .unwrap();
        assert_eq!(msg.sender, "ai");
    }

    #[test]
    fn test_append_rejects_blank_text_without_mutation() {
        let store = MessageStore::default();
        store.append(NewMessage::new("general", "first")).unwrap();

        for text in ["", "   ", "\n\t"] {
            let err = store.append(NewMessage::new("general", text)).unwrap_err();
            assert!(matches!(err, StoreError::Validation(_)));
        }
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_append_rejects_empty_chat_id() {
        let store = MessageStore::default();
        let err = store.append(NewMessage::new("", "hello")).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_annotations_do_not_override_caller_keys() {
        let store = MessageStore::default()
            .with_annotation("environment", "production")
            .with_annotation("platform", "Railway");

        let mut metadata = serde_json::Map::new();
        metadata.insert("environment".to_string(), "staging".into());
        metadata.insert("client".to_string(), "ios".into());

        let msg = store
            .append(NewMessage::new("general", "hey").with_metadata(metadata))
            .unwrap();

        assert_eq!(msg.metadata["environment"], "staging");
        assert_eq!(msg.metadata["platform"], "Railway");
        assert_eq!(msg.metadata["client"], "ios");
    }

    #[test]
    fn test_timestamps_non_decreasing_and_ids_unique() {
        let store = MessageStore::default();
        let messages: Vec<Message> = (0..20)
            .map(|i| store.append(NewMessage::new("general", format!("m{i}"))).unwrap())
            .collect();

        for pair in messages.windows(2) {
            assert!(pair[0].timestamp <= pair[1].timestamp);
            assert_ne!(pair[0].id, pair[1].id);
        }
    }

    #[test]
    fn test_list_by_chat_filters_in_insertion_order() {
        let store = MessageStore::default();
        store.append(NewMessage::new("general", "hello")).unwrap();
        store.append(NewMessage::new("ai", "hi there")).unwrap();
        store.append(NewMessage::new("general", "bye")).unwrap();

        assert_eq!(texts(&store.list_by_chat("general")), vec!["hello", "bye"]);
        assert_eq!(texts(&store.list_by_chat("ai")), vec!["hi there"]);
        assert!(store.list_by_chat("empty").is_empty());
    }

    #[test]
    fn test_list_by_chat_is_stable_between_mutations() {
        let store = MessageStore::default();
        store.append(NewMessage::new("general", "a")).unwrap();
        let first = store.list_by_chat("general");
        let second = store.list_by_chat("general");
        assert_eq!(first, second);
    }

    #[test]
    fn test_summarize_chats_counts_and_placeholder() {
        let store = MessageStore::default();
        store.append(NewMessage::new("general", "hello")).unwrap();
        store.append(NewMessage::new("ai", "hi there")).unwrap();
        store.append(NewMessage::new("general", "bye")).unwrap();

        let summaries = store.summarize_chats(&[
            descriptor("general"),
            descriptor("ai"),
            descriptor("empty"),
        ]);

        let ids: Vec<&str> = summaries.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["general", "ai", "empty"]);

        assert_eq!(summaries[0].message_count, 2);
        assert_eq!(summaries[0].last_message, "bye");
        assert_eq!(summaries[1].message_count, 1);
        assert_eq!(summaries[1].last_message, "hi there");
        assert_eq!(summaries[2].message_count, 0);
        assert_eq!(summaries[2].last_message, "Start chatting!");
    }

    #[test]
    fn test_summarize_last_updated_tracks_last_message() {
        let store = MessageStore::default();
        store.append(NewMessage::new("general", "one")).unwrap();
        let last = store.append(NewMessage::new("general", "two")).unwrap();

        let before = Utc::now();
        let summaries = store.summarize_chats(&[descriptor("general"), descriptor("empty")]);

        assert_eq!(summaries[0].last_updated, last.timestamp);
        assert!(summaries[1].last_updated >= before);
    }

    #[test]
    fn test_summarize_follows_caller_order() {
        let store = MessageStore::default();
        store.append(NewMessage::new("a", "x")).unwrap();
        store.append(NewMessage::new("b", "y")).unwrap();

        let summaries = store.summarize_chats(&[descriptor("b"), descriptor("a")]);
        assert_eq!(summaries[0].id, "b");
        assert_eq!(summaries[1].id, "a");
    }

    #[test]
    fn test_truncation_keeps_most_recent_floor() {
        let store = MessageStore::new(StoreLimits::new(100, 50).unwrap());
        for i in 1..=105 {
            store
                .append(NewMessage::new("general", format!("message {i}")))
                .unwrap();
        }

        let retained = store.list_by_chat("general");
        assert_eq!(store.len(), 50);
        assert_eq!(retained.len(), 50);
        let expected: Vec<String> = (56..=105).map(|i| format!("message {i}")).collect();
        let actual: Vec<String> = retained.into_iter().map(|m| m.text).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_truncation_fires_in_bulk_not_per_append() {
        let store = MessageStore::new(StoreLimits::new(100, 50).unwrap());
        for i in 0..100 {
            store.append(NewMessage::new("c", format!("{i}"))).unwrap();
        }
        assert_eq!(store.len(), 100);

        store.append(NewMessage::new("c", "overflow")).unwrap();
        assert_eq!(store.len(), 50);

        store.append(NewMessage::new("c", "after")).unwrap();
        assert_eq!(store.len(), 51);
    }

    #[test]
    fn test_truncation_is_independent_of_chat() {
        let store = MessageStore::new(StoreLimits::new(4, 2).unwrap());
        store.append(NewMessage::new("a", "a1")).unwrap();
        store.append(NewMessage::new("b", "b1")).unwrap();
        store.append(NewMessage::new("a", "a2")).unwrap();
        store.append(NewMessage::new("b", "b2")).unwrap();
        store.append(NewMessage::new("a", "a3")).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(texts(&store.list_by_chat("a")), vec!["a3"]);
        assert_eq!(texts(&store.list_by_chat("b")), vec!["b2"]);
    }

    #[test]
    fn test_summary_reflects_truncation() {
        let store = MessageStore::new(StoreLimits::new(3, 1).unwrap());
        store.append(NewMessage::new("general", "old")).unwrap();
        for i in 0..3 {
            store.append(NewMessage::new("ai", format!("{i}"))).unwrap();
        }

        let summaries = store.summarize_chats(&[descriptor("general"), descriptor("ai")]);
        assert_eq!(summaries[0].message_count, 0);
        assert_eq!(summaries[1].message_count, 1);
        assert_eq!(summaries[1].last_message, "2");
    }

    #[test]
    fn test_chat_count() {
        let store = MessageStore::default();
        assert_eq!(store.chat_count(), 0);

        store.append(NewMessage::new("general", "hello")).unwrap();
        store.append(NewMessage::new("ai", "hi")).unwrap();
        store.append(NewMessage::new("general", "bye")).unwrap();

        assert_eq!(store.chat_count(), 2);
    }

    #[test]
    fn test_concurrent_appends_respect_ceiling() {
        let store = Arc::new(MessageStore::new(StoreLimits::new(100, 50).unwrap()));
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for i in 0..50 {
                        store
                            .append(NewMessage::new(format!("chat-{t}"), format!("{t}:{i}")))
                            .unwrap();
                        assert!(store.len() <= 100);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        // 400 appends trim at totals 101, 152, 203, 254, 305 and 356.
        let len = store.len();
        assert_eq!(len, 94);

        let total: usize = (0..8)
            .map(|t| store.list_by_chat(&format!("chat-{t}")).len())
            .sum();
        assert_eq!(total, len);
    }

    #[test]
    fn test_per_chat_order_preserved_under_concurrency() {
        let store = Arc::new(MessageStore::new(StoreLimits::new(1000, 500).unwrap()));
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for i in 0..100 {
                        store
                            .append(NewMessage::new(format!("chat-{t}"), format!("{i}")))
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        for t in 0..4 {
            let seq: Vec<usize> = store
                .list_by_chat(&format!("chat-{t}"))
                .iter()
                .map(|m| m.text.parse().unwrap())
                .collect();
            assert_eq!(seq, (0..100).collect::<Vec<_>>());
        }
    }
}
