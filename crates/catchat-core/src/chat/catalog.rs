//! Built-in chat catalog.
//!
//! The store has no notion of which chats exist; the serving layer passes
//! these descriptors to `MessageStore::summarize_chats`.

use catchat_types::chat::{ChatDescriptor, ChatKind};

/// Chats every client sees, in display order.
pub fn default_catalog() -> Vec<ChatDescriptor> {
    vec![
        ChatDescriptor::new(
            "general",
            "General Chat",
            ChatKind::Group,
            "🐱",
            "Start chatting!",
        ),
        ChatDescriptor::new(
            "ai",
            "AI Assistant",
            ChatKind::Ai,
            "🤖",
            "How can I assist you today?",
        ),
        ChatDescriptor::new(
            "support",
            "Support",
            ChatKind::Channel,
            "🛠️",
            "Need help with deployment?",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_ids_unique_and_ordered() {
        let catalog = default_catalog();
        let ids: Vec<&str> = catalog.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["general", "ai", "support"]);
    }

    #[test]
    fn test_default_catalog_has_placeholders() {
        assert!(default_catalog().iter().all(|c| !c.placeholder.is_empty()));
    }
}
