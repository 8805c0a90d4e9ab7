//! Chat descriptor and summary types for CatChat.
//!
//! Chats have no stored identity of their own. A `ChatDescriptor` is
//! supplied by the caller, and a `ChatSummary` is computed from the
//! messages that reference the descriptor's id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Kind of chat shown to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatKind {
    Group,
    Ai,
    Channel,
}

impl fmt::Display for ChatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatKind::Group => write!(f, "group"),
            ChatKind::Ai => write!(f, "ai"),
            ChatKind::Channel => write!(f, "channel"),
        }
    }
}

impl FromStr for ChatKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "group" => Ok(ChatKind::Group),
            "ai" => Ok(ChatKind::Ai),
            "channel" => Ok(ChatKind::Channel),
            other => Err(format!("invalid chat kind: '{other}'")),
        }
    }
}

/// Externally supplied description of a chat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatDescriptor {
    pub id: String,
    pub name: String,
    pub kind: ChatKind,
    pub icon: String,
    /// Text reported as the last message while the chat is empty.
    pub placeholder: String,
}

impl ChatDescriptor {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: ChatKind,
        icon: impl Into<String>,
        placeholder: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            icon: icon.into(),
            placeholder: placeholder.into(),
        }
    }
}

/// Aggregated view of one chat, computed on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSummary {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ChatKind,
    pub icon: String,
    pub message_count: usize,
    pub last_message: String,
    pub last_updated: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_kind_roundtrip() {
        for kind in [ChatKind::Group, ChatKind::Ai, ChatKind::Channel] {
            let parsed: ChatKind = kind.to_string().parse().unwrap();
            assert_eq!(kind, parsed);
        }
    }

    #[test]
    fn test_chat_summary_serializes_kind_as_type() {
        let summary = ChatSummary {
            id: "ai".to_string(),
            name: "AI Assistant".to_string(),
            kind: ChatKind::Ai,
            icon: "🤖".to_string(),
            message_count: 1,
            last_message: "hi".to_string(),
            last_updated: Utc::now(),
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["type"], "ai");
        assert_eq!(json["messageCount"], 1);
        assert_eq!(json["lastMessage"], "hi");
    }
}
