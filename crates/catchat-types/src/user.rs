//! Demo user profile types for CatChat.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::llm::Personality;

/// A user known to the demo auth directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub display_name: String,
    pub avatar: String,
    pub theme: String,
    pub ai_personality: Personality,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub settings: UserSettings,
}

/// Per-user feature toggles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    pub notifications: bool,
    pub haptics: bool,
    pub translation: bool,
    pub incognito: bool,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            notifications: true,
            haptics: true,
            translation: true,
            incognito: false,
        }
    }
}

/// Result of a demo login or registration.
#[derive(Debug, Clone, Serialize)]
pub struct LoginGrant {
    pub user: UserProfile,
    /// Opaque bearer token. Never verified by the demo backend.
    pub token: String,
}
