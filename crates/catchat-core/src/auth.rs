//! Demo authentication directory.
//!
//! Accepts any credentials. Login always returns the first user; register
//! appends a user built from whatever the client supplied. Tokens are opaque
//! and never checked.

use chrono::Utc;
use parking_lot::RwLock;
use tracing::info;
use uuid::Uuid;

use catchat_types::llm::Personality;
use catchat_types::user::{LoginGrant, UserProfile, UserSettings};

/// Prefix for issued bearer tokens.
pub const TOKEN_PREFIX: &str = "catchat_";

/// In-memory list of demo users.
pub struct UserDirectory {
    users: RwLock<Vec<UserProfile>>,
}

impl UserDirectory {
    /// Create a directory seeded with the default demo user.
    pub fn new() -> Self {
        Self {
            users: RwLock::new(vec![default_user()]),
        }
    }

    /// Log in with any credentials as the first user.
    pub fn login(&self) -> LoginGrant {
        let user = self
            .users
            .read()
            .first()
            .cloned()
            .unwrap_or_else(default_user);
        LoginGrant {
            user,
            token: issue_token(),
        }
    }

    /// Register a new user, filling in defaults for missing fields.
    pub fn register(&self, username: Option<String>, email: Option<String>) -> LoginGrant {
        let mut users = self.users.write();
        let id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;

        let username = username
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| format!("user_{id}"));
        let email = email
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| format!("{username}@catchat.local"));

        let user = UserProfile {
            id,
            display_name: username.clone(),
            avatar: avatar_url(&username),
            username,
            email,
            theme: "dark".to_string(),
            ai_personality: Personality::Friendly,
            created_at: Utc::now(),
            settings: UserSettings::default(),
        };
        users.push(user.clone());
        drop(users);

        info!(user_id = id, username = %user.username, "Registered demo user");

        LoginGrant {
            user,
            token: issue_token(),
        }
    }

    /// Number of known users.
    pub fn count(&self) -> usize {
        self.users.read().len()
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

fn default_user() -> UserProfile {
    UserProfile {
        id: 1,
        username: "catchatuser".to_string(),
        email: "user@catchat.local".to_string(),
        display_name: "CatChat User".to_string(),
        avatar: avatar_url("catchat"),
        theme: "dark".to_string(),
        ai_personality: Personality::Friendly,
        created_at: Utc::now(),
        settings: UserSettings::default(),
    }
}

fn avatar_url(seed: &str) -> String {
    format!("https://api.dicebear.com/7.x/avataaars/svg?seed={seed}")
}

fn issue_token() -> String {
    format!("{TOKEN_PREFIX}{}", Uuid::new_v4().simple())
}
