//! User entity - the Discord account that owns characters

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Owner profile mirrored from Discord
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    /// Display name chosen by the user, if different from the username
    pub global_name: Option<String>,
    /// Avatar hash
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(id: Snowflake, username: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            username,
            global_name: None,
            avatar: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Name to show in embeds
    pub fn display_name(&self) -> &str {
        self.global_name.as_deref().unwrap_or(&self.username)
    }

    /// Get avatar URL or default avatar URL
    pub fn avatar_url(&self) -> String {
        match &self.avatar {
            Some(hash) => format!("https://cdn.discordapp.com/avatars/{}/{}.png", self.id, hash),
            None => format!(
                "https://cdn.discordapp.com/embed/avatars/{}.png",
                self.default_avatar_index()
            ),
        }
    }

    /// Default avatar index (0-5) for accounts on the new username system
    fn default_avatar_index(&self) -> u64 {
        (self.id.as_u64() >> 22) % 6
    }
}
