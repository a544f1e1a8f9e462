//! Platform-neutral interaction model
//!
//! The Discord adapter converts gateway interactions into these types so the
//! router can be exercised without a live connection.

use horacio_core::entities::User;
use horacio_core::value_objects::Snowflake;
use serde::{Deserialize, Serialize};

/// User who triggered an interaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoker {
    pub user_id: Snowflake,
    pub username: String,
    /// Global display name, if set
    pub display_name: Option<String>,
    /// Avatar hash
    pub avatar: Option<String>,
    /// Guild the interaction came from; `None` in direct messages
    pub guild_id: Option<Snowflake>,
}

impl Invoker {
    /// Create an invoker with only the required fields
    #[must_use]
    pub fn new(user_id: Snowflake, username: impl Into<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
            display_name: None,
            avatar: None,
            guild_id: None,
        }
    }

    /// Set the guild
    #[must_use]
    pub fn in_guild(mut self, guild_id: Snowflake) -> Self {
        self.guild_id = Some(guild_id);
        self
    }

    /// Owner profile to upsert for this invoker
    pub fn profile(&self) -> User {
        let mut user = User::new(self.user_id, self.username.clone());
        user.global_name.clone_from(&self.display_name);
        user.avatar.clone_from(&self.avatar);
        user
    }
}

/// Value of a slash-command option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum CommandOption {
    String(String),
    Integer(i64),
    Boolean(bool),
}

/// What the user did
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InteractionKind {
    /// Slash command with its named options
    Command {
        name: String,
        options: Vec<(String, CommandOption)>,
    },
    Button {
        custom_id: String,
    },
    SelectMenu {
        custom_id: String,
        values: Vec<String>,
    },
    ModalSubmit {
        custom_id: String,
    },
}

impl InteractionKind {
    /// Short label for logs
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Command { .. } => "command",
            Self::Button { .. } => "button",
            Self::SelectMenu { .. } => "select_menu",
            Self::ModalSubmit { .. } => "modal_submit",
        }
    }
}

/// An incoming interaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    /// Platform interaction id
    pub id: String,
    pub invoker: Invoker,
    pub kind: InteractionKind,
}

impl Interaction {
    /// Slash command interaction
    pub fn command(
        id: impl Into<String>,
        invoker: Invoker,
        name: impl Into<String>,
        options: Vec<(String, CommandOption)>,
    ) -> Self {
        Self {
            id: id.into(),
            invoker,
            kind: InteractionKind::Command {
                name: name.into(),
                options,
            },
        }
    }

    /// Button click interaction
    pub fn button(id: impl Into<String>, invoker: Invoker, custom_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            invoker,
            kind: InteractionKind::Button {
                custom_id: custom_id.into(),
            },
        }
    }
}

/// Typed access to a command's options
#[derive(Debug, Clone, Copy)]
pub struct CommandOptions<'a> {
    options: &'a [(String, CommandOption)],
}

impl<'a> CommandOptions<'a> {
    #[must_use]
    pub fn new(options: &'a [(String, CommandOption)]) -> Self {
        Self { options }
    }

    fn get(&self, name: &str) -> Option<&'a CommandOption> {
        self.options.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// String option; blank strings count as absent
    #[must_use]
    pub fn string(&self, name: &str) -> Option<&'a str> {
        match self.get(name) {
            Some(CommandOption::String(s)) if !s.trim().is_empty() => Some(s.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub fn integer(&self, name: &str) -> Option<i64> {
        match self.get(name) {
            Some(CommandOption::Integer(n)) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn boolean(&self, name: &str) -> Option<bool> {
        match self.get(name) {
            Some(CommandOption::Boolean(b)) => Some(*b),
            _ => None,
        }
    }
}
