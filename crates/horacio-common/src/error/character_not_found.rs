//! Character lookup failure

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use super::app_error::{AppError, ErrorContext, ErrorKind, Severity};
use crate::content;

/// Kind of message component that triggered a lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentType {
    Button,
    Select,
    Modal,
}

impl ComponentType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Select => "select",
            Self::Modal => "modal",
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A character does not exist (or is not visible) for the requesting user
///
/// Always user-facing; the message comes from the catalog so the user sees
/// the bard's voice rather than the technical description.
#[derive(Debug, Clone, thiserror::Error)]
#[error("CharacterNotFoundError [CHARACTER_NOT_FOUND]: Character {character_id} not found for user {user_id}")]
pub struct CharacterNotFoundError {
    character_id: String,
    user_id: String,
    inner: AppError,
}

impl CharacterNotFoundError {
    pub const NAME: &'static str = "CharacterNotFoundError";
    pub const CODE: &'static str = "CHARACTER_NOT_FOUND";

    #[track_caller]
    pub fn new(
        character_id: impl fmt::Display,
        user_id: impl fmt::Display,
        context: ErrorContext,
    ) -> Self {
        let character_id = character_id.to_string();
        let user_id = user_id.to_string();

        let inner = AppError::builder(content::message("character.not_found"))
            .name(Self::NAME)
            .kind(ErrorKind::NotFound)
            .code(Self::CODE)
            .severity(Severity::Low)
            .user_facing(true)
            .context(context)
            .context_entry("characterId", character_id.as_str())
            .context_entry("userId", user_id.as_str())
            .context_entry("resource", "character")
            .build();

        Self {
            character_id,
            user_id,
            inner,
        }
    }

    /// Lookup failed while handling a slash command
    #[track_caller]
    pub fn from_command(
        character_id: impl fmt::Display,
        user_id: impl fmt::Display,
        command_name: &str,
        interaction_id: Option<&str>,
    ) -> Self {
        let mut context = ErrorContext::new();
        context.insert("commandName".to_string(), Value::from(command_name));
        if let Some(id) = interaction_id {
            context.insert("interactionId".to_string(), Value::from(id));
        }
        context.insert("source".to_string(), Value::from("command"));
        Self::new(character_id, user_id, context)
    }

    /// Lookup failed while handling a button, menu or modal
    #[track_caller]
    pub fn from_component(
        character_id: impl fmt::Display,
        user_id: impl fmt::Display,
        component_type: ComponentType,
        custom_id: &str,
    ) -> Self {
        let mut context = ErrorContext::new();
        context.insert("componentType".to_string(), Value::from(component_type.as_str()));
        context.insert("customId".to_string(), Value::from(custom_id));
        context.insert("source".to_string(), Value::from("component"));
        Self::new(character_id, user_id, context)
    }

    pub fn character_id(&self) -> &str {
        &self.character_id
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// The general error record
    pub fn as_app_error(&self) -> &AppError {
        &self.inner
    }

    /// User-facing text
    pub fn message(&self) -> &str {
        self.inner.message()
    }

    /// Same as [`AppError::with_context`], keeping the identifiers
    #[must_use]
    pub fn with_context(&self, extra: ErrorContext) -> Self {
        Self {
            character_id: self.character_id.clone(),
            user_id: self.user_id.clone(),
            inner: self.inner.with_context(extra),
        }
    }

    /// Structured record for logging, including both identifiers
    pub fn to_json(&self) -> Value {
        let mut value = self.inner.to_json();
        if let Value::Object(map) = &mut value {
            map.insert("characterId".to_string(), Value::from(self.character_id.as_str()));
            map.insert("userId".to_string(), Value::from(self.user_id.as_str()));
        }
        value
    }
}

impl From<CharacterNotFoundError> for AppError {
    fn from(err: CharacterNotFoundError) -> Self {
        err.inner
    }
}
