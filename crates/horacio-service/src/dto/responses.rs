//! Result DTOs returned by the character service

use horacio_core::entities::Character;
use serde::Serialize;

/// Outcome of a create, update or delete
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterOperationResult {
    pub success: bool,

    /// Affected character; absent for deletions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character: Option<Character>,

    /// Localized summary for the user
    pub message: String,
}

impl CharacterOperationResult {
    /// Successful operation returning the affected character
    pub fn with_character(character: Character, message: String) -> Self {
        Self {
            success: true,
            character: Some(character),
            message,
        }
    }

    /// Operation without a character payload
    pub fn outcome(success: bool, message: String) -> Self {
        Self {
            success,
            character: None,
            message,
        }
    }
}
