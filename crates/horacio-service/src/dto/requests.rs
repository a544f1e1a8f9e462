//! Input DTOs for character operations
//!
//! Inputs implement `Validate`; [`into_app_error`] turns the collected
//! failures into the single user-facing validation error to report.

use std::borrow::Cow;

use horacio_common::{message, AppError};
use horacio_core::entities::JsonMap;
use horacio_core::value_objects::Snowflake;
use validator::{Validate, ValidationError, ValidationErrors};

/// Minimum name length in characters
pub const NAME_MIN_CHARS: usize = 2;
/// Maximum name length in characters
pub const NAME_MAX_CHARS: usize = 50;

/// Fields reported in this order when several fail at once
const FIELD_PRIORITY: &[&str] = &["name", "level", "experience"];

// ============================================================================
// Character Inputs
// ============================================================================

/// Create character input
#[derive(Debug, Clone, Default, Validate)]
pub struct CreateCharacterInput {
    #[validate(custom(function = "validate_character_name"))]
    pub name: String,

    pub description: Option<String>,

    pub image_url: Option<String>,

    /// Rule system tag, `d20` when absent
    pub system: Option<String>,

    #[validate(range(min = 1, max = 20, code = "level_range"))]
    pub level: Option<i32>,

    pub is_public: Option<bool>,

    pub user_id: Snowflake,

    pub guild_id: Snowflake,
}

/// Update character input; `None` leaves the stored value unchanged
#[derive(Debug, Clone, Default, Validate)]
pub struct UpdateCharacterInput {
    #[validate(custom(function = "validate_character_name"))]
    pub name: Option<String>,

    pub description: Option<String>,

    pub image_url: Option<String>,

    pub system: Option<String>,

    #[validate(range(min = 1, max = 20, code = "level_range"))]
    pub level: Option<i32>,

    #[validate(range(min = 0, code = "experience_range"))]
    pub experience: Option<i64>,

    pub attributes: Option<JsonMap>,

    pub skills: Option<JsonMap>,

    pub equipment: Option<JsonMap>,

    pub is_public: Option<bool>,
}

impl CreateCharacterInput {
    /// Trim the name in place
    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self
    }
}

impl UpdateCharacterInput {
    /// Trim the name in place
    pub fn normalized(mut self) -> Self {
        self.name = self.name.map(|n| n.trim().to_string());
        self
    }
}

/// Letters (including Latin-1 accented letters), whitespace, hyphen, apostrophe
fn is_name_char(c: char) -> bool {
    c.is_ascii_alphabetic()
        || ('\u{C0}'..='\u{FF}').contains(&c)
        || c.is_whitespace()
        || matches!(c, '-' | '\'')
}

fn name_error(code: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Owned(message(&format!("validation.{code}"))))
}

/// Character name rules, checked in order: required, min length, max length, charset
pub fn validate_character_name(name: &str) -> Result<(), ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(name_error("name_required"));
    }

    let length = name.chars().count();
    if length < NAME_MIN_CHARS {
        return Err(name_error("name_too_short"));
    }
    if length > NAME_MAX_CHARS {
        return Err(name_error("name_too_long"));
    }

    if !name.chars().all(is_name_char) {
        return Err(name_error("invalid_name_chars"));
    }
    Ok(())
}

/// Pick the highest-priority failure and convert it into a validation error
#[track_caller]
pub fn into_app_error(errors: &ValidationErrors) -> AppError {
    let field_errors = errors.field_errors();

    for &field in FIELD_PRIORITY {
        if let Some(first) = field_errors.get(field).and_then(|list| list.first()) {
            let text = first
                .message
                .as_ref()
                .map_or_else(|| message(&format!("validation.{}", first.code)), ToString::to_string);
            return AppError::validation(text, Some(field), None);
        }
    }

    AppError::validation(message("command.invalid"), None, None)
}
