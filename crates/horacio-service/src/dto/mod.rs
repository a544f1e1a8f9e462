//! Data transfer objects for the service layer
//!
//! This module provides:
//! - Input DTOs with validation for character operations
//! - Result DTOs returned to the interaction layer

pub mod requests;
pub mod responses;

pub use requests::{
    into_app_error, validate_character_name, CreateCharacterInput, UpdateCharacterInput,
    NAME_MAX_CHARS, NAME_MIN_CHARS,
};
pub use responses::CharacterOperationResult;
