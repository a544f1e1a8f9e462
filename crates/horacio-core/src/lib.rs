//! # horacio-core
//!
//! Domain layer containing the character entities, value objects, repository traits,
//! and domain errors. This crate has zero dependencies on infrastructure
//! (database, chat platform, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Ability, BaseStats, Character, CharacterChanges, CharacterWithOwner, JsonMap, NewCharacter,
    StatOverrides, User,
};
pub use error::DomainError;
pub use traits::{
    CharacterOrderBy, CharacterRepository, FindCharactersOptions, OrderDirection, RepoResult,
    UserRepository,
};
pub use value_objects::{CharacterId, CharacterIdParseError, Snowflake, SnowflakeParseError};
