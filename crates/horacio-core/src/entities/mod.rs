//! Domain entities - core business objects

mod character;
mod user;

pub use character::{
    Ability, BaseStats, Character, CharacterChanges, CharacterWithOwner, JsonMap, NewCharacter,
    StatOverrides,
};
pub use user::User;
