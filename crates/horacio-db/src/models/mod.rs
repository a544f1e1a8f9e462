//! Database models - SQLx-compatible structs for PostgreSQL tables

mod character;
mod user;

pub use character::{CharacterModel, CharacterWithOwnerModel, CHARACTER_COLUMNS};
pub use user::UserModel;
