//! Entity to model mappers
//!
//! This module provides conversions between domain entities (horacio-core) and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `*Insert`/`*Update`/`*Upsert` structs: Prepare entity data for database operations

mod character;
mod user;

pub use character::{CharacterInsert, CharacterUpdate};
pub use user::UserUpsert;
