//! Value objects - immutable types that represent domain concepts

mod character_id;
mod snowflake;

pub use character_id::{CharacterId, CharacterIdParseError};
pub use snowflake::{Snowflake, SnowflakeParseError};
