//! Character database model

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use horacio_core::JsonMap;

/// Column list shared by every query returning [`CharacterModel`]
pub const CHARACTER_COLUMNS: &str = "id, name, description, image_url, system, level, experience, \
     attributes, skills, equipment, current_hp, max_hp, strength, dexterity, constitution, \
     intelligence, wisdom, charisma, is_public, is_active, user_id, guild_id, created_at, updated_at";

/// Database model for characters table
#[derive(Debug, Clone, FromRow)]
pub struct CharacterModel {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub system: String,
    pub level: i32,
    pub experience: i64,
    pub attributes: Json<JsonMap>,
    pub skills: Json<JsonMap>,
    pub equipment: Json<JsonMap>,
    pub current_hp: i32,
    pub max_hp: i32,
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
    pub is_public: bool,
    pub is_active: bool,
    pub user_id: i64,
    pub guild_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Character row joined with its owner (`owner_*` columns)
#[derive(Debug, Clone, FromRow)]
pub struct CharacterWithOwnerModel {
    #[sqlx(flatten)]
    pub character: CharacterModel,
    pub owner_id: i64,
    pub owner_username: String,
    pub owner_global_name: Option<String>,
    pub owner_avatar: Option<String>,
    pub owner_created_at: DateTime<Utc>,
    pub owner_updated_at: DateTime<Utc>,
}
