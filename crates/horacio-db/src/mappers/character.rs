//! Character entity <-> model mapper

use sqlx::types::Json;
use uuid::Uuid;

use horacio_core::entities::{
    BaseStats, Character, CharacterChanges, CharacterWithOwner, JsonMap, NewCharacter, User,
};
use horacio_core::value_objects::{CharacterId, Snowflake};

use crate::models::{CharacterModel, CharacterWithOwnerModel};

/// Convert CharacterModel to Character entity
impl From<CharacterModel> for Character {
    fn from(model: CharacterModel) -> Self {
        Character {
            id: CharacterId::from_uuid(model.id),
            name: model.name,
            description: model.description,
            image_url: model.image_url,
            system: model.system,
            level: model.level,
            experience: model.experience,
            attributes: model.attributes.0,
            skills: model.skills.0,
            equipment: model.equipment.0,
            stats: BaseStats {
                current_hp: model.current_hp,
                max_hp: model.max_hp,
                strength: model.strength,
                dexterity: model.dexterity,
                constitution: model.constitution,
                intelligence: model.intelligence,
                wisdom: model.wisdom,
                charisma: model.charisma,
            },
            is_public: model.is_public,
            is_active: model.is_active,
            user_id: Snowflake::new(model.user_id),
            guild_id: Snowflake::new(model.guild_id),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Convert the joined row to CharacterWithOwner
impl From<CharacterWithOwnerModel> for CharacterWithOwner {
    fn from(model: CharacterWithOwnerModel) -> Self {
        CharacterWithOwner {
            character: Character::from(model.character),
            owner: User {
                id: Snowflake::new(model.owner_id),
                username: model.owner_username,
                global_name: model.owner_global_name,
                avatar: model.owner_avatar,
                created_at: model.owner_created_at,
                updated_at: model.owner_updated_at,
            },
        }
    }
}

/// Values bound when inserting a character, with defaults applied
pub struct CharacterInsert<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub image_url: Option<&'a str>,
    pub system: &'a str,
    pub level: i32,
    pub experience: i64,
    pub attributes: Json<&'a JsonMap>,
    pub skills: Json<&'a JsonMap>,
    pub equipment: Json<&'a JsonMap>,
    pub stats: BaseStats,
    pub is_public: bool,
    pub user_id: i64,
    pub guild_id: i64,
}

impl<'a> CharacterInsert<'a> {
    pub fn new(id: CharacterId, character: &'a NewCharacter) -> Self {
        Self {
            id: id.into_inner(),
            name: &character.name,
            description: character.description.as_deref(),
            image_url: character.image_url.as_deref(),
            system: &character.system,
            level: character.resolved_level(),
            experience: character.experience,
            attributes: Json(&character.attributes),
            skills: Json(&character.skills),
            equipment: Json(&character.equipment),
            stats: character.stats.resolve(),
            is_public: character.is_public,
            user_id: character.user_id.into_inner(),
            guild_id: character.guild_id.into_inner(),
        }
    }
}

/// Values bound when updating a character; `None` keeps the stored column
pub struct CharacterUpdate<'a> {
    pub name: Option<&'a str>,
    pub description: Option<&'a str>,
    pub image_url: Option<&'a str>,
    pub system: Option<&'a str>,
    pub level: Option<i32>,
    pub experience: Option<i64>,
    pub attributes: Option<Json<&'a JsonMap>>,
    pub skills: Option<Json<&'a JsonMap>>,
    pub equipment: Option<Json<&'a JsonMap>>,
    pub is_active: Option<bool>,
    pub is_public: Option<bool>,
}

impl<'a> CharacterUpdate<'a> {
    pub fn new(changes: &'a CharacterChanges) -> Self {
        Self {
            name: changes.name.as_deref(),
            description: changes.description.as_deref(),
            image_url: changes.image_url.as_deref(),
            system: changes.system.as_deref(),
            level: changes.level,
            experience: changes.experience,
            attributes: changes.attributes.as_ref().map(Json),
            skills: changes.skills.as_ref().map(Json),
            equipment: changes.equipment.as_ref().map(Json),
            is_active: changes.is_active,
            is_public: changes.is_public,
        }
    }
}
