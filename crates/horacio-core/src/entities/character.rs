//! Character entity - a user-owned tabletop RPG sheet

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::User;
use crate::value_objects::{CharacterId, Snowflake};

/// Free-form JSON object used for system-dependent sheet data
pub type JsonMap = serde_json::Map<String, Value>;

/// The six classic ability scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ability {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Ability {
    pub const ALL: [Ability; 6] = [
        Self::Strength,
        Self::Dexterity,
        Self::Constitution,
        Self::Intelligence,
        Self::Wisdom,
        Self::Charisma,
    ];

    /// Key used inside the `attributes` map
    pub const fn key(self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Dexterity => "dexterity",
            Self::Constitution => "constitution",
            Self::Intelligence => "intelligence",
            Self::Wisdom => "wisdom",
            Self::Charisma => "charisma",
        }
    }
}

/// Fixed numeric sheet columns
///
/// Every stored character has these, independently of the free-form
/// `attributes` map. Missing values are filled by the repository on create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub current_hp: i32,
    pub max_hp: i32,
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
}

impl BaseStats {
    pub const DEFAULT_SCORE: i32 = 10;

    /// Get the stored value of an ability score
    pub const fn score(&self, ability: Ability) -> i32 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
            Ability::Constitution => self.constitution,
            Ability::Intelligence => self.intelligence,
            Ability::Wisdom => self.wisdom,
            Ability::Charisma => self.charisma,
        }
    }
}

impl Default for BaseStats {
    fn default() -> Self {
        Self {
            current_hp: 0,
            max_hp: 0,
            strength: Self::DEFAULT_SCORE,
            dexterity: Self::DEFAULT_SCORE,
            constitution: Self::DEFAULT_SCORE,
            intelligence: Self::DEFAULT_SCORE,
            wisdom: Self::DEFAULT_SCORE,
            charisma: Self::DEFAULT_SCORE,
        }
    }
}

/// Partially specified base stats; unset entries fall back to [`BaseStats::default`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatOverrides {
    pub current_hp: Option<i32>,
    pub max_hp: Option<i32>,
    pub strength: Option<i32>,
    pub dexterity: Option<i32>,
    pub constitution: Option<i32>,
    pub intelligence: Option<i32>,
    pub wisdom: Option<i32>,
    pub charisma: Option<i32>,
}

impl StatOverrides {
    /// Resolve into a complete set of stats
    pub fn resolve(self) -> BaseStats {
        let defaults = BaseStats::default();
        BaseStats {
            current_hp: self.current_hp.unwrap_or(defaults.current_hp),
            max_hp: self.max_hp.unwrap_or(defaults.max_hp),
            strength: self.strength.unwrap_or(defaults.strength),
            dexterity: self.dexterity.unwrap_or(defaults.dexterity),
            constitution: self.constitution.unwrap_or(defaults.constitution),
            intelligence: self.intelligence.unwrap_or(defaults.intelligence),
            wisdom: self.wisdom.unwrap_or(defaults.wisdom),
            charisma: self.charisma.unwrap_or(defaults.charisma),
        }
    }
}

/// Character entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    /// Rule system tag, e.g. `d20` or `d100`
    pub system: String,
    pub level: i32,
    pub experience: i64,
    pub attributes: JsonMap,
    pub skills: JsonMap,
    pub equipment: JsonMap,
    pub stats: BaseStats,
    pub is_public: bool,
    /// Soft-delete marker
    pub is_active: bool,
    pub user_id: Snowflake,
    pub guild_id: Snowflake,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Character {
    pub const MIN_LEVEL: i32 = 1;
    pub const MAX_LEVEL: i32 = 20;

    /// Check whether the given user owns this character
    #[inline]
    pub fn is_owned_by(&self, user_id: Snowflake) -> bool {
        self.user_id == user_id
    }

    /// Current and maximum hit points
    ///
    /// Reads `attributes.hitPoints`, which is either `{ "current", "max" }`
    /// or a flat number, and falls back to the base stat columns.
    pub fn hit_points(&self) -> (i64, i64) {
        match self.attributes.get("hitPoints") {
            Some(Value::Object(hp)) => {
                let current = hp.get("current").and_then(Value::as_i64).unwrap_or(0);
                let max = hp.get("max").and_then(Value::as_i64).unwrap_or(0);
                (current, max)
            }
            Some(Value::Number(n)) => {
                let flat = n.as_i64().unwrap_or(0);
                (flat, flat)
            }
            _ => (
                i64::from(self.stats.current_hp),
                i64::from(self.stats.max_hp),
            ),
        }
    }

    /// Ability score from the attributes map, falling back to the base stat column
    pub fn ability_score(&self, ability: Ability) -> i64 {
        self.attributes
            .get(ability.key())
            .and_then(Value::as_i64)
            .unwrap_or_else(|| i64::from(self.stats.score(ability)))
    }

    /// Class tag stored under `attributes.class`, if any
    pub fn class_tag(&self) -> Option<&str> {
        self.attributes.get("class").and_then(Value::as_str)
    }
}

/// Character joined with its owner's profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterWithOwner {
    #[serde(flatten)]
    pub character: Character,
    pub owner: User,
}

/// Data required to persist a new character
#[derive(Debug, Clone, PartialEq)]
pub struct NewCharacter {
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub system: String,
    /// Defaults to level 1 when absent
    pub level: Option<i32>,
    pub experience: i64,
    pub attributes: JsonMap,
    pub skills: JsonMap,
    pub equipment: JsonMap,
    pub stats: StatOverrides,
    pub is_public: bool,
    pub user_id: Snowflake,
    pub guild_id: Snowflake,
}

impl NewCharacter {
    /// Level to store, applying the default
    pub fn resolved_level(&self) -> i32 {
        self.level.unwrap_or(Character::MIN_LEVEL)
    }

    /// Build the entity that will be stored under `id`
    pub fn into_character(self, id: CharacterId, now: DateTime<Utc>) -> Character {
        let level = self.resolved_level();
        Character {
            id,
            name: self.name,
            description: self.description,
            image_url: self.image_url,
            system: self.system,
            level,
            experience: self.experience,
            attributes: self.attributes,
            skills: self.skills,
            equipment: self.equipment,
            stats: self.stats.resolve(),
            is_public: self.is_public,
            is_active: true,
            user_id: self.user_id,
            guild_id: self.guild_id,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update of a character; `None` leaves the stored value unchanged
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CharacterChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub system: Option<String>,
    pub level: Option<i32>,
    pub experience: Option<i64>,
    pub attributes: Option<JsonMap>,
    pub skills: Option<JsonMap>,
    pub equipment: Option<JsonMap>,
    pub is_active: Option<bool>,
    pub is_public: Option<bool>,
}

impl CharacterChanges {
    /// Check whether no field would change
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply the changes to an in-memory entity and bump `updated_at`
    pub fn apply_to(self, character: &mut Character, now: DateTime<Utc>) {
        if let Some(name) = self.name {
            character.name = name;
        }
        if let Some(description) = self.description {
            character.description = Some(description);
        }
        if let Some(image_url) = self.image_url {
            character.image_url = Some(image_url);
        }
        if let Some(system) = self.system {
            character.system = system;
        }
        if let Some(level) = self.level {
            character.level = level;
        }
        if let Some(experience) = self.experience {
            character.experience = experience;
        }
        if let Some(attributes) = self.attributes {
            character.attributes = attributes;
        }
        if let Some(skills) = self.skills {
            character.skills = skills;
        }
        if let Some(equipment) = self.equipment {
            character.equipment = equipment;
        }
        if let Some(is_active) = self.is_active {
            character.is_active = is_active;
        }
        if let Some(is_public) = self.is_public {
            character.is_public = is_public;
        }
        character.updated_at = now;
    }
}
