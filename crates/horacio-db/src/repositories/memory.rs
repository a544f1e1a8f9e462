//! In-memory implementation of both repository traits
//!
//! Mirrors the PostgreSQL semantics (ordering, paging, soft delete, the
//! per-owner unique name rule and the owner foreign key) so services and the
//! router can be exercised without a database.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;

use horacio_core::entities::{Character, CharacterChanges, CharacterWithOwner, NewCharacter, User};
use horacio_core::error::DomainError;
use horacio_core::traits::{
    CharacterOrderBy, CharacterRepository, FindCharactersOptions, OrderDirection, RepoResult,
    UserRepository,
};
use horacio_core::value_objects::{CharacterId, Snowflake};

use super::error::name_taken;

/// Process-local character and user store
#[derive(Debug, Default)]
pub struct InMemoryStore {
    characters: RwLock<HashMap<CharacterId, Character>>,
    users: RwLock<HashMap<Snowflake, User>>,
    unavailable: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with a database error (or recover)
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, AtomicOrdering::SeqCst);
    }

    fn check_available(&self) -> RepoResult<()> {
        if self.unavailable.load(AtomicOrdering::SeqCst) {
            return Err(DomainError::DatabaseError(
                "connection refused (store unavailable)".to_string(),
            ));
        }
        Ok(())
    }

    fn name_in_use(
        characters: &HashMap<CharacterId, Character>,
        owner: Snowflake,
        name: &str,
        except: Option<CharacterId>,
    ) -> bool {
        let wanted = name.to_lowercase();
        characters.values().any(|c| {
            c.is_active
                && c.user_id == owner
                && Some(c.id) != except
                && c.name.to_lowercase() == wanted
        })
    }

    fn list<F>(&self, options: &FindCharactersOptions, filter: F) -> Vec<Character>
    where
        F: Fn(&Character) -> bool,
    {
        let mut rows: Vec<Character> = self
            .characters
            .read()
            .values()
            .filter(|c| options.include_inactive || c.is_active)
            .filter(|c| filter(c))
            .cloned()
            .collect();

        rows.sort_by(|a, b| compare(a, b, options));

        let offset = options
            .effective_offset()
            .map_or(0, |o| usize::try_from(o).unwrap_or(usize::MAX));
        let limit = options
            .effective_limit()
            .map_or(usize::MAX, |l| usize::try_from(l).unwrap_or(usize::MAX));

        rows.into_iter().skip(offset).take(limit).collect()
    }
}

/// Sort key comparison followed by the `id ASC` tie-break
fn compare(a: &Character, b: &Character, options: &FindCharactersOptions) -> Ordering {
    let primary = match options.order_by {
        CharacterOrderBy::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        CharacterOrderBy::Level => a.level.cmp(&b.level),
        CharacterOrderBy::CreatedAt => a.created_at.cmp(&b.created_at),
        CharacterOrderBy::UpdatedAt => a.updated_at.cmp(&b.updated_at),
    };
    let primary = match options.order_direction {
        OrderDirection::Asc => primary,
        OrderDirection::Desc => primary.reverse(),
    };
    primary.then_with(|| a.id.cmp(&b.id))
}

#[async_trait]
impl CharacterRepository for InMemoryStore {
    async fn find_by_id(&self, id: CharacterId) -> RepoResult<Option<Character>> {
        self.check_available()?;
        Ok(self.characters.read().get(&id).cloned())
    }

    async fn find_by_id_with_owner(
        &self,
        id: CharacterId,
    ) -> RepoResult<Option<CharacterWithOwner>> {
        self.check_available()?;
        let Some(character) = self.characters.read().get(&id).cloned() else {
            return Ok(None);
        };
        let owner = self.users.read().get(&character.user_id).cloned();
        Ok(owner.map(|owner| CharacterWithOwner { character, owner }))
    }

    async fn find_by_owner(
        &self,
        owner: Snowflake,
        options: &FindCharactersOptions,
    ) -> RepoResult<Vec<Character>> {
        self.check_available()?;
        Ok(self.list(options, |c| c.user_id == owner))
    }

    async fn find_by_owner_and_name(
        &self,
        owner: Snowflake,
        name: &str,
    ) -> RepoResult<Option<Character>> {
        self.check_available()?;
        let wanted = name.to_lowercase();
        Ok(self
            .characters
            .read()
            .values()
            .find(|c| c.is_active && c.user_id == owner && c.name.to_lowercase() == wanted)
            .cloned())
    }

    async fn count_by_owner(&self, owner: Snowflake, include_inactive: bool) -> RepoResult<i64> {
        self.check_available()?;
        let count = self
            .characters
            .read()
            .values()
            .filter(|c| c.user_id == owner && (include_inactive || c.is_active))
            .count();
        Ok(i64::try_from(count).unwrap_or(i64::MAX))
    }

    async fn create(&self, character: NewCharacter) -> RepoResult<Character> {
        self.check_available()?;
        if !self.users.read().contains_key(&character.user_id) {
            return Err(DomainError::DatabaseError(format!(
                "foreign key violation: user {} does not exist",
                character.user_id
            )));
        }

        let mut characters = self.characters.write();
        if Self::name_in_use(&characters, character.user_id, &character.name, None) {
            return Err(name_taken(&character.name));
        }

        let created = character.into_character(CharacterId::generate(), Utc::now());
        characters.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(
        &self,
        id: CharacterId,
        changes: CharacterChanges,
    ) -> RepoResult<Option<Character>> {
        self.check_available()?;
        let mut characters = self.characters.write();
        let Some(current) = characters.get(&id).cloned() else {
            return Ok(None);
        };

        let mut updated = current;
        changes.apply_to(&mut updated, Utc::now());

        if updated.is_active
            && Self::name_in_use(&characters, updated.user_id, &updated.name, Some(id))
        {
            return Err(name_taken(&updated.name));
        }

        characters.insert(id, updated.clone());
        Ok(Some(updated))
    }

    async fn deactivate(&self, id: CharacterId) -> RepoResult<bool> {
        self.check_available()?;
        let mut characters = self.characters.write();
        match characters.get_mut(&id) {
            Some(c) if c.is_active => {
                c.is_active = false;
                c.updated_at = Utc::now();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete(&self, id: CharacterId) -> RepoResult<bool> {
        self.check_available()?;
        Ok(self.characters.write().remove(&id).is_some())
    }

    async fn belongs_to_owner(&self, id: CharacterId, owner: Snowflake) -> RepoResult<bool> {
        self.check_available()?;
        Ok(self
            .characters
            .read()
            .get(&id)
            .is_some_and(|c| c.user_id == owner))
    }

    async fn find_by_level(
        &self,
        level: i32,
        options: &FindCharactersOptions,
    ) -> RepoResult<Vec<Character>> {
        self.check_available()?;
        Ok(self.list(options, |c| c.level == level))
    }

    async fn find_by_class(
        &self,
        class_tag: &str,
        options: &FindCharactersOptions,
    ) -> RepoResult<Vec<Character>> {
        self.check_available()?;
        let wanted = class_tag.to_lowercase();
        Ok(self.list(options, |c| {
            c.class_tag().is_some_and(|tag| tag.to_lowercase() == wanted)
        }))
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>> {
        self.check_available()?;
        Ok(self.users.read().get(&id).cloned())
    }

    async fn upsert(&self, user: &User) -> RepoResult<User> {
        self.check_available()?;
        let mut users = self.users.write();
        let now = Utc::now();
        let stored = match users.get(&user.id) {
            Some(existing) => User {
                created_at: existing.created_at,
                updated_at: now,
                ..user.clone()
            },
            None => User {
                created_at: now,
                updated_at: now,
                ..user.clone()
            },
        };
        users.insert(stored.id, stored.clone());
        Ok(stored)
    }
}
