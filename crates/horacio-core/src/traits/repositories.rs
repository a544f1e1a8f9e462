//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Absence is expressed as a value (`None`,
//! `false`, empty `Vec`); every other storage failure surfaces as
//! [`DomainError`].

use async_trait::async_trait;

use crate::entities::{Character, CharacterChanges, CharacterWithOwner, NewCharacter, User};
use crate::error::DomainError;
use crate::value_objects::{CharacterId, Snowflake};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Query options
// ============================================================================

/// Sort key for character listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CharacterOrderBy {
    Name,
    Level,
    #[default]
    CreatedAt,
    UpdatedAt,
}

impl CharacterOrderBy {
    /// Sort expression used by SQL implementations; names sort case-insensitively
    pub const fn sort_expr(self) -> &'static str {
        match self {
            Self::Name => "lower(name)",
            Self::Level => "level",
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrderDirection {
    Asc,
    #[default]
    Desc,
}

impl OrderDirection {
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Filtering, ordering and paging for character listings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindCharactersOptions {
    pub include_inactive: bool,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub order_by: CharacterOrderBy,
    pub order_direction: OrderDirection,
}

impl FindCharactersOptions {
    /// Limit to apply; `None` or a non-positive value means unbounded
    pub fn effective_limit(&self) -> Option<i64> {
        self.limit.filter(|l| *l > 0)
    }

    /// Offset to apply; `None` or a non-positive value means none
    pub fn effective_offset(&self) -> Option<i64> {
        self.offset.filter(|o| *o > 0)
    }

    #[must_use]
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    #[must_use]
    pub fn ordered(mut self, order_by: CharacterOrderBy, direction: OrderDirection) -> Self {
        self.order_by = order_by;
        self.order_direction = direction;
        self
    }

    #[must_use]
    pub fn including_inactive(mut self) -> Self {
        self.include_inactive = true;
        self
    }
}

// ============================================================================
// Character Repository
// ============================================================================

#[async_trait]
pub trait CharacterRepository: Send + Sync {
    /// Find character by ID (active or not)
    async fn find_by_id(&self, id: CharacterId) -> RepoResult<Option<Character>>;

    /// Find character by ID joined with its owner's profile
    async fn find_by_id_with_owner(&self, id: CharacterId)
        -> RepoResult<Option<CharacterWithOwner>>;

    /// List characters owned by a user
    async fn find_by_owner(
        &self,
        owner: Snowflake,
        options: &FindCharactersOptions,
    ) -> RepoResult<Vec<Character>>;

    /// List active characters owned by a user, newest first
    async fn find_active_by_owner(&self, owner: Snowflake) -> RepoResult<Vec<Character>> {
        self.find_by_owner(owner, &FindCharactersOptions::default())
            .await
    }

    /// Find an active character of the owner by name (case-insensitive)
    async fn find_by_owner_and_name(
        &self,
        owner: Snowflake,
        name: &str,
    ) -> RepoResult<Option<Character>>;

    /// Count characters owned by a user
    async fn count_by_owner(&self, owner: Snowflake, include_inactive: bool) -> RepoResult<i64>;

    /// Create a new character, filling defaults for level and base stats
    ///
    /// Fails with [`DomainError::CharacterNameTaken`] when the owner already
    /// has an active character with the same name.
    async fn create(&self, character: NewCharacter) -> RepoResult<Character>;

    /// Apply a partial update; `None` when no character has this ID
    async fn update(
        &self,
        id: CharacterId,
        changes: CharacterChanges,
    ) -> RepoResult<Option<Character>>;

    /// Soft delete; true only when an active character was deactivated
    async fn deactivate(&self, id: CharacterId) -> RepoResult<bool>;

    /// Hard delete; true when a row was removed
    async fn delete(&self, id: CharacterId) -> RepoResult<bool>;

    /// Check ownership; a missing character yields false
    async fn belongs_to_owner(&self, id: CharacterId, owner: Snowflake) -> RepoResult<bool>;

    /// List characters at an exact level
    async fn find_by_level(
        &self,
        level: i32,
        options: &FindCharactersOptions,
    ) -> RepoResult<Vec<Character>>;

    /// List characters whose `attributes.class` matches (case-insensitive)
    async fn find_by_class(
        &self,
        class_tag: &str,
        options: &FindCharactersOptions,
    ) -> RepoResult<Vec<Character>>;
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Insert the profile or refresh the stored one, keeping `created_at`
    async fn upsert(&self, user: &User) -> RepoResult<User>;
}
