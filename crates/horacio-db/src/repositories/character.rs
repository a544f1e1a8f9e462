//! PostgreSQL implementation of CharacterRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use horacio_core::entities::{Character, CharacterChanges, CharacterWithOwner, NewCharacter};
use horacio_core::traits::{CharacterRepository, FindCharactersOptions, RepoResult};
use horacio_core::value_objects::{CharacterId, Snowflake};

use crate::mappers::{CharacterInsert, CharacterUpdate};
use crate::models::{CharacterModel, CharacterWithOwnerModel, CHARACTER_COLUMNS};

use super::error::{map_db_error, map_unique_violation, name_taken};

/// Listing query over `characters`
///
/// `filter` must reference its value as `$1`; `$2` is `include_inactive`,
/// `$3`/`$4` are limit and offset (NULL disables either).
fn list_sql(filter: &str, options: &FindCharactersOptions) -> String {
    format!(
        "SELECT {CHARACTER_COLUMNS} FROM characters \
         WHERE {filter} AND ($2 OR is_active) \
         ORDER BY {} {}, id ASC \
         LIMIT $3 OFFSET $4",
        options.order_by.sort_expr(),
        options.order_direction.as_sql(),
    )
}

/// PostgreSQL implementation of CharacterRepository
#[derive(Clone)]
pub struct PgCharacterRepository {
    pool: PgPool,
}

impl PgCharacterRepository {
    /// Create a new PgCharacterRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CharacterRepository for PgCharacterRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: CharacterId) -> RepoResult<Option<Character>> {
        let sql = format!("SELECT {CHARACTER_COLUMNS} FROM characters WHERE id = $1");
        let result = sqlx::query_as::<_, CharacterModel>(&sql)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(Character::from))
    }

    #[instrument(skip(self))]
    async fn find_by_id_with_owner(
        &self,
        id: CharacterId,
    ) -> RepoResult<Option<CharacterWithOwner>> {
        let result = sqlx::query_as::<_, CharacterWithOwnerModel>(
            r"
            SELECT c.id, c.name, c.description, c.image_url, c.system, c.level, c.experience,
                   c.attributes, c.skills, c.equipment, c.current_hp, c.max_hp,
                   c.strength, c.dexterity, c.constitution, c.intelligence, c.wisdom, c.charisma,
                   c.is_public, c.is_active, c.user_id, c.guild_id, c.created_at, c.updated_at,
                   u.id AS owner_id, u.username AS owner_username,
                   u.global_name AS owner_global_name, u.avatar AS owner_avatar,
                   u.created_at AS owner_created_at, u.updated_at AS owner_updated_at
            FROM characters c
            JOIN users u ON u.id = c.user_id
            WHERE c.id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(CharacterWithOwner::from))
    }

    #[instrument(skip(self))]
    async fn find_by_owner(
        &self,
        owner: Snowflake,
        options: &FindCharactersOptions,
    ) -> RepoResult<Vec<Character>> {
        let sql = list_sql("user_id = $1", options);
        let rows = sqlx::query_as::<_, CharacterModel>(&sql)
            .bind(owner.into_inner())
            .bind(options.include_inactive)
            .bind(options.effective_limit())
            .bind(options.effective_offset())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Character::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_owner_and_name(
        &self,
        owner: Snowflake,
        name: &str,
    ) -> RepoResult<Option<Character>> {
        let sql = format!(
            "SELECT {CHARACTER_COLUMNS} FROM characters \
             WHERE user_id = $1 AND lower(name) = lower($2) AND is_active \
             LIMIT 1"
        );
        let result = sqlx::query_as::<_, CharacterModel>(&sql)
            .bind(owner.into_inner())
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(Character::from))
    }

    #[instrument(skip(self))]
    async fn count_by_owner(&self, owner: Snowflake, include_inactive: bool) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM characters
            WHERE user_id = $1 AND ($2 OR is_active)
            ",
        )
        .bind(owner.into_inner())
        .bind(include_inactive)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, character), fields(name = %character.name, owner = %character.user_id))]
    async fn create(&self, character: NewCharacter) -> RepoResult<Character> {
        let row = CharacterInsert::new(CharacterId::generate(), &character);
        let sql = format!(
            "INSERT INTO characters (id, name, description, image_url, system, level, experience, \
                 attributes, skills, equipment, current_hp, max_hp, strength, dexterity, \
                 constitution, intelligence, wisdom, charisma, is_public, user_id, guild_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, \
                 $17, $18, $19, $20, $21) \
             RETURNING {CHARACTER_COLUMNS}"
        );

        let model = sqlx::query_as::<_, CharacterModel>(&sql)
            .bind(row.id)
            .bind(row.name)
            .bind(row.description)
            .bind(row.image_url)
            .bind(row.system)
            .bind(row.level)
            .bind(row.experience)
            .bind(row.attributes)
            .bind(row.skills)
            .bind(row.equipment)
            .bind(row.stats.current_hp)
            .bind(row.stats.max_hp)
            .bind(row.stats.strength)
            .bind(row.stats.dexterity)
            .bind(row.stats.constitution)
            .bind(row.stats.intelligence)
            .bind(row.stats.wisdom)
            .bind(row.stats.charisma)
            .bind(row.is_public)
            .bind(row.user_id)
            .bind(row.guild_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_unique_violation(e, || name_taken(&character.name)))?;

        Ok(Character::from(model))
    }

    #[instrument(skip(self, changes))]
    async fn update(
        &self,
        id: CharacterId,
        changes: CharacterChanges,
    ) -> RepoResult<Option<Character>> {
        let row = CharacterUpdate::new(&changes);
        let sql = format!(
            "UPDATE characters SET \
                 name = COALESCE($2, name), \
                 description = COALESCE($3, description), \
                 image_url = COALESCE($4, image_url), \
                 system = COALESCE($5, system), \
                 level = COALESCE($6, level), \
                 experience = COALESCE($7, experience), \
                 attributes = COALESCE($8, attributes), \
                 skills = COALESCE($9, skills), \
                 equipment = COALESCE($10, equipment), \
                 is_active = COALESCE($11, is_active), \
                 is_public = COALESCE($12, is_public), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {CHARACTER_COLUMNS}"
        );

        let result = sqlx::query_as::<_, CharacterModel>(&sql)
            .bind(id.into_inner())
            .bind(row.name)
            .bind(row.description)
            .bind(row.image_url)
            .bind(row.system)
            .bind(row.level)
            .bind(row.experience)
            .bind(row.attributes)
            .bind(row.skills)
            .bind(row.equipment)
            .bind(row.is_active)
            .bind(row.is_public)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                map_unique_violation(e, || name_taken(changes.name.as_deref().unwrap_or_default()))
            })?;

        Ok(result.map(Character::from))
    }

    #[instrument(skip(self))]
    async fn deactivate(&self, id: CharacterId) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE characters
            SET is_active = FALSE, updated_at = NOW()
            WHERE id = $1 AND is_active
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: CharacterId) -> RepoResult<bool> {
        let result = sqlx::query(r"DELETE FROM characters WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn belongs_to_owner(&self, id: CharacterId, owner: Snowflake) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM characters WHERE id = $1 AND user_id = $2)
            ",
        )
        .bind(id.into_inner())
        .bind(owner.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn find_by_level(
        &self,
        level: i32,
        options: &FindCharactersOptions,
    ) -> RepoResult<Vec<Character>> {
        let sql = list_sql("level = $1", options);
        let rows = sqlx::query_as::<_, CharacterModel>(&sql)
            .bind(level)
            .bind(options.include_inactive)
            .bind(options.effective_limit())
            .bind(options.effective_offset())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Character::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_class(
        &self,
        class_tag: &str,
        options: &FindCharactersOptions,
    ) -> RepoResult<Vec<Character>> {
        let sql = list_sql("lower(attributes ->> 'class') = lower($1)", options);
        let rows = sqlx::query_as::<_, CharacterModel>(&sql)
            .bind(class_tag)
            .bind(options.include_inactive)
            .bind(options.effective_limit())
            .bind(options.effective_offset())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Character::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horacio_core::traits::{CharacterOrderBy, OrderDirection};

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgCharacterRepository>();
    }

    #[test]
    fn test_list_sql_default_order() {
        let sql = list_sql("user_id = $1", &FindCharactersOptions::default());
        assert!(sql.contains("WHERE user_id = $1 AND ($2 OR is_active)"));
        assert!(sql.contains("ORDER BY created_at DESC, id ASC"));
        assert!(sql.ends_with("LIMIT $3 OFFSET $4"));
    }

    #[test]
    fn test_list_sql_name_order_is_case_insensitive() {
        let options =
            FindCharactersOptions::default().ordered(CharacterOrderBy::Name, OrderDirection::Asc);
        let sql = list_sql("level = $1", &options);
        assert!(sql.contains("ORDER BY lower(name) ASC, id ASC"));
    }
}
