//! Character service
//!
//! Business rules for character sheets: ownership checks, name validation and
//! uniqueness, creation defaults and level/experience bookkeeping.

use horacio_common::{get_message, AppError, CharacterNotFoundError, MessageVars};
use horacio_core::entities::{
    Character, CharacterChanges, CharacterWithOwner, JsonMap, NewCharacter, StatOverrides,
};
use horacio_core::traits::FindCharactersOptions;
use horacio_core::value_objects::{CharacterId, Snowflake};
use horacio_core::DomainError;
use serde_json::{json, Value};
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::{
    into_app_error, CharacterOperationResult, CreateCharacterInput, UpdateCharacterInput,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Rule system assumed when none is given
pub const DEFAULT_SYSTEM: &str = "d20";

/// Cumulative experience by level, clamped to the last entry
const EXPERIENCE_TABLE: [i64; 11] = [
    0, 300, 900, 2700, 6500, 14000, 23000, 34000, 48000, 64000, 85000,
];

/// Experience recorded when a character is moved to `level`
pub fn experience_for_level(level: i32) -> i64 {
    let index = usize::try_from(level.max(0)).unwrap_or(0);
    EXPERIENCE_TABLE[index.min(EXPERIENCE_TABLE.len() - 1)]
}

/// Starting `attributes` for a rule system
pub fn default_attributes(system: &str) -> JsonMap {
    let value = match system {
        "d20" => json!({
            "strength": 10,
            "dexterity": 10,
            "constitution": 10,
            "intelligence": 10,
            "wisdom": 10,
            "charisma": 10,
            "hitPoints": { "current": 8, "max": 8 },
            "armorClass": 10,
        }),
        "d100" => json!({
            "strength": 50,
            "dexterity": 50,
            "constitution": 50,
            "intelligence": 50,
            "power": 50,
            "charisma": 50,
            "hitPoints": 10,
            "sanity": 50,
        }),
        _ => return JsonMap::new(),
    };

    match value {
        Value::Object(map) => map,
        _ => JsonMap::new(),
    }
}

#[track_caller]
fn duplicate_name(name: &str) -> AppError {
    AppError::validation(
        get_message("character.duplicate_name", &MessageVars::new().with("name", name)),
        Some("name"),
        Some(Value::from(name)),
    )
}

fn not_found(character_id: CharacterId, user_id: Snowflake) -> CharacterNotFoundError {
    CharacterNotFoundError::new(character_id, user_id, Default::default())
}

/// Storage-level name conflicts surface as the same validation error as the pre-check
fn map_name_conflict(err: DomainError) -> ServiceError {
    match err {
        DomainError::CharacterNameTaken { name } => duplicate_name(&name).into(),
        other => other.into(),
    }
}

/// Character service
pub struct CharacterService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CharacterService<'a> {
    /// Create a new CharacterService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get a character with its owner, visible only to the owner
    #[instrument(skip(self))]
    pub async fn get_character_details(
        &self,
        character_id: CharacterId,
        requesting_user: Snowflake,
    ) -> ServiceResult<CharacterWithOwner> {
        let details = self
            .ctx
            .character_repo()
            .find_by_id_with_owner(character_id)
            .await?
            .ok_or_else(|| not_found(character_id, requesting_user))?;

        if !details.character.is_owned_by(requesting_user) {
            warn!(%character_id, %requesting_user, "Character view denied");
            return Err(AppError::permission_denied(
                "visualizar personagem",
                Some(&character_id.to_string()),
            )
            .into());
        }

        Ok(details)
    }

    /// All characters of a user, newest first
    #[instrument(skip(self))]
    pub async fn get_user_characters(
        &self,
        user_id: Snowflake,
        include_inactive: bool,
    ) -> ServiceResult<Vec<Character>> {
        let options = FindCharactersOptions {
            include_inactive,
            ..Default::default()
        };
        Ok(self.ctx.character_repo().find_by_owner(user_id, &options).await?)
    }

    /// A page of a user's characters
    #[instrument(skip(self))]
    pub async fn list_user_characters(
        &self,
        user_id: Snowflake,
        options: &FindCharactersOptions,
    ) -> ServiceResult<Vec<Character>> {
        Ok(self.ctx.character_repo().find_by_owner(user_id, options).await?)
    }

    #[instrument(skip(self))]
    pub async fn count_user_characters(
        &self,
        user_id: Snowflake,
        include_inactive: bool,
    ) -> ServiceResult<i64> {
        Ok(self
            .ctx
            .character_repo()
            .count_by_owner(user_id, include_inactive)
            .await?)
    }

    /// Active character of `user_id` named `name`, ignoring case and surrounding whitespace
    #[instrument(skip(self))]
    pub async fn find_character_by_name(
        &self,
        user_id: Snowflake,
        name: &str,
    ) -> ServiceResult<Option<Character>> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(None);
        }
        Ok(self
            .ctx
            .character_repo()
            .find_by_owner_and_name(user_id, name)
            .await?)
    }

    /// Create a new character
    #[instrument(skip(self, input), fields(user_id = %input.user_id))]
    pub async fn create_character(
        &self,
        input: CreateCharacterInput,
    ) -> ServiceResult<CharacterOperationResult> {
        let input = input.normalized();
        input.validate().map_err(|e| into_app_error(&e))?;

        if self
            .ctx
            .character_repo()
            .find_by_owner_and_name(input.user_id, &input.name)
            .await?
            .is_some()
        {
            return Err(duplicate_name(&input.name).into());
        }

        let system = input.system.unwrap_or_else(|| DEFAULT_SYSTEM.to_string());
        let new_character = NewCharacter {
            name: input.name,
            description: input.description,
            image_url: input.image_url,
            attributes: default_attributes(&system),
            system,
            level: Some(input.level.unwrap_or(Character::MIN_LEVEL)),
            experience: 0,
            skills: JsonMap::new(),
            equipment: JsonMap::new(),
            stats: StatOverrides::default(),
            is_public: input.is_public.unwrap_or(false),
            user_id: input.user_id,
            guild_id: input.guild_id,
        };

        let character = self
            .ctx
            .character_repo()
            .create(new_character)
            .await
            .map_err(map_name_conflict)?;

        info!(character_id = %character.id, name = %character.name, "Character created");

        let message = get_message(
            "character.create_success",
            &MessageVars::new().with("name", &character.name),
        );
        Ok(CharacterOperationResult::with_character(character, message))
    }

    /// Update a character owned by `user_id`
    #[instrument(skip(self, input))]
    pub async fn update_character(
        &self,
        character_id: CharacterId,
        user_id: Snowflake,
        input: UpdateCharacterInput,
    ) -> ServiceResult<CharacterOperationResult> {
        let existing = self.owned_character(character_id, user_id, "editar personagem").await?;

        let input = input.normalized();
        input.validate().map_err(|e| into_app_error(&e))?;

        if let Some(name) = input.name.as_deref() {
            if name.to_lowercase() != existing.name.to_lowercase() {
                let clash = self
                    .ctx
                    .character_repo()
                    .find_by_owner_and_name(user_id, name)
                    .await?;
                if clash.is_some_and(|other| other.id != character_id) {
                    return Err(duplicate_name(name).into());
                }
            }
        }

        let experience = match input.level {
            Some(level) if level != existing.level => Some(experience_for_level(level)),
            _ => input.experience,
        };

        let changes = CharacterChanges {
            name: input.name,
            description: input.description,
            image_url: input.image_url,
            system: input.system,
            level: input.level,
            experience,
            attributes: input.attributes,
            skills: input.skills,
            equipment: input.equipment,
            is_active: None,
            is_public: input.is_public,
        };

        let character = self
            .ctx
            .character_repo()
            .update(character_id, changes)
            .await
            .map_err(map_name_conflict)?
            .ok_or_else(|| not_found(character_id, user_id))?;

        info!(%character_id, "Character updated");

        let message = get_message(
            "character.update_success",
            &MessageVars::new().with("name", &character.name),
        );
        Ok(CharacterOperationResult::with_character(character, message))
    }

    /// Soft-delete a character owned by `user_id`
    #[instrument(skip(self))]
    pub async fn delete_character(
        &self,
        character_id: CharacterId,
        user_id: Snowflake,
    ) -> ServiceResult<CharacterOperationResult> {
        let character = self.owned_character(character_id, user_id, "excluir personagem").await?;

        let success = self.ctx.character_repo().deactivate(character_id).await?;

        let message = if success {
            info!(%character_id, "Character deactivated");
            get_message(
                "character.delete_success",
                &MessageVars::new().with("name", &character.name),
            )
        } else {
            get_message("character.delete_failed", &MessageVars::new())
        };
        Ok(CharacterOperationResult::outcome(success, message))
    }

    /// Load a character and require `user_id` to own it
    async fn owned_character(
        &self,
        character_id: CharacterId,
        user_id: Snowflake,
        action: &str,
    ) -> ServiceResult<Character> {
        let character = self
            .ctx
            .character_repo()
            .find_by_id(character_id)
            .await?
            .ok_or_else(|| not_found(character_id, user_id))?;

        if !character.is_owned_by(user_id) {
            warn!(%character_id, %user_id, action, "Character access denied");
            return Err(AppError::permission_denied(action, Some(&character_id.to_string())).into());
        }

        Ok(character)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use horacio_common::{ErrorKind, Severity};
    use horacio_core::entities::User;
    use horacio_core::traits::{
        CharacterOrderBy, CharacterRepository, OrderDirection, UserRepository,
    };
    use horacio_db::InMemoryStore;

    const OWNER: Snowflake = Snowflake::new(111);
    const STRANGER: Snowflake = Snowflake::new(222);
    const GUILD: Snowflake = Snowflake::new(999);

    async fn setup() -> (Arc<InMemoryStore>, ServiceContext) {
        let store = Arc::new(InMemoryStore::new());
        for (id, name) in [(OWNER, "owner"), (STRANGER, "stranger")] {
            store.upsert(&User::new(id, name.to_string())).await.unwrap();
        }
        let ctx = ServiceContext::new(store.clone(), store.clone());
        (store, ctx)
    }

    fn input(name: &str) -> CreateCharacterInput {
        CreateCharacterInput {
            name: name.to_string(),
            user_id: OWNER,
            guild_id: GUILD,
            ..Default::default()
        }
    }

    async fn create(ctx: &ServiceContext, name: &str) -> Character {
        CharacterService::new(ctx)
            .create_character(input(name))
            .await
            .unwrap()
            .character
            .unwrap()
    }

    fn app_error(err: ServiceError) -> AppError {
        match err {
            ServiceError::App(e) => e,
            other => panic!("expected AppError, got {other:?}"),
        }
    }

    #[test]
    fn test_experience_table() {
        assert_eq!(experience_for_level(1), 300);
        assert_eq!(experience_for_level(5), 14000);
        assert_eq!(experience_for_level(10), 85000);
        assert_eq!(experience_for_level(20), 85000);
        assert_eq!(experience_for_level(0), 0);
    }

    #[test]
    fn test_default_attributes_by_system() {
        let d20 = default_attributes("d20");
        assert_eq!(d20["hitPoints"], json!({ "current": 8, "max": 8 }));
        assert_eq!(d20["armorClass"], json!(10));
        assert_eq!(d20["wisdom"], json!(10));

        let d100 = default_attributes("d100");
        assert_eq!(d100["power"], json!(50));
        assert_eq!(d100["hitPoints"], json!(10));
        assert_eq!(d100["sanity"], json!(50));

        assert!(default_attributes("gurps").is_empty());
    }

    #[tokio::test]
    async fn test_create_applies_defaults() {
        let (_, ctx) = setup().await;
        let result = CharacterService::new(&ctx)
            .create_character(input("  Gimli  "))
            .await
            .unwrap();

        assert!(result.success);
        assert_eq!(result.message, "Personagem Gimli criado com sucesso!");

        let character = result.character.unwrap();
        assert_eq!(character.name, "Gimli");
        assert_eq!(character.level, 1);
        assert_eq!(character.experience, 0);
        assert_eq!(character.system, "d20");
        assert!(!character.is_public);
        assert!(character.skills.is_empty());
        assert_eq!(character.hit_points(), (8, 8));
    }

    #[tokio::test]
    async fn test_create_d100_with_level() {
        let (_, ctx) = setup().await;
        let mut d100 = input("Léa-Anne d'Arc");
        d100.system = Some("d100".to_string());
        d100.level = Some(20);

        let character = CharacterService::new(&ctx)
            .create_character(d100)
            .await
            .unwrap()
            .character
            .unwrap();
        assert_eq!(character.name, "Léa-Anne d'Arc");
        assert_eq!(character.system, "d100");
        assert_eq!(character.level, 20);
        assert_eq!(character.experience, 0);
        assert_eq!(character.attributes, default_attributes("d100"));
        assert_eq!(character.attributes["sanity"], json!(50));
    }

    #[tokio::test]
    async fn test_create_unknown_system_has_no_attributes() {
        let (_, ctx) = setup().await;
        let mut other = input("Conan");
        other.system = Some("gurps".to_string());

        let character = CharacterService::new(&ctx)
            .create_character(other)
            .await
            .unwrap()
            .character
            .unwrap();
        assert_eq!(character.system, "gurps");
        assert!(character.attributes.is_empty());
    }

    #[tokio::test]
    async fn test_create_validation_runs_before_storage() {
        let (store, ctx) = setup().await;
        store.set_unavailable(true);

        let err = CharacterService::new(&ctx)
            .create_character(input("X"))
            .await
            .unwrap_err();
        let err = app_error(err);
        assert!(err.is_kind(ErrorKind::Validation));
        assert_eq!(err.message(), "Nome deve ter pelo menos 2 caracteres");
    }

    #[tokio::test]
    async fn test_create_rejects_bad_level() {
        let (_, ctx) = setup().await;
        let mut bad = input("Gimli");
        bad.level = Some(0);

        let err = app_error(CharacterService::new(&ctx).create_character(bad).await.unwrap_err());
        assert_eq!(err.message(), "Nível deve estar entre 1 e 20");
        assert_eq!(err.context()["field"], "level");
    }

    #[tokio::test]
    async fn test_create_duplicate_name() {
        let (_, ctx) = setup().await;
        create(&ctx, "Legolas").await;

        let err = CharacterService::new(&ctx)
            .create_character(input("legolas"))
            .await
            .unwrap_err();
        let err = app_error(err);
        assert_eq!(err.message(), "Você já possui um personagem chamado \"legolas\"");
        assert_eq!(err.context()["field"], "name");
        assert_eq!(err.context()["value"], "legolas");
        assert_eq!(err.severity(), Severity::Low);
    }

    #[tokio::test]
    async fn test_details_visibility() {
        let (_, ctx) = setup().await;
        let service = CharacterService::new(&ctx);
        let character = create(&ctx, "Gandalf").await;

        let details = service.get_character_details(character.id, OWNER).await.unwrap();
        assert_eq!(details.owner.username, "owner");

        let err = app_error(
            service
                .get_character_details(character.id, STRANGER)
                .await
                .unwrap_err(),
        );
        assert!(err.is_kind(ErrorKind::PermissionDenied));
        assert!(err.message().contains("visualizar personagem"));

        let missing = service
            .get_character_details(CharacterId::generate(), OWNER)
            .await
            .unwrap_err();
        assert!(matches!(missing, ServiceError::CharacterNotFound(_)));
    }

    #[tokio::test]
    async fn test_update_recomputes_experience() {
        let (_, ctx) = setup().await;
        let service = CharacterService::new(&ctx);
        let character = create(&ctx, "Boromir").await;

        let update = UpdateCharacterInput {
            level: Some(5),
            ..Default::default()
        };
        let result = service.update_character(character.id, OWNER, update).await.unwrap();
        let updated = result.character.unwrap();
        assert_eq!(updated.level, 5);
        assert_eq!(updated.experience, 14000);
        assert_eq!(result.message, "Personagem Boromir atualizado com sucesso!");

        // Same level keeps an explicit experience value
        let update = UpdateCharacterInput {
            level: Some(5),
            experience: Some(15000),
            ..Default::default()
        };
        let updated = service
            .update_character(character.id, OWNER, update)
            .await
            .unwrap()
            .character
            .unwrap();
        assert_eq!(updated.experience, 15000);
    }

    #[tokio::test]
    async fn test_update_rejects_negative_experience() {
        let (store, ctx) = setup().await;
        let service = CharacterService::new(&ctx);
        let character = create(&ctx, "Frodo").await;

        let update = UpdateCharacterInput {
            experience: Some(-500),
            ..Default::default()
        };
        let err = app_error(service.update_character(character.id, OWNER, update).await.unwrap_err());
        assert!(err.is_kind(ErrorKind::Validation));
        assert_eq!(err.context()["field"], "experience");

        let stored = CharacterRepository::find_by_id(store.as_ref(), character.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.experience, 0);
    }

    #[tokio::test]
    async fn test_update_checks_order() {
        let (store, ctx) = setup().await;
        let service = CharacterService::new(&ctx);
        let character = create(&ctx, "Faramir").await;

        let invalid = || UpdateCharacterInput {
            level: Some(30),
            ..Default::default()
        };

        let err = service
            .update_character(CharacterId::generate(), OWNER, invalid())
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::CharacterNotFound(_)));

        let err = app_error(
            service
                .update_character(character.id, STRANGER, invalid())
                .await
                .unwrap_err(),
        );
        assert!(err.message().contains("editar personagem"));

        let err = app_error(
            service
                .update_character(character.id, OWNER, invalid())
                .await
                .unwrap_err(),
        );
        assert!(err.is_kind(ErrorKind::Validation));

        let stored = CharacterRepository::find_by_id(store.as_ref(), character.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.level, 1);
    }

    #[tokio::test]
    async fn test_rename_uniqueness() {
        let (_, ctx) = setup().await;
        let service = CharacterService::new(&ctx);
        create(&ctx, "Merry").await;
        let pippin = create(&ctx, "Pippin").await;

        let clash = UpdateCharacterInput {
            name: Some("MERRY".to_string()),
            ..Default::default()
        };
        let err = app_error(service.update_character(pippin.id, OWNER, clash).await.unwrap_err());
        assert_eq!(err.context()["field"], "name");

        // Changing only the case of its own name is allowed
        let recase = UpdateCharacterInput {
            name: Some("PIPPIN".to_string()),
            ..Default::default()
        };
        let renamed = service
            .update_character(pippin.id, OWNER, recase)
            .await
            .unwrap()
            .character
            .unwrap();
        assert_eq!(renamed.name, "PIPPIN");
    }

    #[tokio::test]
    async fn test_delete_soft_deletes() {
        let (store, ctx) = setup().await;
        let service = CharacterService::new(&ctx);
        let character = create(&ctx, "Sméagol").await;

        let err = app_error(service.delete_character(character.id, STRANGER).await.unwrap_err());
        assert!(err.message().contains("excluir personagem"));

        let result = service.delete_character(character.id, OWNER).await.unwrap();
        assert!(result.success);
        assert!(result.character.is_none());
        assert_eq!(result.message, "Personagem Sméagol foi removido com sucesso!");

        let stored = CharacterRepository::find_by_id(store.as_ref(), character.id)
            .await
            .unwrap()
            .unwrap();
        assert!(!stored.is_active);

        let again = service.delete_character(character.id, OWNER).await.unwrap();
        assert!(!again.success);
        assert_eq!(again.message, "Erro ao remover personagem");
    }

    #[tokio::test]
    async fn test_listing_and_search() {
        let (_, ctx) = setup().await;
        let service = CharacterService::new(&ctx);
        for name in ["Bilbo", "Frodo", "Sam"] {
            create(&ctx, name).await;
        }
        let gone = create(&ctx, "Lobelia").await;
        service.delete_character(gone.id, OWNER).await.unwrap();

        assert_eq!(service.get_user_characters(OWNER, false).await.unwrap().len(), 3);
        assert_eq!(service.get_user_characters(OWNER, true).await.unwrap().len(), 4);
        assert_eq!(service.count_user_characters(OWNER, false).await.unwrap(), 3);
        assert!(service.get_user_characters(STRANGER, false).await.unwrap().is_empty());

        let options = FindCharactersOptions::default()
            .ordered(CharacterOrderBy::Name, OrderDirection::Asc)
            .with_limit(2);
        let page = service.list_user_characters(OWNER, &options).await.unwrap();
        let names: Vec<&str> = page.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Bilbo", "Frodo"]);

        let found = service.find_character_by_name(OWNER, " frodo ").await.unwrap();
        assert_eq!(found.map(|c| c.name), Some("Frodo".to_string()));
        assert!(service.find_character_by_name(OWNER, "Lobelia").await.unwrap().is_none());
        assert!(service.find_character_by_name(OWNER, "  ").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_storage_failure_is_internal() {
        let (store, ctx) = setup().await;
        store.set_unavailable(true);

        let err = CharacterService::new(&ctx)
            .get_user_characters(OWNER, false)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Domain(_)));
        assert!(!err.is_user_facing());
    }

    #[test]
    fn test_storage_conflict_maps_to_validation() {
        let err = app_error(map_name_conflict(DomainError::CharacterNameTaken {
            name: "Aragorn".to_string(),
        }));
        assert!(err.is_kind(ErrorKind::Validation));
        assert_eq!(err.context()["value"], "Aragorn");

        let passthrough = map_name_conflict(DomainError::DatabaseError("boom".to_string()));
        assert!(matches!(passthrough, ServiceError::Domain(_)));
    }
}
