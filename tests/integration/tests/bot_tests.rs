//! Bot Integration Tests
//!
//! Drive the interaction router end to end. In-memory scenarios always run;
//! PostgreSQL scenarios require DATABASE_URL and are skipped otherwise.
//!
//! Run with: cargo test -p horacio-integration-tests --test bot_tests

use horacio_bot::commands::{self, options};
use horacio_bot::Reply;
use horacio_common::{has_message, message};
use horacio_core::traits::CharacterRepository;
use horacio_integration_tests::{
    button_id, check_test_env, opt_bool, opt_int, opt_str, text_with, unique_name, TestBot,
    TestUser,
};

fn title(reply: &Reply) -> Option<&str> {
    reply.embeds.first().and_then(|e| e.title.as_deref())
}

async fn create(bot: &TestBot, user: &TestUser, name: &str) -> Reply {
    bot.command(user, commands::CRIAR_PERSONAGEM, vec![opt_str(options::NOME, name)])
        .await
}

// ============================================================================
// Character lifecycle
// ============================================================================

async fn run_lifecycle(bot: &TestBot) {
    let user = TestUser::unique();
    let name = unique_name("Aragorn");

    let created = bot
        .command(
            &user,
            commands::CRIAR_PERSONAGEM,
            vec![
                opt_str(options::NOME, &format!("  {name}  ")),
                opt_str(options::DESCRICAO, "Herdeiro de Isildur"),
                opt_int(options::NIVEL, 3),
                opt_bool(options::PUBLICO, true),
            ],
        )
        .await;
    assert_eq!(
        created.content,
        Some(text_with("character.create_success", "name", &name))
    );
    assert_eq!(title(&created), Some(format!("📜 Ficha de {name}").as_str()));

    // Listing shows the new character
    let list = bot.command(&user, commands::FICHA, vec![]).await;
    assert!(list.embeds[0].field_named(&format!("🎭 {name}")).is_some());

    // Detail by name, case-insensitively
    let detail = bot
        .command(
            &user,
            commands::FICHA,
            vec![opt_str(options::PERSONAGEM, &name.to_uppercase())],
        )
        .await;
    assert_eq!(title(&detail), Some(format!("📜 Ficha de {name}").as_str()));

    // Level change recomputes experience
    let edited = bot
        .command(
            &user,
            commands::EDITAR_PERSONAGEM,
            vec![opt_str(options::PERSONAGEM, &name), opt_int(options::NIVEL, 4)],
        )
        .await;
    let basic = edited.embeds[0]
        .field_named("📋 Informações Básicas")
        .map(|f| f.value.clone())
        .unwrap();
    assert!(basic.contains("**Nível:** 4"), "{basic}");
    assert!(basic.contains("**Experiência:** 6500"), "{basic}");

    // Delete through the sheet's buttons
    let delete_id = button_id(&detail, &message("button.delete_character")).unwrap();
    let prompt = bot.click(&user, &delete_id).await;
    let confirm_id = button_id(&prompt, &message("confirm.yes")).unwrap();
    let done = bot.click(&user, &confirm_id).await;
    assert_eq!(
        done.content,
        Some(text_with("character.delete_success", "name", &name))
    );

    let list = bot.command(&user, commands::FICHA, vec![]).await;
    assert_eq!(list.content, Some(message("character.list_empty")));

    // The name is free again
    let again = create(bot, &user, &name).await;
    assert_eq!(
        again.content,
        Some(text_with("character.create_success", "name", &name))
    );
}

#[tokio::test]
async fn test_character_lifecycle_in_memory() {
    run_lifecycle(&TestBot::in_memory()).await;
}

#[tokio::test]
async fn test_character_lifecycle_postgres() {
    if !check_test_env() {
        return;
    }
    let bot = TestBot::postgres().await.expect("Failed to connect to PostgreSQL");
    run_lifecycle(&bot).await;
}

// ============================================================================
// Names
// ============================================================================

async fn run_duplicate_names(bot: &TestBot) {
    let user = TestUser::unique();
    let other = TestUser::unique();
    let name = unique_name("Legolas");

    create(bot, &user, &name).await;

    let duplicate = create(bot, &user, &name.to_lowercase()).await;
    assert_eq!(
        duplicate.content,
        Some(text_with("character.duplicate_name", "name", &name.to_lowercase()))
    );

    // Another owner may use the same name
    let reply = create(bot, &other, &name).await;
    assert_eq!(
        reply.content,
        Some(text_with("character.create_success", "name", &name))
    );
}

#[tokio::test]
async fn test_duplicate_names_in_memory() {
    run_duplicate_names(&TestBot::in_memory()).await;
}

#[tokio::test]
async fn test_duplicate_names_postgres() {
    if !check_test_env() {
        return;
    }
    let bot = TestBot::postgres().await.expect("Failed to connect to PostgreSQL");
    run_duplicate_names(&bot).await;
}

#[tokio::test]
async fn test_rename_validation() {
    let bot = TestBot::in_memory();
    let user = TestUser::unique();
    let first = unique_name("Merry");
    let second = unique_name("Pippin");
    create(&bot, &user, &first).await;
    create(&bot, &user, &second).await;

    let taken = bot
        .command(
            &user,
            commands::EDITAR_PERSONAGEM,
            vec![opt_str(options::PERSONAGEM, &first), opt_str(options::NOME, &second)],
        )
        .await;
    assert_eq!(
        taken.content,
        Some(text_with("character.duplicate_name", "name", &second))
    );

    let invalid = bot
        .command(
            &user,
            commands::EDITAR_PERSONAGEM,
            vec![opt_str(options::PERSONAGEM, &first), opt_str(options::NOME, "Merry#1")],
        )
        .await;
    assert_eq!(invalid.content, Some(message("validation.invalid_name_chars")));

    // Changing only the case of its own name is allowed
    let recased = bot
        .command(
            &user,
            commands::EDITAR_PERSONAGEM,
            vec![
                opt_str(options::PERSONAGEM, &first),
                opt_str(options::NOME, &first.to_uppercase()),
            ],
        )
        .await;
    assert_eq!(
        recased.content,
        Some(text_with("character.update_success", "name", &first.to_uppercase()))
    );
}

// ============================================================================
// Ownership and failures
// ============================================================================

#[tokio::test]
async fn test_buttons_respect_ownership() {
    let bot = TestBot::in_memory();
    let owner = TestUser::unique();
    let stranger = TestUser::unique();

    let sheet = create(&bot, &owner, &unique_name("Boromir")).await;
    let delete_id = button_id(&sheet, &message("button.delete_character")).unwrap();
    let edit_id = button_id(&sheet, &message("button.edit_character")).unwrap();

    let denied = bot.click(&stranger, &delete_id).await;
    assert!(denied
        .content
        .unwrap()
        .starts_with("Permissão negada para visualizar personagem"));

    let edit = bot.click(&owner, &edit_id).await;
    assert_eq!(
        edit.content,
        Some(text_with("button.not_implemented", "action", "character"))
    );
}

#[tokio::test]
async fn test_storage_outage() {
    let bot = TestBot::in_memory();
    let user = TestUser::unique();
    let name = unique_name("Faramir");
    create(&bot, &user, &name).await;

    let store = bot.store.clone().unwrap();
    store.set_unavailable(true);
    let reply = bot.command(&user, commands::FICHA, vec![]).await;
    assert_eq!(reply.content, Some(message("error.generic")));
    assert!(reply.embeds.is_empty());

    store.set_unavailable(false);
    let stored = store.find_by_owner_and_name(user.id, &name).await.unwrap();
    assert!(stored.is_some());
}

#[tokio::test]
async fn test_list_is_capped() {
    let bot = TestBot::in_memory();
    let user = TestUser::unique();
    for _ in 0..12 {
        create(&bot, &user, &unique_name("Hobbit")).await;
    }

    let list = bot.command(&user, commands::FICHA, vec![]).await;
    let embed = &list.embeds[0];
    assert_eq!(embed.fields.len(), 10);
    assert!(embed
        .description
        .as_deref()
        .unwrap()
        .starts_with("Mostrando os primeiros 10 de 12 personagens."));
}

// ============================================================================
// Catalog
// ============================================================================

#[test]
fn test_catalog_covers_router_keys() {
    for key in [
        "command.not_implemented",
        "command.invalid",
        "button.not_implemented",
        "select.not_implemented",
        "modal.not_implemented",
        "character.not_found",
        "character.list_empty",
        "character.list_truncated",
        "character.create_success",
        "character.update_success",
        "character.delete_success",
        "character.delete_failed",
        "character.duplicate_name",
        "confirm.delete_character",
        "confirm.yes",
        "confirm.no",
        "confirm.cancel",
        "button.create_character",
        "button.edit_character",
        "button.delete_character",
        "button.roll_dice",
        "button.refresh_list",
        "embed.character_sheet_title",
        "embed.character_list_title",
        "embed.footer",
        "embed.list_entry",
        "embed.basic_info",
        "embed.hit_points",
        "health.dead",
        "health.critical",
        "health.wounded",
        "health.hurt",
        "health.healthy",
        "common.yes",
        "common.no",
        "tip.character_creation",
        "error.generic",
        "bot.ready",
    ] {
        assert!(has_message(key), "{key}");
    }
}
