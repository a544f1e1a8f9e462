//! Slash-command handlers

use horacio_common::{get_message, message, CharacterNotFoundError, MessageVars};
use horacio_core::entities::{Character, CharacterWithOwner, User};
use horacio_core::traits::FindCharactersOptions;
use horacio_core::value_objects::{CharacterId, Snowflake};
use horacio_service::{CharacterService, CreateCharacterInput, ServiceContext, UpdateCharacterInput};

use super::{HandlerError, HandlerResult};
use crate::commands::{self, options};
use crate::interaction::{CommandOption, CommandOptions, Interaction, InteractionKind};
use crate::render::{self, LIST_PAGE_SIZE};
use crate::reply::Reply;

/// Guild recorded for characters created in direct messages
const DIRECT_MESSAGE_GUILD: Snowflake = Snowflake::new(0);

/// Handles slash commands
pub struct CommandHandler;

impl CommandHandler {
    pub async fn handle(
        ctx: &ServiceContext,
        interaction: &Interaction,
        owner: &User,
        name: &str,
        raw_options: &[(String, CommandOption)],
    ) -> HandlerResult<Reply> {
        let opts = CommandOptions::new(raw_options);

        match name {
            commands::FICHA => match opts.string(options::PERSONAGEM) {
                None => character_list(ctx, owner.id).await,
                Some(reference) => {
                    let details = resolve_details(ctx, interaction, owner.id, reference).await?;
                    Ok(sheet(&details))
                }
            },
            commands::CRIAR_PERSONAGEM => create_character(ctx, interaction, owner, &opts).await,
            commands::EDITAR_PERSONAGEM => edit_character(ctx, interaction, owner, &opts).await,
            commands::EXCLUIR_PERSONAGEM => {
                let reference = opts
                    .string(options::PERSONAGEM)
                    .ok_or(HandlerError::MissingOption(options::PERSONAGEM))?;
                let details = resolve_details(ctx, interaction, owner.id, reference).await?;
                Ok(render::delete_confirmation(&details.character))
            }
            _ => {
                tracing::debug!(command = name, "Unknown command");
                Ok(Reply::text(get_message(
                    "command.not_implemented",
                    &MessageVars::new().with("command", name),
                )))
            }
        }
    }
}

/// The owner's first characters and their total count
pub(super) async fn character_list(ctx: &ServiceContext, owner: Snowflake) -> HandlerResult<Reply> {
    let service = CharacterService::new(ctx);
    let page = FindCharactersOptions::default().with_limit(LIST_PAGE_SIZE as i64);
    let characters = service.list_user_characters(owner, &page).await?;
    let total = service.count_user_characters(owner, false).await?;
    Ok(render::character_list(&characters, total))
}

/// Character sheet with the creation tip on top
pub(super) fn sheet(details: &CharacterWithOwner) -> Reply {
    render::character_sheet(details).with_content(message("tip.character_creation"))
}

/// Character id from the option value, falling back to a name lookup
async fn resolve_id(
    ctx: &ServiceContext,
    interaction: &Interaction,
    owner: Snowflake,
    reference: &str,
) -> HandlerResult<CharacterId> {
    if let Ok(id) = CharacterId::parse(reference.trim()) {
        return Ok(id);
    }
    CharacterService::new(ctx)
        .find_character_by_name(owner, reference)
        .await?
        .map(|c| c.id)
        .ok_or_else(|| not_found(interaction, reference, owner).into())
}

async fn resolve_details(
    ctx: &ServiceContext,
    interaction: &Interaction,
    owner: Snowflake,
    reference: &str,
) -> HandlerResult<CharacterWithOwner> {
    let character_id = resolve_id(ctx, interaction, owner, reference).await?;
    Ok(CharacterService::new(ctx)
        .get_character_details(character_id, owner)
        .await?)
}

fn not_found(interaction: &Interaction, reference: &str, owner: Snowflake) -> CharacterNotFoundError {
    let command = match &interaction.kind {
        InteractionKind::Command { name, .. } => name.as_str(),
        _ => "",
    };
    CharacterNotFoundError::from_command(reference.trim(), owner, command, Some(&interaction.id))
}

/// Level option narrowed to the stored width; out-of-range values still fail validation
fn level(opts: &CommandOptions<'_>) -> Option<i32> {
    opts.integer(options::NIVEL)
        .map(|n| i32::try_from(n).unwrap_or(if n < 0 { i32::MIN } else { i32::MAX }))
}

async fn create_character(
    ctx: &ServiceContext,
    interaction: &Interaction,
    owner: &User,
    opts: &CommandOptions<'_>,
) -> HandlerResult<Reply> {
    let name = opts
        .string(options::NOME)
        .ok_or(HandlerError::MissingOption(options::NOME))?;

    let input = CreateCharacterInput {
        name: name.to_string(),
        description: opts.string(options::DESCRICAO).map(str::to_string),
        image_url: None,
        system: opts.string(options::SISTEMA).map(|s| s.trim().to_lowercase()),
        level: level(opts),
        is_public: opts.boolean(options::PUBLICO),
        user_id: owner.id,
        guild_id: interaction.invoker.guild_id.unwrap_or(DIRECT_MESSAGE_GUILD),
    };

    let result = CharacterService::new(ctx).create_character(input).await?;
    Ok(operation_reply(result.character, owner, result.message))
}

async fn edit_character(
    ctx: &ServiceContext,
    interaction: &Interaction,
    owner: &User,
    opts: &CommandOptions<'_>,
) -> HandlerResult<Reply> {
    let reference = opts
        .string(options::PERSONAGEM)
        .ok_or(HandlerError::MissingOption(options::PERSONAGEM))?;
    // Ownership is checked by the update itself
    let character_id = resolve_id(ctx, interaction, owner.id, reference).await?;

    let input = UpdateCharacterInput {
        name: opts.string(options::NOME).map(str::to_string),
        description: opts.string(options::DESCRICAO).map(str::to_string),
        level: level(opts),
        is_public: opts.boolean(options::PUBLICO),
        ..Default::default()
    };

    let result = CharacterService::new(ctx)
        .update_character(character_id, owner.id, input)
        .await?;
    Ok(operation_reply(result.character, owner, result.message))
}

/// Sheet of the affected character under the operation message
fn operation_reply(character: Option<Character>, owner: &User, text: String) -> Reply {
    match character {
        Some(character) => {
            let details = CharacterWithOwner {
                character,
                owner: owner.clone(),
            };
            render::character_sheet(&details).with_content(text)
        }
        None => Reply::text(text),
    }
}
