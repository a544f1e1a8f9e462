//! Discord gateway adapter
//!
//! Converts serenity interactions into [`Interaction`]s, runs them through the
//! [`InteractionRouter`] and sends the [`Reply`] back. Nothing outside this
//! module touches serenity types.

use horacio_core::value_objects::Snowflake;
use serenity::all::{
    ButtonStyle as DiscordButtonStyle, Command, CommandDataOption, CommandDataOptionValue,
    CommandOptionType, ComponentInteractionDataKind, Context, CreateActionRow, CreateButton,
    CreateCommand, CreateCommandOption, CreateEmbed, CreateEmbedFooter, CreateInteractionResponse,
    CreateInteractionResponseMessage, EventHandler, GuildId, Interaction as GatewayInteraction,
    Ready, Timestamp, User as DiscordUser,
};
use serenity::async_trait;
use tracing::{error, info, warn};

use crate::commands::{self, CommandDefinition, OptionKind};
use crate::handlers::InteractionRouter;
use crate::interaction::{CommandOption, Interaction, InteractionKind, Invoker};
use crate::reply::{ActionRow, ButtonStyle, Embed, Reply};

/// Serenity event handler
pub struct DiscordHandler {
    router: InteractionRouter,
    dev_guild_id: Option<u64>,
}

impl DiscordHandler {
    /// `dev_guild_id` registers commands in that guild instead of globally
    pub fn new(router: InteractionRouter, dev_guild_id: Option<u64>) -> Self {
        Self {
            router,
            dev_guild_id,
        }
    }

    async fn register_commands(&self, ctx: &Context) -> serenity::Result<usize> {
        let definitions: Vec<CreateCommand> =
            commands::definitions().iter().map(command_builder).collect();

        let registered = match self.dev_guild_id {
            Some(guild) => GuildId::new(guild).set_commands(&ctx.http, definitions).await?,
            None => Command::set_global_commands(&ctx.http, definitions).await?,
        };
        Ok(registered.len())
    }
}

#[async_trait]
impl EventHandler for DiscordHandler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(
            user = %ready.user.name,
            guilds = ready.guilds.len(),
            "{}",
            horacio_common::message("bot.ready")
        );

        match self.register_commands(&ctx).await {
            Ok(count) => info!(count, dev_guild = ?self.dev_guild_id, "Slash commands registered"),
            Err(e) => error!(error = %e, "Failed to register slash commands"),
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: GatewayInteraction) {
        let Some(incoming) = convert_interaction(&interaction) else {
            return;
        };

        let reply = self.router.handle(&incoming).await;
        let response = CreateInteractionResponse::Message(message_builder(&reply));

        let sent = match &interaction {
            GatewayInteraction::Command(command) => command.create_response(&ctx.http, response).await,
            GatewayInteraction::Component(component) => {
                component.create_response(&ctx.http, response).await
            }
            GatewayInteraction::Modal(modal) => modal.create_response(&ctx.http, response).await,
            _ => Ok(()),
        };

        if let Err(e) = sent {
            warn!(interaction_id = %incoming.id, error = %e, "Failed to send interaction response");
        }
    }
}

// ============================================================================
// Gateway -> router
// ============================================================================

fn invoker(user: &DiscordUser, guild_id: Option<GuildId>) -> Invoker {
    Invoker {
        user_id: Snowflake::from_u64(user.id.get()),
        username: user.name.clone(),
        display_name: user.global_name.clone(),
        avatar: user.avatar.as_ref().map(ToString::to_string),
        guild_id: guild_id.map(|g| Snowflake::from_u64(g.get())),
    }
}

fn command_option(option: &CommandDataOption) -> Option<(String, CommandOption)> {
    let value = match &option.value {
        CommandDataOptionValue::String(s) => CommandOption::String(s.clone()),
        CommandDataOptionValue::Integer(n) => CommandOption::Integer(*n),
        CommandDataOptionValue::Boolean(b) => CommandOption::Boolean(*b),
        _ => return None,
    };
    Some((option.name.clone(), value))
}

/// Convert a gateway interaction; pings and autocomplete are ignored
fn convert_interaction(interaction: &GatewayInteraction) -> Option<Interaction> {
    let converted = match interaction {
        GatewayInteraction::Command(command) => Interaction {
            id: command.id.to_string(),
            invoker: invoker(&command.user, command.guild_id),
            kind: InteractionKind::Command {
                name: command.data.name.clone(),
                options: command.data.options.iter().filter_map(command_option).collect(),
            },
        },
        GatewayInteraction::Component(component) => {
            let custom_id = component.data.custom_id.clone();
            let kind = match &component.data.kind {
                ComponentInteractionDataKind::Button => InteractionKind::Button { custom_id },
                ComponentInteractionDataKind::StringSelect { values } => InteractionKind::SelectMenu {
                    custom_id,
                    values: values.clone(),
                },
                _ => InteractionKind::SelectMenu {
                    custom_id,
                    values: Vec::new(),
                },
            };
            Interaction {
                id: component.id.to_string(),
                invoker: invoker(&component.user, component.guild_id),
                kind,
            }
        }
        GatewayInteraction::Modal(modal) => Interaction {
            id: modal.id.to_string(),
            invoker: invoker(&modal.user, modal.guild_id),
            kind: InteractionKind::ModalSubmit {
                custom_id: modal.data.custom_id.clone(),
            },
        },
        _ => return None,
    };
    Some(converted)
}

// ============================================================================
// Router -> gateway
// ============================================================================

fn command_builder(definition: &CommandDefinition) -> CreateCommand {
    definition.options.iter().fold(
        CreateCommand::new(definition.name).description(definition.description),
        |command, option| {
            let kind = match option.kind {
                OptionKind::String => CommandOptionType::String,
                OptionKind::Integer => CommandOptionType::Integer,
                OptionKind::Boolean => CommandOptionType::Boolean,
            };
            let mut builder = CreateCommandOption::new(kind, option.name, option.description)
                .required(option.required);
            if let Some(min) = option.min_value.and_then(|v| u64::try_from(v).ok()) {
                builder = builder.min_int_value(min);
            }
            if let Some(max) = option.max_value.and_then(|v| u64::try_from(v).ok()) {
                builder = builder.max_int_value(max);
            }
            command.add_option(builder)
        },
    )
}

fn embed_builder(embed: &Embed) -> CreateEmbed {
    let mut builder = CreateEmbed::new();
    if let Some(title) = &embed.title {
        builder = builder.title(title);
    }
    if let Some(description) = &embed.description {
        builder = builder.description(description);
    }
    if let Some(color) = embed.color {
        builder = builder.colour(color);
    }
    for field in &embed.fields {
        builder = builder.field(&field.name, &field.value, field.inline);
    }
    if let Some(footer) = &embed.footer {
        builder = builder.footer(CreateEmbedFooter::new(footer));
    }
    if let Some(timestamp) = embed
        .timestamp
        .and_then(|t| Timestamp::from_unix_timestamp(t.timestamp()).ok())
    {
        builder = builder.timestamp(timestamp);
    }
    builder
}

const fn button_style(style: ButtonStyle) -> DiscordButtonStyle {
    match style {
        ButtonStyle::Primary => DiscordButtonStyle::Primary,
        ButtonStyle::Secondary => DiscordButtonStyle::Secondary,
        ButtonStyle::Success => DiscordButtonStyle::Success,
        ButtonStyle::Danger => DiscordButtonStyle::Danger,
    }
}

fn row_builder(row: &ActionRow) -> CreateActionRow {
    CreateActionRow::Buttons(
        row.buttons
            .iter()
            .map(|b| {
                CreateButton::new(&b.custom_id)
                    .label(&b.label)
                    .style(button_style(b.style))
            })
            .collect(),
    )
}

fn message_builder(reply: &Reply) -> CreateInteractionResponseMessage {
    let mut message = CreateInteractionResponseMessage::new()
        .embeds(reply.embeds.iter().map(embed_builder).collect())
        .components(reply.components.iter().map(row_builder).collect())
        .ephemeral(reply.ephemeral);
    if let Some(content) = &reply.content {
        message = message.content(content);
    }
    message
}
