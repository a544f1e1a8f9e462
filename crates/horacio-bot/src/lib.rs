//! # horacio-bot
//!
//! Discord front end of the character-sheet bot: the interaction and reply
//! models, slash-command definitions, the interaction router, embed rendering
//! and the serenity adapter.

pub mod commands;
pub mod custom_id;
pub mod discord;
pub mod handlers;
pub mod interaction;
pub mod render;
pub mod reply;
pub mod server;

pub use handlers::{HandlerError, HandlerResult, InteractionRouter};
pub use interaction::{CommandOption, Interaction, InteractionKind, Invoker};
pub use reply::{ActionRow, Button, ButtonStyle, Embed, EmbedField, Reply};
