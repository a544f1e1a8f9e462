//! Interaction handlers
//!
//! Routes incoming interactions by kind and turns every failure into an
//! ephemeral reply.

mod command;
mod component;
mod error;

pub use command::CommandHandler;
pub use component::ComponentHandler;
pub use error::{HandlerError, HandlerResult};

use horacio_core::entities::User;
use horacio_service::{ServiceContext, UserService};
use tracing::instrument;

use crate::interaction::{Interaction, InteractionKind};
use crate::reply::Reply;

/// Dispatch interactions to the appropriate handlers
#[derive(Debug, Clone)]
pub struct InteractionRouter {
    ctx: ServiceContext,
}

impl InteractionRouter {
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &ServiceContext {
        &self.ctx
    }

    /// Handle an interaction; never fails, errors become replies
    #[instrument(
        skip(self, interaction),
        fields(
            interaction_id = %interaction.id,
            kind = interaction.kind.label(),
            user_id = %interaction.invoker.user_id,
        )
    )]
    pub async fn handle(&self, interaction: &Interaction) -> Reply {
        match self.dispatch(interaction).await {
            Ok(reply) => reply,
            Err(err) => {
                if err.is_user_facing() {
                    tracing::debug!(error = %err, "Interaction rejected");
                } else {
                    tracing::error!(error = %err.to_json(), "Interaction failed");
                }
                err.to_reply()
            }
        }
    }

    async fn dispatch(&self, interaction: &Interaction) -> HandlerResult<Reply> {
        let owner = self.register(interaction).await?;

        match &interaction.kind {
            InteractionKind::Command { name, options } => {
                CommandHandler::handle(&self.ctx, interaction, &owner, name, options).await
            }
            InteractionKind::Button { custom_id } => {
                ComponentHandler::button(&self.ctx, &owner, custom_id).await
            }
            InteractionKind::SelectMenu { custom_id, values } => {
                Ok(ComponentHandler::select_menu(custom_id, values))
            }
            InteractionKind::ModalSubmit { custom_id } => {
                Ok(ComponentHandler::modal_submit(custom_id))
            }
        }
    }

    /// Keep the invoker's profile current before touching their characters
    async fn register(&self, interaction: &Interaction) -> HandlerResult<User> {
        let profile = interaction.invoker.profile();
        Ok(UserService::new(&self.ctx).register(&profile).await?)
    }
}
