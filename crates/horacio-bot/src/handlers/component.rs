//! Button, select menu and modal handlers

use horacio_common::{get_message, message, CharacterNotFoundError, ComponentType, MessageVars};
use horacio_core::entities::User;
use horacio_service::{CharacterService, ServiceContext, ServiceError};

use super::command::{character_list, sheet};
use super::HandlerResult;
use crate::custom_id::{CharacterAction, ComponentId};
use crate::render;
use crate::reply::Reply;

/// Handles message components
pub struct ComponentHandler;

impl ComponentHandler {
    /// Handle a button click
    pub async fn button(ctx: &ServiceContext, owner: &User, custom_id: &str) -> HandlerResult<Reply> {
        let id = ComponentId::parse(custom_id);
        let Some(action) = CharacterAction::from_component(&id) else {
            return Ok(not_implemented(id.scope));
        };

        let service = CharacterService::new(ctx);
        let reply = match action {
            CharacterAction::Create => Reply::text(message("tip.character_creation")),
            CharacterAction::RefreshList => character_list(ctx, owner.id).await?,
            CharacterAction::View(character_id) => {
                let details = service
                    .get_character_details(character_id, owner.id)
                    .await
                    .map_err(|e| from_button(e, custom_id))?;
                sheet(&details)
            }
            CharacterAction::Delete(character_id) => {
                let details = service
                    .get_character_details(character_id, owner.id)
                    .await
                    .map_err(|e| from_button(e, custom_id))?;
                render::delete_confirmation(&details.character)
            }
            CharacterAction::DeleteConfirm(character_id) => {
                let result = service
                    .delete_character(character_id, owner.id)
                    .await
                    .map_err(|e| from_button(e, custom_id))?;
                Reply::text(result.message)
            }
            CharacterAction::DeleteCancel => Reply::text(message("confirm.cancel")),
            // The edit modal is not built yet
            CharacterAction::Edit(_) => not_implemented(id.scope),
        };
        Ok(reply)
    }

    pub fn select_menu(custom_id: &str, values: &[String]) -> Reply {
        tracing::debug!(custom_id, ?values, "Select menu without handler");
        Reply::text(get_message(
            "select.not_implemented",
            &MessageVars::new().with("menu", custom_id),
        ))
    }

    pub fn modal_submit(custom_id: &str) -> Reply {
        tracing::debug!(custom_id, "Modal without handler");
        Reply::text(get_message(
            "modal.not_implemented",
            &MessageVars::new().with("modal", custom_id),
        ))
    }
}

fn not_implemented(scope: &str) -> Reply {
    Reply::text(get_message(
        "button.not_implemented",
        &MessageVars::new().with("action", scope),
    ))
}

/// Record the button that led to a missing character
fn from_button(err: ServiceError, custom_id: &str) -> ServiceError {
    match err {
        ServiceError::CharacterNotFound(e) => CharacterNotFoundError::from_component(
            e.character_id(),
            e.user_id(),
            ComponentType::Button,
            custom_id,
        )
        .into(),
        other => other,
    }
}
