//! Embeds and buttons for character replies

use horacio_common::{get_message, message, MessageVars};
use horacio_core::entities::{Ability, Character, CharacterWithOwner};

use crate::custom_id::{CharacterAction, ROLL_D20};
use crate::reply::{ActionRow, Button, ButtonStyle, Embed, Reply};

/// Discord limit for an embed field value
pub const FIELD_VALUE_LIMIT: usize = 1024;

/// Characters shown in the list view
pub const LIST_PAGE_SIZE: usize = 10;

/// Zero-width space used for the spacer field
const BLANK: &str = "\u{200B}";

/// `floor((score - 10) / 2)`, with an explicit sign
pub fn ability_modifier(score: i64) -> String {
    let modifier = (score - 10).div_euclid(2);
    if modifier >= 0 {
        format!("+{modifier}")
    } else {
        modifier.to_string()
    }
}

/// Catalog key for the health status of `current` out of `max` hit points
pub fn health_status_key(current: i64, max: i64) -> &'static str {
    if max <= 0 {
        return if current <= 0 { "health.dead" } else { "health.healthy" };
    }

    let percentage = current as f64 / max as f64 * 100.0;
    if percentage <= 0.0 {
        "health.dead"
    } else if percentage <= 25.0 {
        "health.critical"
    } else if percentage <= 50.0 {
        "health.wounded"
    } else if percentage <= 75.0 {
        "health.hurt"
    } else {
        "health.healthy"
    }
}

/// Shorten a description to fit one embed field
pub fn truncate_description(description: &str) -> String {
    if description.chars().count() <= FIELD_VALUE_LIMIT {
        return description.to_string();
    }
    let kept: String = description.chars().take(FIELD_VALUE_LIMIT - 3).collect();
    format!("{kept}...")
}

fn ability_lines(character: &Character, abilities: &[(Ability, &str)]) -> String {
    abilities
        .iter()
        .map(|&(ability, label)| {
            let score = character.ability_score(ability);
            format!("**{label}:** {score} ({})", ability_modifier(score))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full character sheet with its action buttons
pub fn character_sheet(details: &CharacterWithOwner) -> Reply {
    let character = &details.character;
    let (current, max) = character.hit_points();
    let yes_no = if character.is_public { "common.yes" } else { "common.no" };

    let basic_info = get_message(
        "embed.basic_info",
        &MessageVars::new()
            .with("system", &character.system)
            .with("level", character.level)
            .with("experience", character.experience)
            .with("public", message(yes_no)),
    );
    let hit_points = get_message(
        "embed.hit_points",
        &MessageVars::new()
            .with("current", current)
            .with("max", max)
            .with("status", message(health_status_key(current, max))),
    );

    let mut embed = Embed::new(get_message(
        "embed.character_sheet_title",
        &MessageVars::new().with("name", &character.name),
    ))
    .footer(message("embed.footer"))
    .timestamp(character.updated_at)
    .field(message("embed.field_basic_info"), basic_info, true)
    .field(message("embed.field_hit_points"), hit_points, true)
    .field(BLANK, BLANK, false)
    .field(
        message("embed.field_physical"),
        ability_lines(
            character,
            &[(Ability::Strength, "FOR"), (Ability::Dexterity, "DES"), (Ability::Constitution, "CON")],
        ),
        true,
    )
    .field(
        message("embed.field_mental"),
        ability_lines(
            character,
            &[(Ability::Intelligence, "INT"), (Ability::Wisdom, "SAB"), (Ability::Charisma, "CAR")],
        ),
        true,
    );

    if let Some(description) = character.description.as_deref().filter(|d| !d.is_empty()) {
        embed = embed.field(
            message("embed.field_description"),
            truncate_description(description),
            false,
        );
    }

    Reply::embed(embed).with_row(ActionRow::new(vec![
        Button::new(
            CharacterAction::Edit(character.id).to_string(),
            message("button.edit_character"),
            ButtonStyle::Secondary,
        ),
        Button::new(
            CharacterAction::Delete(character.id).to_string(),
            message("button.delete_character"),
            ButtonStyle::Danger,
        ),
        Button::new(ROLL_D20, message("button.roll_dice"), ButtonStyle::Primary),
    ]))
}

/// List of the first characters with create/refresh buttons
///
/// `total` is the full count; a note is added when only part of it is shown.
pub fn character_list(characters: &[Character], total: i64) -> Reply {
    if characters.is_empty() {
        return Reply::text(message("character.list_empty"));
    }

    let mut embed = Embed::new(message("embed.character_list_title"))
        .footer(message("embed.footer"))
        .timestamp(chrono::Utc::now());

    for character in characters.iter().take(LIST_PAGE_SIZE) {
        let (current, max) = character.hit_points();
        let entry = get_message(
            "embed.list_entry",
            &MessageVars::new()
                .with("system", &character.system)
                .with("level", character.level)
                .with("current", current)
                .with("max", max)
                .with("experience", character.experience),
        );
        embed = embed.field(format!("🎭 {}", character.name), entry, true);
    }

    let shown = characters.len().min(LIST_PAGE_SIZE);
    if total > shown as i64 {
        embed = embed.description(get_message(
            "character.list_truncated",
            &MessageVars::new().with("shown", shown).with("total", total),
        ));
    }

    Reply::embed(embed).with_row(ActionRow::new(vec![
        Button::new(
            CharacterAction::Create.to_string(),
            message("button.create_character"),
            ButtonStyle::Primary,
        ),
        Button::new(
            CharacterAction::RefreshList.to_string(),
            message("button.refresh_list"),
            ButtonStyle::Secondary,
        ),
    ]))
}

/// Yes/no prompt before deleting a character
pub fn delete_confirmation(character: &Character) -> Reply {
    Reply::text(get_message(
        "confirm.delete_character",
        &MessageVars::new().with("name", &character.name),
    ))
    .with_row(ActionRow::new(vec![
        Button::new(
            CharacterAction::DeleteConfirm(character.id).to_string(),
            message("confirm.yes"),
            ButtonStyle::Danger,
        ),
        Button::new(
            CharacterAction::DeleteCancel.to_string(),
            message("confirm.no"),
            ButtonStyle::Secondary,
        ),
    ]))
}
