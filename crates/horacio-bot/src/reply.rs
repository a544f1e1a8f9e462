//! Platform-neutral reply model

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Theme colour of every embed (purple)
pub const BARD_COLOR: u32 = 0x009b_59b6;

/// Response to an interaction
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Reply {
    pub content: Option<String>,
    pub embeds: Vec<Embed>,
    pub components: Vec<ActionRow>,
    /// Visible only to the invoker
    pub ephemeral: bool,
}

impl Reply {
    /// Ephemeral text reply
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ephemeral: true,
            ..Self::default()
        }
    }

    /// Ephemeral reply carrying a single embed
    #[must_use]
    pub fn embed(embed: Embed) -> Self {
        Self {
            embeds: vec![embed],
            ephemeral: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    #[must_use]
    pub fn with_row(mut self, row: ActionRow) -> Self {
        self.components.push(row);
        self
    }

    /// Every button across all rows
    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.components.iter().flat_map(|row| row.buttons.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Embed {
    pub title: Option<String>,
    pub description: Option<String>,
    pub color: Option<u32>,
    pub fields: Vec<EmbedField>,
    pub footer: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
}

impl Embed {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            color: Some(BARD_COLOR),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    #[must_use]
    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    #[must_use]
    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Find a field by its name
    pub fn field_named(&self, name: &str) -> Option<&EmbedField> {
        self.fields.iter().find(|f| f.name == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    Primary,
    Secondary,
    Success,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Button {
    pub custom_id: String,
    pub label: String,
    pub style: ButtonStyle,
}

impl Button {
    #[must_use]
    pub fn new(custom_id: impl Into<String>, label: impl Into<String>, style: ButtonStyle) -> Self {
        Self {
            custom_id: custom_id.into(),
            label: label.into(),
            style,
        }
    }
}

/// Row of up to five buttons
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActionRow {
    pub buttons: Vec<Button>,
}

impl ActionRow {
    pub const MAX_BUTTONS: usize = 5;

    #[must_use]
    pub fn new(buttons: Vec<Button>) -> Self {
        debug_assert!(buttons.len() <= Self::MAX_BUTTONS);
        Self { buttons }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_reply_is_ephemeral() {
        let reply = Reply::text("olá");
        assert!(reply.ephemeral);
        assert_eq!(reply.content.as_deref(), Some("olá"));
        assert!(reply.embeds.is_empty());
    }

    #[test]
    fn test_embed_builder() {
        let embed = Embed::new("Título")
            .description("desc")
            .field("A", "1", true)
            .field("B", "2", false)
            .footer("rodapé");

        assert_eq!(embed.color, Some(BARD_COLOR));
        assert_eq!(embed.fields.len(), 2);
        assert_eq!(embed.field_named("B").map(|f| f.inline), Some(false));
        assert!(embed.field_named("C").is_none());
    }

    #[test]
    fn test_buttons_across_rows() {
        let reply = Reply::text("x")
            .with_row(ActionRow::new(vec![Button::new("a:b", "A", ButtonStyle::Primary)]))
            .with_row(ActionRow::new(vec![Button::new("c:d", "C", ButtonStyle::Danger)]));

        let ids: Vec<&str> = reply.buttons().map(|b| b.custom_id.as_str()).collect();
        assert_eq!(ids, ["a:b", "c:d"]);
    }
}
