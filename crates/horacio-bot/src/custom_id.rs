//! Component custom ids
//!
//! Buttons carry `scope:action[:arg]`. Character buttons are parsed into
//! [`CharacterAction`]; anything else stays a raw [`ComponentId`].

use std::fmt;

use horacio_core::value_objects::CharacterId;

const SEPARATOR: char = ':';

/// Split form of a custom id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentId<'a> {
    pub scope: &'a str,
    pub action: Option<&'a str>,
    pub arg: Option<&'a str>,
}

impl<'a> ComponentId<'a> {
    /// Split on the first two separators; the argument keeps any further ones
    #[must_use]
    pub fn parse(raw: &'a str) -> Self {
        let mut parts = raw.splitn(3, SEPARATOR);
        Self {
            scope: parts.next().unwrap_or_default(),
            action: parts.next(),
            arg: parts.next(),
        }
    }
}

/// Known `character:*` buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterAction {
    Create,
    RefreshList,
    View(CharacterId),
    Edit(CharacterId),
    Delete(CharacterId),
    DeleteConfirm(CharacterId),
    DeleteCancel,
}

impl CharacterAction {
    pub const SCOPE: &'static str = "character";

    /// Parse a component id in the character scope
    ///
    /// Returns `None` for other scopes, unknown actions and malformed ids.
    #[must_use]
    pub fn from_component(id: &ComponentId<'_>) -> Option<Self> {
        if id.scope != Self::SCOPE {
            return None;
        }
        let character = || id.arg.and_then(|arg| CharacterId::parse(arg).ok());

        match (id.action?, id.arg) {
            ("create", None) => Some(Self::Create),
            ("list", Some("refresh")) => Some(Self::RefreshList),
            ("view", _) => character().map(Self::View),
            ("edit", _) => character().map(Self::Edit),
            ("delete", _) => character().map(Self::Delete),
            ("delete-confirm", _) => character().map(Self::DeleteConfirm),
            ("delete-cancel", None) => Some(Self::DeleteCancel),
            _ => None,
        }
    }
}

impl fmt::Display for CharacterAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = Self::SCOPE;
        match self {
            Self::Create => write!(f, "{scope}:create"),
            Self::RefreshList => write!(f, "{scope}:list:refresh"),
            Self::View(id) => write!(f, "{scope}:view:{id}"),
            Self::Edit(id) => write!(f, "{scope}:edit:{id}"),
            Self::Delete(id) => write!(f, "{scope}:delete:{id}"),
            Self::DeleteConfirm(id) => write!(f, "{scope}:delete-confirm:{id}"),
            Self::DeleteCancel => write!(f, "{scope}:delete-cancel"),
        }
    }
}

/// Custom id of the dice button on the character sheet
pub const ROLL_D20: &str = "dice:roll:1d20";
