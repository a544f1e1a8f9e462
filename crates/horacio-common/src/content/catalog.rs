//! Message lookup and `{{var}}` interpolation

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::OnceLock;

use super::messages::MESSAGES;

static INDEX: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

fn index() -> &'static HashMap<&'static str, &'static str> {
    INDEX.get_or_init(|| MESSAGES.iter().copied().collect())
}

/// Ordered bag of interpolation variables
///
/// A variable set to `None` behaves as explicitly null: its placeholder is
/// left in the output untouched, exactly like a variable that was never set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageVars {
    entries: Vec<(String, Option<String>)>,
}

impl MessageVars {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable; a later value for the same name replaces the earlier one
    #[must_use]
    pub fn with(self, name: impl Into<String>, value: impl fmt::Display) -> Self {
        self.with_opt(name, Some(value))
    }

    /// Set a variable that may be null
    #[must_use]
    pub fn with_opt<V: fmt::Display>(mut self, name: impl Into<String>, value: Option<V>) -> Self {
        let name = name.into();
        let value = value.map(|v| v.to_string());
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
        self
    }

    /// Resolved value of a variable; `None` when absent or null
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .and_then(|(_, v)| v.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Look up a message by key and interpolate `vars` into it
///
/// Unknown keys never fail; they yield `[MENSAGEM NÃO ENCONTRADA: <key>]`.
pub fn get_message(key: &str, vars: &MessageVars) -> String {
    match index().get(key) {
        Some(template) if vars.is_empty() => (*template).to_string(),
        Some(template) => interpolate(template, vars),
        None => format!("[MENSAGEM NÃO ENCONTRADA: {key}]"),
    }
}

/// Look up a message that takes no variables
pub fn message(key: &str) -> String {
    get_message(key, &MessageVars::new())
}

/// Look up several messages at once, applying the same variables to each
pub fn get_messages(keys: &[&str], vars: &MessageVars) -> BTreeMap<String, String> {
    keys.iter()
        .map(|key| ((*key).to_string(), get_message(key, vars)))
        .collect()
}

/// Check whether a key exists in the catalog
pub fn has_message(key: &str) -> bool {
    index().contains_key(key)
}

/// Every catalog key, in declaration order
pub fn all_message_keys() -> Vec<&'static str> {
    MESSAGES.iter().map(|(key, _)| *key).collect()
}

/// Resolve an error message
///
/// `error` is first tried as the suffix of an `error.*` key. Otherwise it is
/// treated as a literal message, interpolated only when `vars` is given.
pub fn get_error_message(error: &str, vars: Option<&MessageVars>) -> String {
    let key = format!("error.{error}");
    if has_message(&key) {
        return match vars {
            Some(vars) => get_message(&key, vars),
            None => message(&key),
        };
    }

    match vars {
        Some(vars) => interpolate(error, vars),
        None => error.to_string(),
    }
}

/// Replace every `{{identifier}}` token whose variable is set
///
/// Identifiers are ASCII letters, digits and underscores. Tokens naming an
/// absent or null variable are kept verbatim.
pub fn interpolate(template: &str, vars: &MessageVars) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];

        let ident_len = after_open
            .bytes()
            .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
            .count();
        let ident = &after_open[..ident_len];

        if ident_len > 0 && after_open[ident_len..].starts_with("}}") {
            let token_len = 2 + ident_len + 2;
            match vars.get(ident) {
                Some(value) => out.push_str(value),
                None => out.push_str(&rest[start..start + token_len]),
            }
            rest = &rest[start + token_len..];
        } else {
            // Not a token here; a match may still begin at the next brace
            out.push('{');
            rest = &rest[start + 1..];
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_key_without_vars() {
        assert_eq!(
            message("bot.welcome"),
            "🎭 Olá, aventureiro! Eu sou Horácio, seu Bardo pessoal! ✨"
        );
    }

    #[test]
    fn test_unknown_key_fails_soft() {
        assert_eq!(
            message("nao.existe"),
            "[MENSAGEM NÃO ENCONTRADA: nao.existe]"
        );
    }

    #[test]
    fn test_interpolation() {
        let text = get_message("character.created", &MessageVars::new().with("name", "Aragorn"));
        assert_eq!(
            text,
            "🎵 Magnífico! Um novo herói nasceu! Aragorn está pronto para grandes aventuras! 🎭✨"
        );
    }

    #[test]
    fn test_missing_variable_keeps_placeholder() {
        let text = get_message("character.created", &MessageVars::new().with("other", 1));
        assert!(text.contains("{{name}}"));
    }

    #[test]
    fn test_null_variable_keeps_placeholder() {
        let vars = MessageVars::new().with_opt::<&str>("name", None);
        let text = get_message("character.created", &vars);
        assert!(text.contains("{{name}}"));
    }

    #[test]
    fn test_numbers_render_in_decimal() {
        let vars = MessageVars::new()
            .with("user", "Frodo")
            .with("dice", "1d20")
            .with("result", 17);
        assert_eq!(
            get_message("dice.roll_success", &vars),
            "🎲 Frodo rolou 1d20: **17** 🎭✨"
        );
    }

    #[test]
    fn test_interpolate_edge_tokens() {
        let vars = MessageVars::new().with("a", "X");
        assert_eq!(interpolate("{{a}}{{a}}", &vars), "XX");
        assert_eq!(interpolate("{{{a}}}", &vars), "{X}");
        assert_eq!(interpolate("{{ a }}", &vars), "{{ a }}");
        assert_eq!(interpolate("{{}}", &vars), "{{}}");
        assert_eq!(interpolate("{{a-b}}", &vars), "{{a-b}}");
        assert_eq!(interpolate("sem tokens", &vars), "sem tokens");
        assert_eq!(interpolate("{{a", &vars), "{{a");
    }

    #[test]
    fn test_later_value_replaces_earlier() {
        let vars = MessageVars::new().with("a", 1).with("a", 2);
        assert_eq!(vars.len(), 1);
        assert_eq!(vars.get("a"), Some("2"));
    }

    #[test]
    fn test_get_messages_batch() {
        let vars = MessageVars::new().with("name", "Gimli");
        let batch = get_messages(&["confirm.delete_character", "confirm.yes"], &vars);
        assert_eq!(batch.len(), 2);
        assert_eq!(batch["confirm.yes"], "✅ Sim");
        assert!(batch["confirm.delete_character"].contains("Gimli"));
    }

    #[test]
    fn test_has_message_and_keys() {
        assert!(has_message("error.generic"));
        assert!(!has_message("error.nope"));

        let keys = all_message_keys();
        assert_eq!(keys.first(), Some(&"bot.welcome"));
        assert!(keys.contains(&"outro.dice_blessing"));
        assert_eq!(keys.len(), MESSAGES.len());
    }

    #[test]
    fn test_catalog_keys_are_unique() {
        let keys = all_message_keys();
        let unique: std::collections::HashSet<_> = keys.iter().collect();
        assert_eq!(unique.len(), keys.len());
    }

    #[test]
    fn test_error_message_known_kind() {
        assert_eq!(get_error_message("generic", None), message("error.generic"));
        assert_eq!(get_error_message("timeout", None), message("error.timeout"));
    }

    #[test]
    fn test_error_message_custom_text() {
        assert_eq!(get_error_message("Algo quebrou", None), "Algo quebrou");

        let vars = MessageVars::new().with("what", "a lira");
        assert_eq!(
            get_error_message("Quebrou {{what}}", Some(&vars)),
            "Quebrou a lira"
        );
        assert_eq!(get_error_message("Quebrou {{what}}", None), "Quebrou {{what}}");
    }
}
