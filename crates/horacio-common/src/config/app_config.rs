//! Bot configuration
//!
//! Loads configuration from environment variables (and a `.env` file when present).

use serde::Deserialize;
use std::env;

/// Main bot configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    pub app: AppSettings,
    pub discord: DiscordConfig,
    pub database: DatabaseConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default)]
    pub env: Environment,
    /// Explicit log format; `None` picks one from the environment
    #[serde(default)]
    pub log_format: Option<LogFormat>,
}

impl AppSettings {
    /// Whether logs should be emitted as JSON
    pub fn json_logs(&self) -> bool {
        match self.log_format {
            Some(format) => format == LogFormat::Json,
            None => self.env.is_production(),
        }
    }
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "pretty" | "text" => Some(Self::Pretty),
            _ => None,
        }
    }
}

/// Discord gateway configuration
#[derive(Clone, Deserialize)]
pub struct DiscordConfig {
    pub token: String,
    /// Register slash commands in this guild only (fast propagation while developing)
    #[serde(default)]
    pub dev_guild_id: Option<u64>,
}

// Keep the token out of logs
impl std::fmt::Debug for DiscordConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscordConfig")
            .field("token", &"<redacted>")
            .field("dev_guild_id", &self.dev_guild_id)
            .finish()
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

// Default value functions
fn default_app_name() -> String {
    "horacio".to_string()
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

impl BotConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or malformed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::MissingVar(key))
        };

        let log_format = match lookup("LOG_FORMAT") {
            Some(raw) => Some(
                LogFormat::parse(&raw).ok_or(ConfigError::InvalidValue("LOG_FORMAT", raw))?,
            ),
            None => None,
        };

        let dev_guild_id = match lookup("DISCORD_DEV_GUILD_ID").filter(|v| !v.trim().is_empty()) {
            Some(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidValue("DISCORD_DEV_GUILD_ID", raw))?,
            ),
            None => None,
        };

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env: lookup("APP_ENV")
                    .as_deref()
                    .and_then(Environment::parse)
                    .unwrap_or_default(),
                log_format,
            },
            discord: DiscordConfig {
                token: required("DISCORD_TOKEN")?,
                dev_guild_id,
            },
            database: DatabaseConfig {
                url: required("DATABASE_URL")?,
                max_connections: lookup("DATABASE_MAX_CONNECTIONS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_max_connections),
                min_connections: lookup("DATABASE_MIN_CONNECTIONS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_min_connections),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_environment_is_production() {
        assert!(!Environment::Development.is_production());
        assert!(!Environment::Staging.is_production());
        assert!(Environment::Production.is_production());
    }

    #[test]
    fn test_environment_is_development() {
        assert!(Environment::Development.is_development());
        assert!(!Environment::Staging.is_development());
        assert!(!Environment::Production.is_development());
    }

    #[test]
    fn test_minimal_config() {
        let config = BotConfig::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "token"),
            ("DATABASE_URL", "postgres://localhost/horacio"),
        ]))
        .unwrap();

        assert_eq!(config.app.name, "horacio");
        assert_eq!(config.app.env, Environment::Development);
        assert!(!config.app.json_logs());
        assert_eq!(config.discord.dev_guild_id, None);
        assert_eq!(config.database.max_connections, 10);
        assert_eq!(config.database.min_connections, 1);
    }

    #[test]
    fn test_missing_token() {
        let err = BotConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://x")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("DISCORD_TOKEN")));
    }

    #[test]
    fn test_blank_database_url_is_missing() {
        let err = BotConfig::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "token"),
            ("DATABASE_URL", "  "),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("DATABASE_URL")));
    }

    #[test]
    fn test_optional_values() {
        let config = BotConfig::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "token"),
            ("DATABASE_URL", "postgres://x"),
            ("DISCORD_DEV_GUILD_ID", "123456789012345678"),
            ("APP_ENV", "Production"),
            ("DATABASE_MAX_CONNECTIONS", "25"),
        ]))
        .unwrap();

        assert_eq!(config.discord.dev_guild_id, Some(123_456_789_012_345_678));
        assert!(config.app.env.is_production());
        assert!(config.app.json_logs());
        assert_eq!(config.database.max_connections, 25);
    }

    #[test]
    fn test_log_format_overrides_environment() {
        let config = BotConfig::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "token"),
            ("DATABASE_URL", "postgres://x"),
            ("APP_ENV", "production"),
            ("LOG_FORMAT", "pretty"),
        ]))
        .unwrap();
        assert!(!config.app.json_logs());
    }

    #[test]
    fn test_invalid_guild_id() {
        let err = BotConfig::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "token"),
            ("DATABASE_URL", "postgres://x"),
            ("DISCORD_DEV_GUILD_ID", "not-a-number"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue("DISCORD_DEV_GUILD_ID", _)));
    }

    #[test]
    fn test_token_is_redacted_in_debug() {
        let discord = DiscordConfig {
            token: "secret-token".to_string(),
            dev_guild_id: None,
        };
        assert!(!format!("{discord:?}").contains("secret-token"));
    }
}
