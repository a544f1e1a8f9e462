//! Configuration structs

mod app_config;

pub use app_config::{
    AppSettings, BotConfig, ConfigError, DatabaseConfig, DiscordConfig, Environment, LogFormat,
};
