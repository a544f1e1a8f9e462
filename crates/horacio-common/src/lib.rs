//! # horacio-common
//!
//! Shared utilities: the user-facing message catalog, the error taxonomy,
//! configuration, and telemetry.

pub mod config;
pub mod content;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{
    AppSettings, BotConfig, ConfigError, DatabaseConfig, DiscordConfig, Environment, LogFormat,
};
pub use content::{get_error_message, get_message, has_message, message, MessageVars};
pub use error::{
    AppError, AppErrorBuilder, AppResult, CharacterNotFoundError, ComponentType, ErrorContext,
    ErrorKind, Severity,
};
pub use telemetry::{
    init_tracing, init_tracing_with_config, try_init_tracing, try_init_tracing_with_config,
    TracingConfig, TracingError,
};
