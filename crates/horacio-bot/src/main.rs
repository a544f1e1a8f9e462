//! Horácio bot entry point
//!
//! Run with:
//! ```bash
//! cargo run -p horacio-bot
//! ```
//!
//! Configuration is loaded from environment variables (and `.env`).

use horacio_common::{try_init_tracing, try_init_tracing_with_config, BotConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match BotConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            if let Err(e) = try_init_tracing() {
                eprintln!("Warning: Failed to initialize tracing: {e}");
            }
            error!(error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing_with_config(&TracingConfig::for_settings(&config.app)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run(config).await {
        error!(error = ?e, "Bot failed");
        std::process::exit(1);
    }
}

async fn run(config: BotConfig) -> anyhow::Result<()> {
    info!(
        app = %config.app.name,
        env = ?config.app.env,
        dev_guild = ?config.discord.dev_guild_id,
        "Starting Horácio..."
    );

    horacio_bot::server::run(config).await
}
