//! Bot setup and startup
//!
//! Wires the repositories into the service context and runs the Discord client.

use std::sync::Arc;

use anyhow::Context as _;
use horacio_common::BotConfig;
use horacio_db::{create_pool, run_migrations, PgCharacterRepository, PgUserRepository, PoolConfig};
use horacio_service::ServiceContext;
use serenity::all::{Client, GatewayIntents};
use tracing::{info, warn};

use crate::discord::DiscordHandler;
use crate::handlers::InteractionRouter;

/// Connect to PostgreSQL, apply migrations and build the service context
pub async fn create_service_context(config: &BotConfig) -> anyhow::Result<ServiceContext> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&PoolConfig::from(&config.database))
        .await
        .context("failed to connect to PostgreSQL")?;
    info!("PostgreSQL connection established");

    run_migrations(&pool)
        .await
        .context("failed to run database migrations")?;

    let character_repo = Arc::new(PgCharacterRepository::new(pool.clone()));
    let user_repo = Arc::new(PgUserRepository::new(pool));

    Ok(ServiceContext::new(character_repo, user_repo))
}

/// Run the bot until the gateway closes or a shutdown signal arrives
pub async fn run(config: BotConfig) -> anyhow::Result<()> {
    let ctx = create_service_context(&config).await?;
    let handler = DiscordHandler::new(InteractionRouter::new(ctx), config.discord.dev_guild_id);

    let mut client = Client::builder(&config.discord.token, GatewayIntents::GUILDS)
        .event_handler(handler)
        .await
        .context("failed to create Discord client")?;

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        info!("Shutdown signal received");
        shard_manager.shutdown_all().await;
    });

    info!("Connecting to the Discord gateway...");
    client.start().await.context("Discord client stopped with an error")?;

    info!("Bot stopped");
    Ok(())
}

/// Resolves on Ctrl+C, or on SIGTERM where available
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
