//! Test helpers for integration tests
//!
//! Provides a router-backed test bot, reply assertions and environment checks.

use std::sync::Arc;

use anyhow::Result;
use horacio_bot::{CommandOption, Interaction, InteractionRouter, Reply};
use horacio_common::{get_message, MessageVars};
use horacio_db::{
    create_pool, run_migrations, InMemoryStore, PgCharacterRepository, PgUserRepository,
    PoolConfig,
};
use horacio_service::ServiceContext;

use crate::fixtures::{unique_suffix, TestUser};

/// Router wired to a storage backend
pub struct TestBot {
    pub router: InteractionRouter,
    /// Present when running against the in-memory store
    pub store: Option<Arc<InMemoryStore>>,
}

impl TestBot {
    /// Bot backed by the in-memory store
    pub fn in_memory() -> Self {
        let store = Arc::new(InMemoryStore::new());
        let ctx = ServiceContext::new(store.clone(), store.clone());
        Self {
            router: InteractionRouter::new(ctx),
            store: Some(store),
        }
    }

    /// Bot backed by PostgreSQL at `DATABASE_URL`, with migrations applied
    pub async fn postgres() -> Result<Self> {
        dotenvy::dotenv().ok();
        let url = std::env::var("DATABASE_URL")?;
        let pool = create_pool(&PoolConfig {
            url,
            max_connections: 5,
            ..Default::default()
        })
        .await?;
        run_migrations(&pool).await?;

        let ctx = ServiceContext::new(
            Arc::new(PgCharacterRepository::new(pool.clone())),
            Arc::new(PgUserRepository::new(pool)),
        );
        Ok(Self {
            router: InteractionRouter::new(ctx),
            store: None,
        })
    }

    pub fn context(&self) -> &ServiceContext {
        self.router.context()
    }

    /// Run a slash command as `user`
    pub async fn command(
        &self,
        user: &TestUser,
        name: &str,
        options: Vec<(String, CommandOption)>,
    ) -> Reply {
        let interaction =
            Interaction::command(unique_suffix().to_string(), user.invoker(), name, options);
        self.router.handle(&interaction).await
    }

    /// Click a button as `user`
    pub async fn click(&self, user: &TestUser, custom_id: &str) -> Reply {
        let interaction = Interaction::button(unique_suffix().to_string(), user.invoker(), custom_id);
        self.router.handle(&interaction).await
    }
}

/// Helper to check if the PostgreSQL test environment is available
pub fn check_test_env() -> bool {
    dotenvy::dotenv().ok();
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }
    true
}

/// Catalog text for `key` with a single variable
pub fn text_with(key: &str, name: &str, value: &str) -> String {
    get_message(key, &MessageVars::new().with(name, value))
}

/// Custom id of the button labelled `label`
pub fn button_id(reply: &Reply, label: &str) -> Option<String> {
    reply
        .buttons()
        .find(|b| b.label == label)
        .map(|b| b.custom_id.clone())
}
