//! Embedded schema migrations
//!
//! Scripts are compiled into the binary and applied through sqlx's
//! [`Migrator`], which records them in `_sqlx_migrations` and holds a
//! PostgreSQL advisory lock while running, so concurrent startups apply each
//! version once.

use std::borrow::Cow;
use std::future::Future;
use std::pin::Pin;

use sqlx::error::BoxDynError;
use sqlx::migrate::{MigrateError, Migration, MigrationSource, MigrationType, Migrator};
use sqlx::PgPool;
use tracing::{info, instrument};

/// `(version, description, sql)` in application order
const MIGRATIONS: &[(i64, &str, &str)] = &[(
    1,
    "create users and characters",
    include_str!("../migrations/0001_create_users_and_characters.sql"),
)];

/// Migration source backed by [`MIGRATIONS`]
#[derive(Debug, Clone, Copy)]
struct EmbeddedMigrations;

impl<'s> MigrationSource<'s> for EmbeddedMigrations {
    fn resolve(self) -> Pin<Box<dyn Future<Output = Result<Vec<Migration>, BoxDynError>> + Send + 's>> {
        Box::pin(async move {
            Ok(MIGRATIONS
                .iter()
                .map(|&(version, description, sql)| {
                    Migration::new(
                        version,
                        Cow::Borrowed(description),
                        MigrationType::Simple,
                        Cow::Borrowed(sql),
                        false,
                    )
                })
                .collect())
        })
    }
}

/// Apply every migration not yet recorded
#[instrument(skip(pool))]
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    let migrator = Migrator::new(EmbeddedMigrations).await?;
    migrator.run(pool).await?;

    info!(latest = MIGRATIONS.len(), "Database schema up to date");
    Ok(())
}
