//! # horacio-db
//!
//! Database layer implementing the repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides the storage side of the character sheets. It handles:
//!
//! - Connection pool management
//! - Embedded, idempotent schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations (PostgreSQL and in-memory)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use horacio_db::{create_pool, run_migrations, PgCharacterRepository, PoolConfig};
//! use horacio_core::traits::CharacterRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&PoolConfig::default()).await?;
//!     run_migrations(&pool).await?;
//!     let characters = PgCharacterRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod migrations;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use migrations::run_migrations;
pub use pool::{create_pool, PgPool, PoolConfig};
pub use repositories::{InMemoryStore, PgCharacterRepository, PgUserRepository};
