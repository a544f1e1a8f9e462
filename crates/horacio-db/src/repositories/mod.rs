//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in horacio-core,
//! plus an in-memory store with the same semantics for tests and local runs.

mod character;
mod error;
mod memory;
mod user;

pub use character::PgCharacterRepository;
pub use memory::InMemoryStore;
pub use user::PgUserRepository;
