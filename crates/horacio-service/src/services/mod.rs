//! Business logic services
//!
//! This module contains the service layer implementations that handle
//! validation, ownership rules and orchestration of repository calls.

pub mod character;
pub mod context;
pub mod error;
pub mod user;

// Re-export all services for convenience
pub use character::{default_attributes, experience_for_level, CharacterService, DEFAULT_SYSTEM};
pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use user::UserService;
