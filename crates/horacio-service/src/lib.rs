//! # horacio-service
//!
//! Application layer containing the character rules, services, and DTOs.
//! Services borrow a [`ServiceContext`] and know nothing about Discord.

pub mod dto;
pub mod services;

pub use dto::{CharacterOperationResult, CreateCharacterInput, UpdateCharacterInput};
pub use services::{CharacterService, ServiceContext, ServiceError, ServiceResult, UserService};
