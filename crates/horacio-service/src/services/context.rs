//! Service context - dependency container for services
//!
//! Holds the repositories needed by services. Built once by the composition
//! root and shared by every interaction.

use std::sync::Arc;

use horacio_core::traits::{CharacterRepository, UserRepository};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    character_repo: Arc<dyn CharacterRepository>,
    user_repo: Arc<dyn UserRepository>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        character_repo: Arc<dyn CharacterRepository>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            character_repo,
            user_repo,
        }
    }

    // === Repositories ===

    /// Get the character repository
    pub fn character_repo(&self) -> &dyn CharacterRepository {
        self.character_repo.as_ref()
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .finish()
    }
}
