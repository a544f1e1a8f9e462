//! User service
//!
//! Keeps the owner profiles mirrored from Discord up to date.

use horacio_core::entities::User;
use horacio_core::Snowflake;
use tracing::{debug, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Insert or refresh the profile of the user behind an interaction
    #[instrument(skip(self, profile), fields(user_id = %profile.id))]
    pub async fn register(&self, profile: &User) -> ServiceResult<User> {
        let stored = self.ctx.user_repo().upsert(profile).await?;
        debug!(username = %stored.username, "User profile registered");
        Ok(stored)
    }

    /// Get a stored profile
    #[instrument(skip(self))]
    pub async fn find_user(&self, user_id: Snowflake) -> ServiceResult<Option<User>> {
        Ok(self.ctx.user_repo().find_by_id(user_id).await?)
    }
}
