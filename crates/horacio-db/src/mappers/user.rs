//! User entity <-> model mapper

use horacio_core::entities::User;
use horacio_core::value_objects::Snowflake;

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Snowflake::new(model.id),
            username: model.username,
            global_name: model.global_name,
            avatar: model.avatar,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Values bound when upserting a profile
pub struct UserUpsert<'a> {
    pub id: i64,
    pub username: &'a str,
    pub global_name: Option<&'a str>,
    pub avatar: Option<&'a str>,
}

impl<'a> UserUpsert<'a> {
    pub fn new(user: &'a User) -> Self {
        Self {
            id: user.id.into_inner(),
            username: &user.username,
            global_name: user.global_name.as_deref(),
            avatar: user.avatar.as_deref(),
        }
    }
}
