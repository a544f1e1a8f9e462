//! Handler error types

use horacio_common::{message, AppError, CharacterNotFoundError};
use horacio_core::DomainError;
use horacio_service::ServiceError;
use serde_json::{json, Value};
use thiserror::Error;

use crate::reply::Reply;

/// Handler error type
#[derive(Debug, Error)]
pub enum HandlerError {
    /// A required command option was not sent
    #[error("Missing option: {0}")]
    MissingOption(&'static str),

    /// Service error
    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl HandlerError {
    /// Whether the user may see the underlying message
    pub fn is_user_facing(&self) -> bool {
        match self {
            Self::MissingOption(_) => true,
            Self::Service(e) => e.is_user_facing(),
        }
    }

    /// Ephemeral reply for this error
    pub fn to_reply(&self) -> Reply {
        match self {
            Self::MissingOption(_) => Reply::text(message("command.invalid")),
            Self::Service(e) => Reply::text(e.user_message()),
        }
    }

    /// Structured record for logs
    pub fn to_json(&self) -> Value {
        match self {
            Self::MissingOption(option) => json!({
                "name": "HandlerError",
                "message": self.to_string(),
                "option": option,
                "isUserFacing": true,
            }),
            Self::Service(e) => e.to_json(),
        }
    }
}

impl From<DomainError> for HandlerError {
    fn from(err: DomainError) -> Self {
        Self::Service(err.into())
    }
}

impl From<AppError> for HandlerError {
    fn from(err: AppError) -> Self {
        Self::Service(err.into())
    }
}

impl From<CharacterNotFoundError> for HandlerError {
    fn from(err: CharacterNotFoundError) -> Self {
        Self::Service(err.into())
    }
}

/// Handler result type
pub type HandlerResult<T> = Result<T, HandlerError>;
