//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use horacio_common::{message, AppError, CharacterNotFoundError, ErrorKind, Severity};
use horacio_core::DomainError;
use serde_json::{json, Value};

/// Service layer error type
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Storage failure or storage-level rule violation
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Validation, permission and other application errors
    #[error(transparent)]
    App(#[from] AppError),

    /// The requested character does not exist
    #[error(transparent)]
    CharacterNotFound(#[from] CharacterNotFoundError),
}

impl ServiceError {
    /// Error category
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(_) => ErrorKind::Internal,
            Self::App(e) => e.kind(),
            Self::CharacterNotFound(e) => e.as_app_error().kind(),
        }
    }

    /// Stable error code
    pub fn code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::App(e) => e.code(),
            Self::CharacterNotFound(e) => e.as_app_error().code(),
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Self::Domain(_) => Severity::High,
            Self::App(e) => e.severity(),
            Self::CharacterNotFound(e) => e.as_app_error().severity(),
        }
    }

    /// Whether the message may be shown to the user verbatim
    pub fn is_user_facing(&self) -> bool {
        match self {
            Self::Domain(_) => false,
            Self::App(e) => e.is_user_facing(),
            Self::CharacterNotFound(e) => e.as_app_error().is_user_facing(),
        }
    }

    /// Text to show the user: the message itself when user facing, the
    /// generic error otherwise
    pub fn user_message(&self) -> String {
        if !self.is_user_facing() {
            return message("error.generic");
        }
        match self {
            Self::Domain(_) => message("error.generic"),
            Self::App(e) => e.message().to_string(),
            Self::CharacterNotFound(e) => e.message().to_string(),
        }
    }

    /// Structured record for logs
    pub fn to_json(&self) -> Value {
        match self {
            Self::Domain(e) => json!({
                "name": "DomainError",
                "message": e.to_string(),
                "type": ErrorKind::Internal,
                "code": e.code(),
                "severity": Severity::High,
                "isUserFacing": false,
            }),
            Self::App(e) => e.to_json(),
            Self::CharacterNotFound(e) => e.to_json(),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
