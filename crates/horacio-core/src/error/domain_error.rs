//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
///
/// Absence of a record is never an error at this layer; repositories return
/// `Option`/`bool` for that. What remains are rule conflicts detected by
/// storage and infrastructure failures.
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Character name already in use by this owner: {name}")]
    CharacterNameTaken { name: String },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for logs and error records
    pub fn code(&self) -> &'static str {
        match self {
            Self::CharacterNameTaken { .. } => "CHARACTER_NAME_TAKEN",
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::CharacterNameTaken { .. })
    }

    /// Check if this is an infrastructure failure
    pub fn is_infrastructure(&self) -> bool {
        matches!(self, Self::DatabaseError(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::CharacterNameTaken {
            name: "Aragorn".to_string(),
        };
        assert_eq!(err.code(), "CHARACTER_NAME_TAKEN");

        let err = DomainError::DatabaseError("connection reset".to_string());
        assert_eq!(err.code(), "DATABASE_ERROR");
    }

    #[test]
    fn test_classification() {
        let conflict = DomainError::CharacterNameTaken {
            name: "Aragorn".to_string(),
        };
        assert!(conflict.is_conflict());
        assert!(!conflict.is_infrastructure());

        let db = DomainError::DatabaseError("timeout".to_string());
        assert!(db.is_infrastructure());
        assert!(!db.is_conflict());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::DatabaseError("pool timed out".to_string());
        assert_eq!(err.to_string(), "Database error: pool timed out");

        let err = DomainError::CharacterNameTaken {
            name: "Legolas".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Character name already in use by this owner: Legolas"
        );
    }
}
