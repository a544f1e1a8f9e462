//! Error taxonomy

mod app_error;
mod character_not_found;

pub use app_error::{AppError, AppErrorBuilder, AppResult, ErrorContext, ErrorKind, Severity};
pub use character_not_found::{CharacterNotFoundError, ComponentType};
