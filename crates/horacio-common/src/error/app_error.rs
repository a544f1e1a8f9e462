//! Application error types
//!
//! Unified, user-aware error record shared by every layer above the domain.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::panic::Location;

/// Extra key/value data attached to an error
pub type ErrorContext = BTreeMap<String, Value>;

/// Error category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    Validation,
    NotFound,
    PermissionDenied,
    BusinessLogic,
    ExternalService,
    Internal,
}

impl ErrorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "VALIDATION",
            Self::NotFound => "NOT_FOUND",
            Self::PermissionDenied => "PERMISSION_DENIED",
            Self::BusinessLogic => "BUSINESS_LOGIC",
            Self::ExternalService => "EXTERNAL_SERVICE",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error severity, totally ordered `Low < Medium < High < Critical`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application-wide error record
///
/// Immutable once built. `location` is the source position of the code that
/// constructed the error.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{name} [{code}]: {message}")]
pub struct AppError {
    name: &'static str,
    message: String,
    kind: ErrorKind,
    code: String,
    severity: Severity,
    user_facing: bool,
    context: ErrorContext,
    timestamp: DateTime<Utc>,
    location: &'static Location<'static>,
}

/// Builder for [`AppError`]
#[derive(Debug, Clone)]
#[must_use]
pub struct AppErrorBuilder {
    name: &'static str,
    message: String,
    kind: ErrorKind,
    code: String,
    severity: Severity,
    user_facing: bool,
    context: ErrorContext,
    location: &'static Location<'static>,
}

impl AppErrorBuilder {
    pub fn name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    pub fn kind(mut self, kind: ErrorKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn user_facing(mut self, user_facing: bool) -> Self {
        self.user_facing = user_facing;
        self
    }

    /// Replace the whole context map
    pub fn context(mut self, context: ErrorContext) -> Self {
        self.context = context;
        self
    }

    /// Add one context entry
    pub fn context_entry(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Add one context entry when the value is present
    pub fn context_opt<V: Into<Value>>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(v) => self.context_entry(key, v),
            None => self,
        }
    }

    pub fn build(self) -> AppError {
        AppError {
            name: self.name,
            message: self.message,
            kind: self.kind,
            code: self.code,
            severity: self.severity,
            user_facing: self.user_facing,
            context: self.context,
            timestamp: Utc::now(),
            location: self.location,
        }
    }
}

impl AppError {
    pub const NAME: &'static str = "AppError";
    pub const DEFAULT_CODE: &'static str = "UNKNOWN_ERROR";

    /// Start building an error; defaults are internal, `UNKNOWN_ERROR`, medium,
    /// not user-facing, empty context
    #[track_caller]
    pub fn builder(message: impl Into<String>) -> AppErrorBuilder {
        AppErrorBuilder {
            name: Self::NAME,
            message: message.into(),
            kind: ErrorKind::Internal,
            code: Self::DEFAULT_CODE.to_string(),
            severity: Severity::Medium,
            user_facing: false,
            context: ErrorContext::new(),
            location: Location::caller(),
        }
    }

    /// Invalid user input; low severity, shown to the user
    #[track_caller]
    pub fn validation(message: impl Into<String>, field: Option<&str>, value: Option<Value>) -> Self {
        Self::builder(message)
            .kind(ErrorKind::Validation)
            .code("VALIDATION_ERROR")
            .severity(Severity::Low)
            .user_facing(true)
            .context_opt("field", field)
            .context_opt("value", value)
            .build()
    }

    /// Missing resource
    #[track_caller]
    pub fn not_found(resource: &str, identifier: Option<&str>) -> Self {
        let message = match identifier {
            Some(id) => format!("{resource} não encontrado: {id}"),
            None => format!("{resource} não encontrado"),
        };
        Self::builder(message)
            .kind(ErrorKind::NotFound)
            .code("RESOURCE_NOT_FOUND")
            .severity(Severity::Low)
            .user_facing(true)
            .context_entry("resource", resource)
            .context_opt("identifier", identifier)
            .build()
    }

    /// The caller may not perform `action`
    #[track_caller]
    pub fn permission_denied(action: &str, resource: Option<&str>) -> Self {
        let message = match resource {
            Some(r) => format!("Permissão negada para {action} em {r}"),
            None => format!("Permissão negada para {action}"),
        };
        Self::builder(message)
            .kind(ErrorKind::PermissionDenied)
            .code("PERMISSION_DENIED")
            .severity(Severity::Medium)
            .user_facing(true)
            .context_entry("action", action)
            .context_opt("resource", resource)
            .build()
    }

    /// Rule violation the user can act upon
    #[track_caller]
    pub fn business_logic(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self::builder(message)
            .kind(ErrorKind::BusinessLogic)
            .code(code)
            .severity(Severity::Medium)
            .user_facing(true)
            .build()
    }

    /// Failure of a dependency (database, chat platform)
    #[track_caller]
    pub fn external_service(service: &str, message: impl fmt::Display) -> Self {
        Self::builder(format!("{service}: {message}"))
            .kind(ErrorKind::ExternalService)
            .code("EXTERNAL_SERVICE_ERROR")
            .severity(Severity::High)
            .context_entry("service", service)
            .build()
    }

    /// Unexpected failure
    #[track_caller]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::builder(message)
            .code("INTERNAL_ERROR")
            .severity(Severity::High)
            .build()
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn is_user_facing(&self) -> bool {
        self.user_facing
    }

    pub fn context(&self) -> &ErrorContext {
        &self.context
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    pub fn is_kind(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }

    /// True when the severity is at least `threshold`
    pub fn has_severity(&self, threshold: Severity) -> bool {
        self.severity >= threshold
    }

    /// New error with `extra` merged over the current context
    ///
    /// The receiver is left untouched. The copy gets a fresh timestamp and
    /// keeps the original construction site.
    #[must_use]
    pub fn with_context(&self, extra: ErrorContext) -> Self {
        let mut context = self.context.clone();
        context.extend(extra);
        Self {
            context,
            timestamp: Utc::now(),
            ..self.clone()
        }
    }

    /// Structured record for logging
    pub fn to_json(&self) -> Value {
        json!({
            "name": self.name,
            "message": self.message,
            "type": self.kind,
            "code": self.code,
            "severity": self.severity,
            "isUserFacing": self.user_facing,
            "context": self.context,
            "timestamp": self.timestamp.to_rfc3339(),
            "location": format!(
                "{}:{}:{}",
                self.location.file(),
                self.location.line(),
                self.location.column()
            ),
        })
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
