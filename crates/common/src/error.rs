//! Error types for openballot.

use thiserror::Error;

/// Application result type.
pub type AppResult<T> = Result<T, AppError>;

/// Application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // === Caller Errors ===
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Voter is not eligible: {0}")]
    Eligibility(String),

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Duplicate vote: {0}")]
    DuplicateVote(String),

    #[error("Session is not open: {0}")]
    SessionNotOpen(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    // === Storage Errors ===
    #[error("Storage call exceeded its execution budget")]
    StorageTimeout,

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Database error: {0}")]
    Database(String),

    // === Server Errors ===
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the error code for API responses and audit metadata.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Eligibility(_) => "NOT_ELIGIBLE",
            Self::InvalidSelection(_) => "INVALID_SELECTION",
            Self::DuplicateVote(_) => "DUPLICATE_VOTE",
            Self::SessionNotOpen(_) => "SESSION_NOT_OPEN",
            Self::Conflict(_) => "CONFLICT",
            Self::StorageTimeout => "STORAGE_TIMEOUT",
            Self::StorageUnavailable(_) => "STORAGE_UNAVAILABLE",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether the caller may retry this error with backoff.
    ///
    /// Only storage-layer transient failures qualify; rule violations
    /// never do. The engine itself performs no retries.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::StorageTimeout | Self::StorageUnavailable(_))
    }

    /// Whether this error should be logged at error level.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        matches!(
            self,
            Self::StorageTimeout
                | Self::StorageUnavailable(_)
                | Self::Database(_)
                | Self::Config(_)
                | Self::Internal(_)
        )
    }
}

// === From implementations ===

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}
