//! Unified error handling for the account service.
//!
//! Provides a single error type covering validation, hashing, persistence
//! and lookup failures, convertible to Tonic gRPC status codes.

use domain::{HashError, ValidationError};
use thiserror::Error;
use tonic::Status;

/// Failure reported by an account store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// A uniqueness constraint rejected the write (duplicate identity)
    #[error("conflict: {0}")]
    Conflict(String),

    /// Any other storage failure
    #[error("database error: {0}")]
    Database(String),
}

impl PersistenceError {
    pub fn conflict(msg: impl Into<String>) -> Self {
        PersistenceError::Conflict(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        PersistenceError::Database(msg.into())
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, PersistenceError::Conflict(_))
    }
}

/// Classify a SeaORM error.
///
/// `sql_err()` only recognises a unique violation when the error downcasts to
/// the driver's own database error, so the `Conflict` branch is exercised only
/// against a live PostgreSQL database.
#[cfg(feature = "database")]
impl From<sea_orm::DbErr> for PersistenceError {
    fn from(err: sea_orm::DbErr) -> Self {
        match err.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(msg)) => {
                PersistenceError::Conflict(msg)
            }
            _ => PersistenceError::Database(err.to_string()),
        }
    }
}

/// Application error types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    // Validation
    #[error("validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    // Credential hasher
    #[error("credential hashing failed: {0}")]
    HashingFailed(String),

    // Store
    #[error("persistence failed: {0}")]
    PersistenceFailed(#[from] PersistenceError),

    // Lookups
    #[error("Account not found")]
    NotFound,

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),
}

impl AppError {
    /// True when the store rejected a duplicate email or username.
    pub fn is_conflict(&self) -> bool {
        matches!(self, AppError::PersistenceFailed(e) if e.is_conflict())
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::ValidationFailed(reason) => reason.to_string(),
            AppError::PersistenceFailed(PersistenceError::Conflict(_)) => {
                "Account with this username or email already exists".to_string()
            }
            AppError::InvalidIdentifier(id) => format!("Invalid identifier: {}", id),

            // Hide details for internal errors
            AppError::PersistenceFailed(PersistenceError::Database(e)) => {
                tracing::error!("Database error: {}", e);
                "A database error occurred".to_string()
            }
            AppError::HashingFailed(e) => {
                tracing::error!("Credential hashing error: {}", e);
                "An internal error occurred".to_string()
            }

            AppError::NotFound => self.to_string(),
        }
    }
}

// =============================================================================
// gRPC Status (Tonic)
// =============================================================================

impl From<AppError> for Status {
    fn from(err: AppError) -> Self {
        let code = match &err {
            AppError::ValidationFailed(_) | AppError::InvalidIdentifier(_) => {
                tonic::Code::InvalidArgument
            }
            AppError::NotFound => tonic::Code::NotFound,
            AppError::PersistenceFailed(PersistenceError::Conflict(_)) => {
                tonic::Code::AlreadyExists
            }
            AppError::PersistenceFailed(PersistenceError::Database(_))
            | AppError::HashingFailed(_) => tonic::Code::Internal,
        };

        Status::new(code, err.user_message())
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<HashError> for AppError {
    fn from(err: HashError) -> Self {
        AppError::HashingFailed(err.0)
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}
