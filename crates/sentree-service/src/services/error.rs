//! Service layer error types
//!
//! One variant per account-service outcome other than success.

use sentree_common::AppError;
use sentree_core::DomainError;
use std::fmt;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Username or email already taken
    DuplicateAccount,

    /// Store accepted the insert but reported no row
    InsertionFailure,

    /// No account with the given username
    NotFound,

    /// Account exists, password does not match
    WrongPassword,

    /// Strict validation rejected the request body
    Validation(String),

    /// Store connectivity or query failure
    Store(String),

    /// Anything else that went wrong inside the service
    Internal(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateAccount => write!(f, "Username or email already in use"),
            Self::InsertionFailure => write!(f, "Insert reported no row"),
            Self::NotFound => write!(f, "User not found"),
            Self::WrongPassword => write!(f, "Wrong password"),
            Self::Validation(msg) => write!(f, "Validation error: {msg}"),
            Self::Store(msg) => write!(f, "Store error: {msg}"),
            Self::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {}

impl ServiceError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Get the error code for logs and API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateAccount => "DUPLICATE_ACCOUNT",
            Self::InsertionFailure => "INSERTION_FAILURE",
            Self::NotFound => "NOT_FOUND",
            Self::WrongPassword => "WRONG_PASSWORD",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Store(_) => "STORE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether the failure came from infrastructure rather than the caller
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Store(_) | Self::Internal(_))
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::DuplicateAccount => Self::DuplicateAccount,
            DomainError::InsertionFailed => Self::InsertionFailure,
            DomainError::DatabaseError(msg) => Self::Store(msg),
        }
    }
}

impl From<AppError> for ServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Domain(e) => e.into(),
            AppError::Database(msg) => Self::Store(msg),
            AppError::Internal(e) => Self::Internal(format!("{e:#}")),
            other => Self::Internal(other.to_string()),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
