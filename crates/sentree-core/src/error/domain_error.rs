//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Username or email already in use")]
    DuplicateAccount,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Insert affected no rows")]
    InsertionFailed,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Check if the store itself failed (connectivity, query, pool exhaustion)
    pub fn is_infrastructure(&self) -> bool {
        matches!(self, Self::DatabaseError(_))
    }
}
