//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{NewUser, User};
use crate::error::DomainError;
use crate::value_objects::UserId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new account atomically
    ///
    /// Fails with `DomainError::DuplicateAccount` when the username or email
    /// is already taken, and with `DomainError::InsertionFailed` when the
    /// store reports no inserted row without a conflict.
    async fn create(&self, user: &NewUser) -> RepoResult<UserId>;

    /// Find an account by exact username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Find an account by id
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Number of stored accounts
    async fn count(&self) -> RepoResult<i64>;

    /// Round-trip to the store without touching any rows
    async fn ping(&self) -> RepoResult<()>;
}
