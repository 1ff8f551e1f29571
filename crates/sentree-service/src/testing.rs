//! In-memory repository for tests
//!
//! Behaves like the PostgreSQL repository: ids start at 1 and increase,
//! username and email are unique, lookups by username return the first row.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use sentree_core::entities::{NewUser, User};
use sentree_core::error::DomainError;
use sentree_core::traits::{RepoResult, UserRepository};
use sentree_core::value_objects::UserId;
use tokio::sync::Mutex;

#[derive(Debug, Default)]
struct Table {
    rows: Vec<User>,
    next_id: i64,
}

/// `UserRepository` backed by a `Vec` behind a mutex
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    table: Mutex<Table>,
    fail_store: AtomicBool,
    refuse_inserts: AtomicBool,
    delay_ms: AtomicU64,
}

/// Whether `row` blocks a registration using `username` or `email`
fn conflicts(row: &User, username: &str, email: &str) -> bool {
    row.username == username || row.email == email
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every call fail as if the database were unreachable
    pub fn set_unavailable(&self, unavailable: bool) {
        self.fail_store.store(unavailable, Ordering::SeqCst);
    }

    /// Make inserts report no row without a conflict
    pub fn set_refuse_inserts(&self, refuse: bool) {
        self.refuse_inserts.store(refuse, Ordering::SeqCst);
    }

    /// Make every call stall for `delay` before touching the table
    pub fn set_delay(&self, delay: Duration) {
        let millis = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self.delay_ms.store(millis, Ordering::SeqCst);
    }

    /// Snapshot of all rows in insertion order
    pub async fn rows(&self) -> Vec<User> {
        self.table.lock().await.rows.clone()
    }

    async fn check_available(&self) -> RepoResult<()> {
        let delay = self.delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        if self.fail_store.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError(
                "connection refused".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &NewUser) -> RepoResult<UserId> {
        self.check_available().await?;

        let mut table = self.table.lock().await;
        if table
            .rows
            .iter()
            .any(|row| conflicts(row, &user.username, &user.email))
        {
            return Err(DomainError::DuplicateAccount);
        }
        if self.refuse_inserts.load(Ordering::SeqCst) {
            return Err(DomainError::InsertionFailed);
        }

        table.next_id += 1;
        let id = UserId::new(table.next_id);
        table.rows.push(User::from_new(id, user.clone()));
        Ok(id)
    }

    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        self.check_available().await?;

        let table = self.table.lock().await;
        Ok(table
            .rows
            .iter()
            .find(|row| row.username == username)
            .cloned())
    }

    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        self.check_available().await?;

        let table = self.table.lock().await;
        Ok(table.rows.iter().find(|row| row.id == id).cloned())
    }

    async fn count(&self) -> RepoResult<i64> {
        self.check_available().await?;

        let table = self.table.lock().await;
        Ok(i64::try_from(table.rows.len()).unwrap_or(i64::MAX))
    }

    async fn ping(&self) -> RepoResult<()> {
        self.check_available().await
    }
}
