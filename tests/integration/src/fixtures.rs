//! Test fixtures and data generators
//!
//! Usernames and emails carry a per-run suffix so repeated runs against the
//! same database never collide.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    format!(
        "{}_{}_{}",
        std::process::id(),
        nanos,
        COUNTER.fetch_add(1, Ordering::SeqCst)
    )
}

/// Registration request
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub number: String,
    pub email: String,
}

impl RegisterRequest {
    /// A fresh account named after `name`
    pub fn unique(name: &str) -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("{name}_{suffix}"),
            password: format!("{name}-pass"),
            number: "+15551234567".to_string(),
            email: format!("{name}_{suffix}@example.com"),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            username: reg.username.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Body envelope returned by every auth route
#[derive(Debug, Deserialize)]
pub struct StatusBody {
    pub status: String,
    pub msg: String,
    #[serde(rename = "userId")]
    pub user_id: Option<i64>,
    pub user: Option<UserBody>,
}

/// Stored row returned by login
#[derive(Debug, Deserialize)]
pub struct UserBody {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password: String,
    pub number: String,
}
