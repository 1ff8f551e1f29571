//! Response DTOs for API endpoints
//!
//! Auth responses always travel with HTTP 200; the string `status` field in
//! the body carries the outcome.

use chrono::{DateTime, Utc};
use sentree_core::entities::User;
use sentree_core::value_objects::UserId;
use serde::{Deserialize, Serialize};

// ============================================================================
// Auth Responses
// ============================================================================

/// Body envelope shared by every auth endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub msg: String,
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
}

impl StatusResponse {
    /// Envelope with only a status and message
    pub fn new(status: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            msg: msg.into(),
            user_id: None,
            user: None,
        }
    }

    pub fn registered(user_id: UserId) -> Self {
        Self {
            user_id: Some(user_id),
            ..Self::new("200", "Register success")
        }
    }

    pub fn logged_in(user: &User) -> Self {
        Self {
            user: Some(UserResponse::from(user)),
            ..Self::new("200", "Login sucess")
        }
    }
}

/// Stored account row as returned by login
///
/// The `password` column is included exactly as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub password: String,
    pub number: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            password: user.password.clone(),
            number: user.number.clone(),
        }
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
