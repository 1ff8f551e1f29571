//! Response types and error handling for the auth endpoints
//!
//! Every auth response is HTTP 200. The outcome travels in the body as a
//! string `status` plus a human-readable `msg`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sentree_core::entities::User;
use sentree_core::value_objects::UserId;
use sentree_service::{ServiceError, StatusResponse};
use thiserror::Error;

/// Body envelope reply for the auth routes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthReply(pub StatusResponse);

impl AuthReply {
    pub fn new(status: &str, msg: impl Into<String>) -> Self {
        Self(StatusResponse::new(status, msg))
    }

    pub fn registered(user_id: UserId) -> Self {
        Self(StatusResponse::registered(user_id))
    }

    pub fn logged_in(user: &User) -> Self {
        Self(StatusResponse::logged_in(user))
    }

    /// Reply to a GET on the registration route
    pub fn page_not_allowed() -> Self {
        Self::new("404", "Access to this page is not allowed")
    }
}

impl IntoResponse for AuthReply {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self.0)).into_response()
    }
}

/// API error type for the auth routes
///
/// Carries which operation failed because the same service error renders
/// differently for registration and login.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Registration failed: {0}")]
    Register(#[source] ServiceError),

    #[error("Login failed: {0}")]
    Login(#[source] ServiceError),
}

impl ApiError {
    /// Body `status` and `msg` for this error
    #[must_use]
    pub fn envelope(&self) -> (&'static str, String) {
        match self {
            Self::InvalidBody(_) => ("400", "Invalid request body".to_string()),
            Self::Register(err) => match err {
                ServiceError::DuplicateAccount => {
                    ("400", "Username or email already exists".to_string())
                }
                ServiceError::InsertionFailure => ("400", "Unable to post".to_string()),
                ServiceError::Validation(msg) => ("400", msg.clone()),
                _ => ("500", "Internal error".to_string()),
            },
            Self::Login(err) => match err {
                ServiceError::NotFound => ("400", "User not found".to_string()),
                ServiceError::WrongPassword => ("400", "Wrong password".to_string()),
                ServiceError::Validation(msg) => ("400", msg.clone()),
                // Login store failures have always been reported as "404"
                _ => ("404", "Internal error".to_string()),
            },
        }
    }

    /// Get error code for logs
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidBody(_) => "INVALID_BODY",
            Self::Register(e) | Self::Login(e) => e.error_code(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!(error_code = self.error_code(), error = %self, "Auth request failed");
        let (status, msg) = self.envelope();
        AuthReply::new(status, msg).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
