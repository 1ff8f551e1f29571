//! Authentication handlers
//!
//! Endpoints for account registration and login.

use std::future::Future;

use axum::extract::State;
use sentree_service::{AccountService, LoginRequest, RegisterRequest, ServiceError, ServiceResult};
use tokio::time::timeout;

use crate::extractors::AuthJson;
use crate::middleware::REQUEST_TIMEOUT;
use crate::response::{ApiError, ApiResult, AuthReply};
use crate::state::AppState;

/// Register a new account
///
/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    AuthJson(request): AuthJson<RegisterRequest>,
) -> ApiResult<AuthReply> {
    let service = AccountService::new(state.service_context());
    let user_id = bounded(service.register(request))
        .await
        .map_err(ApiError::Register)?;
    Ok(AuthReply::registered(user_id))
}

/// Registration is POST-only
///
/// GET /api/auth/register
pub async fn register_page() -> AuthReply {
    AuthReply::page_not_allowed()
}

/// Login with username and password
///
/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    AuthJson(request): AuthJson<LoginRequest>,
) -> ApiResult<AuthReply> {
    let service = AccountService::new(state.service_context());
    let user = bounded(service.authenticate(request))
        .await
        .map_err(ApiError::Login)?;
    Ok(AuthReply::logged_in(&user))
}

/// Run an account operation under the request time limit
///
/// Running out of time is reported as a store failure.
async fn bounded<T>(operation: impl Future<Output = ServiceResult<T>>) -> ServiceResult<T> {
    timeout(REQUEST_TIMEOUT, operation).await.unwrap_or_else(|_| {
        tracing::error!(
            limit_secs = REQUEST_TIMEOUT.as_secs(),
            "Account operation timed out"
        );
        Err(ServiceError::Store("operation timed out".to_string()))
    })
}
