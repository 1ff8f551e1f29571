//! Route definitions
//!
//! Account routes are mounted under /api/auth; health probes sit at the root.

use axum::{http::StatusCode, routing::get, routing::post, Router};
use tower_http::timeout::TimeoutLayer;

use crate::handlers::{auth, health};
use crate::middleware::REQUEST_TIMEOUT;
use crate::state::AppState;

/// Create the main API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .nest("/api/auth", auth_routes())
        .merge(health_routes())
}

/// Health check routes
///
/// A stalled probe answers 503. The auth handlers bound their own work
/// instead, since their replies must stay HTTP 200.
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::SERVICE_UNAVAILABLE,
            REQUEST_TIMEOUT,
        ))
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register).get(auth::register_page))
        .route("/login", post(auth::login))
}
