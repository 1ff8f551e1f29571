//! Server setup and initialization
//!
//! Provides the application builder, dependency wiring, and the server runner.

use std::future::Future;
use std::sync::Arc;

use axum::Router;
use sentree_common::{AppConfig, AppError};
use sentree_core::traits::UserRepository;
use sentree_db::{create_pool, run_migrations, PgPool, PgUserRepository, PoolConfig};
use sentree_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = apply_middleware(
        create_router(),
        &state.config().cors,
        state.config().app.env.is_production(),
    );
    router.with_state(state)
}

/// Open the connection pool and apply migrations when configured
pub async fn connect_database(config: &AppConfig) -> Result<PgPool, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&PoolConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!(
        max_connections = config.database.max_connections,
        "PostgreSQL connection established"
    );

    if config.database.run_migrations {
        run_migrations(&pool)
            .await
            .map_err(|e| AppError::Database(format!("Migration failed: {e}")))?;
    }

    Ok(pool)
}

/// Wire the service context around a user repository and create AppState
pub fn create_app_state(
    config: AppConfig,
    user_repo: Arc<dyn UserRepository>,
) -> Result<AppState, AppError> {
    let service_context = ServiceContextBuilder::new()
        .user_repo(user_repo)
        .password_scheme(config.accounts.password_scheme)
        .strict_validation(config.accounts.strict_validation)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Serve `app` on `listener` until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<(), AppError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(AppError::internal)
}

/// Run the complete server with configuration
///
/// The pool is closed after the server has drained in-flight requests.
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();

    let pool = connect_database(&config).await?;
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let state = create_app_state(config, user_repo)?;
    let app = create_app(state);

    info!("Starting HTTP server on {}", addr);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;
    info!("Server listening on http://{}", addr);

    let result = serve(listener, app, shutdown_signal()).await;

    pool.close().await;
    info!("Database pool closed");

    result
}

/// Resolve on Ctrl-C or SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}
