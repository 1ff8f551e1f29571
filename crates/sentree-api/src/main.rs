//! Sentree API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p sentree-api
//! ```
//!
//! Configuration is loaded from environment variables (and `.env`).

use sentree_common::{try_init_tracing_with_config, AppConfig, Environment, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load .env early so RUST_LOG and APP_ENV apply to the subscriber
    let _ = dotenvy::dotenv();

    let tracing_config = TracingConfig::for_environment(Environment::from_env());
    if let Err(e) = try_init_tracing_with_config(&tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run().await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting Sentree API Server...");

    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(
        env = ?config.app.env,
        address = %config.api.address(),
        password_scheme = %config.accounts.password_scheme,
        strict_validation = config.accounts.strict_validation,
        "Configuration loaded"
    );

    sentree_api::run(config).await?;

    Ok(())
}
