//! # sentree-common
//!
//! Shared utilities including configuration, error handling, password schemes, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{hash_password, verify_password, PasswordScheme, PasswordService};
pub use config::{
    AccountConfig, AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment,
    ServerConfig,
};
pub use error::{AppError, AppResult};
pub use telemetry::{try_init_tracing, try_init_tracing_with_config, TracingConfig, TracingError};
