//! Database connection pool management

mod migrations;
mod postgres;

pub use migrations::run_migrations;
pub use postgres::{create_pool, ConnectTarget, PoolConfig};

// Re-export PgPool for convenience
pub use sqlx::postgres::PgPool;
