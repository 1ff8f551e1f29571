//! Embedded schema migrations
//!
//! Applied versions are tracked in `_sqlx_migrations`, so each file runs once.

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::PgPool;
use tracing::info;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Apply any pending embedded migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await?;
    info!(available = MIGRATOR.iter().count(), "Migrations up to date");
    Ok(())
}
