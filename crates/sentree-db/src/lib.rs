//! # sentree-db
//!
//! Database layer implementing the account repository with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management and embedded migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - The `users` repository
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sentree_db::pool::{create_pool, PoolConfig};
//! use sentree_db::repositories::PgUserRepository;
//! use sentree_core::traits::UserRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PoolConfig::from_url("postgres://localhost/sentree");
//!     let pool = create_pool(&config).await?;
//!     let user_repo = PgUserRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, PgPool, PoolConfig};
pub use repositories::PgUserRepository;
