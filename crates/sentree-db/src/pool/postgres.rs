//! PostgreSQL connection pool management

use std::str::FromStr;
use std::time::Duration;

use sentree_common::DatabaseConfig;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};

/// Where to connect: a full URL or the individual parts
#[derive(Debug, Clone)]
pub enum ConnectTarget {
    Url(String),
    Parts {
        host: String,
        port: u16,
        user: String,
        password: Option<String>,
        database: String,
    },
}

/// Connection pool settings
///
/// Callers beyond `max_connections` wait in the pool's queue until a
/// connection frees up or `acquire_timeout` elapses.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    pub target: ConnectTarget,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Minimum number of connections to maintain
    pub min_connections: u32,
    /// Maximum time to wait for a connection
    pub acquire_timeout: Duration,
    /// Maximum idle time before a connection is closed
    pub idle_timeout: Duration,
    /// Maximum lifetime of a connection
    pub max_lifetime: Duration,
}

impl PoolConfig {
    pub const MAX_CONNECTIONS: u32 = 10;

    /// Pool settings for a full connection URL
    pub fn from_url(url: impl Into<String>) -> Self {
        Self::with_target(ConnectTarget::Url(url.into()))
    }

    fn with_target(target: ConnectTarget) -> Self {
        Self {
            target,
            max_connections: Self::MAX_CONNECTIONS,
            min_connections: 1,
            acquire_timeout: Duration::from_secs(10),
            idle_timeout: Duration::from_secs(300),
            max_lifetime: Duration::from_secs(1800),
        }
    }

    /// Build connection options
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        match &self.target {
            ConnectTarget::Url(url) => PgConnectOptions::from_str(url),
            ConnectTarget::Parts {
                host,
                port,
                user,
                password,
                database,
            } => {
                let options = PgConnectOptions::new()
                    .host(host)
                    .port(*port)
                    .username(user)
                    .database(database);
                Ok(match password {
                    Some(password) => options.password(password),
                    None => options,
                })
            }
        }
    }
}

impl From<&DatabaseConfig> for PoolConfig {
    fn from(config: &DatabaseConfig) -> Self {
        let target = match &config.url {
            Some(url) => ConnectTarget::Url(url.clone()),
            None => ConnectTarget::Parts {
                host: config.host.clone(),
                port: config.port,
                user: config.user.clone().unwrap_or_default(),
                password: config.password.clone(),
                database: config.name.clone().unwrap_or_default(),
            },
        };

        Self {
            max_connections: config.max_connections,
            ..Self::with_target(target)
        }
    }
}

/// Create a new PostgreSQL connection pool
pub async fn create_pool(config: &PoolConfig) -> Result<PgPool, sqlx::Error> {
    let options = config.connect_options()?;

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(config.idle_timeout)
        .max_lifetime(config.max_lifetime)
        .connect_with(options)
        .await
}
