//! Database connection pool management
//!
//! Sets up the PostgreSQL pool for the waitlist table and applies the embedded
//! migrations in `./migrations`.

use sqlx::{PgPool, postgres::PgPoolOptions};
use std::time::Duration;

use crate::core::config::Config;

/// Connections kept open while the waitlist is idle
const MIN_CONNECTIONS: u32 = 1;

/// Idle connections are closed after this long
const IDLE_TIMEOUT: Duration = Duration::from_secs(600);

/// Pool settings for the waitlist database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DbConfig {
    /// Take the connection URL and pool sizing from the application config
    pub fn from_config(config: &Config) -> Result<Self, DbError> {
        let database_url = config
            .database_url
            .clone()
            .filter(|url| !url.is_empty())
            .ok_or(DbError::MissingDatabaseUrl)?;

        Ok(Self {
            database_url,
            max_connections: config.db_max_connections.max(MIN_CONNECTIONS),
            acquire_timeout: Duration::from_secs(config.db_acquire_timeout_secs),
        })
    }
}

/// Database errors
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("DATABASE_URL environment variable not set")]
    MissingDatabaseUrl,

    #[error("Failed to connect to database: {0}")]
    ConnectionError(#[from] sqlx::Error),

    #[error("Failed to run migrations: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),
}

/// Open the pool and bring the schema up to date
pub async fn create_pool_with_migrations(config: &DbConfig) -> Result<PgPool, DbError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(MIN_CONNECTIONS)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(IDLE_TIMEOUT)
        .connect(&config.database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!(
        "Waitlist database ready (max_connections={})",
        config.max_connections
    );

    Ok(pool)
}

/// Check database health
pub async fn health_check(pool: &PgPool) -> Result<(), DbError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
