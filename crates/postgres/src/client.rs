//! Postgres client wrapper.

use crate::config::PostgresConfig;
use registry_core::{Error, Result};
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::{Postgres, Transaction};
use std::time::Duration;
use tracing::info;

/// Postgres client wrapper with connection pooling.
#[derive(Clone)]
pub struct PostgresClient {
    pool: PgPool,
    config: PostgresConfig,
}

impl PostgresClient {
    /// Creates a new Postgres client and connects the pool.
    pub async fn new(config: PostgresConfig) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect(&config.url)
            .await
            .map_err(|e| Error::storage(format!("Postgres connect error: {}", e)))?;

        info!(
            max_connections = config.max_connections,
            "Created Postgres client"
        );

        Ok(Self { pool, config })
    }

    /// Returns the inner connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Returns the configuration.
    pub fn config(&self) -> &PostgresConfig {
        &self.config
    }

    /// Begins a transaction on the pool.
    pub async fn begin(&self) -> Result<Transaction<'static, Postgres>> {
        self.pool
            .begin()
            .await
            .map_err(|e| Error::storage(format!("Begin transaction error: {}", e)))
    }
}
