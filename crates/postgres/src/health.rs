//! Postgres health checks.

use crate::client::PostgresClient;
use tracing::{debug, error};

/// Check Postgres connection health.
pub async fn check_connection(client: &PostgresClient) -> bool {
    match sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(client.pool())
        .await
    {
        Ok(_) => {
            debug!("Postgres connection healthy");
            true
        }
        Err(e) => {
            error!("Postgres health check failed: {}", e);
            false
        }
    }
}
