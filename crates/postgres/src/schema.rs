//! Analytics schema DDL.
//!
//! Three tables under the `analytics` schema:
//! - `event_actions`: one row per committed action, keyed by action id
//! - `location_levels`: the administrative hierarchy dimension
//! - `location_statistics`: per-location-per-year population measures
//!
//! All statements are idempotent (IF NOT EXISTS) and applied at startup.

use crate::client::PostgresClient;
use registry_core::{Error, Result};
use tracing::debug;

/// SQL for creating the analytics schema.
pub const CREATE_ANALYTICS_SCHEMA: &str = r#"
CREATE SCHEMA IF NOT EXISTS analytics
"#;

/// SQL for creating the event_actions table.
///
/// The primary key is the action id, which is what makes re-imports
/// idempotent: the same action always lands on the same row.
pub const CREATE_EVENT_ACTIONS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS analytics.event_actions (
    id UUID PRIMARY KEY,
    event_id UUID NOT NULL,
    event_type TEXT NOT NULL,
    action_type TEXT NOT NULL,
    status TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL,
    created_by TEXT,
    created_at_location TEXT,
    original_action_id UUID,
    declared_at TIMESTAMPTZ,
    registered_at TIMESTAMPTZ,
    declaration JSONB NOT NULL,
    annotation JSONB NOT NULL
)
"#;

/// SQL for creating the location_levels table.
pub const CREATE_LOCATION_LEVELS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS analytics.location_levels (
    id TEXT PRIMARY KEY,
    level INTEGER NOT NULL,
    name TEXT NOT NULL
)
"#;

/// SQL for creating the location_statistics table.
pub const CREATE_LOCATION_STATISTICS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS analytics.location_statistics (
    reference_id TEXT NOT NULL,
    name TEXT NOT NULL,
    year INTEGER NOT NULL,
    crude_birth_rate DOUBLE PRECISION NOT NULL,
    male_population BIGINT NOT NULL,
    female_population BIGINT NOT NULL,
    total_population BIGINT NOT NULL,
    PRIMARY KEY (reference_id, year)
)
"#;

/// All schema statements, in application order.
pub fn all_statements() -> Vec<&'static str> {
    vec![
        CREATE_ANALYTICS_SCHEMA,
        CREATE_EVENT_ACTIONS_TABLE,
        CREATE_LOCATION_LEVELS_TABLE,
        CREATE_LOCATION_STATISTICS_TABLE,
    ]
}

/// Initialize the analytics schema.
///
/// Creates the schema and all tables if they don't exist.
pub async fn init_schema(client: &PostgresClient) -> Result<()> {
    for sql in all_statements() {
        sqlx::query(sql)
            .execute(client.pool())
            .await
            .map_err(|e| Error::storage(format!("Schema init error: {}", e)))?;
    }

    debug!("Analytics schema initialized");
    Ok(())
}
