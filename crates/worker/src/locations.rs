//! Administrative hierarchy sync.
//!
//! Mirrors the configured administrative structure into the analytics
//! location-levels dimension table. Levels are numbered from 1 in the
//! configured order, outermost first.

use postgres_client::{AnalyticsStore, LocationLevelRow, PostgresClient};
use registry_core::{Error, Message, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

/// One administrative level from application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminLevel {
    pub id: String,
    pub label: Message,
}

/// Maps the configured hierarchy to dimension rows, numbering from 1.
pub fn location_level_rows(levels: &[AdminLevel]) -> Vec<LocationLevelRow> {
    levels
        .iter()
        .enumerate()
        .map(|(index, level)| LocationLevelRow {
            id: level.id.clone(),
            level: index as i32 + 1,
            name: level.label.default_message.clone(),
        })
        .collect()
}

/// Upserts the hierarchy as one batched statement.
pub async fn upsert_admin_structure<S: AnalyticsStore>(
    store: &mut S,
    levels: &[AdminLevel],
) -> Result<()> {
    let rows = location_level_rows(levels);
    store.upsert_location_levels(&rows).await
}

/// Upserts the configured administrative hierarchy in one transaction.
pub async fn sync_location_levels(client: &PostgresClient, levels: &[AdminLevel]) -> Result<()> {
    let mut tx = client.begin().await?;
    upsert_admin_structure(&mut *tx, levels).await?;
    tx.commit()
        .await
        .map_err(|e| Error::storage(format!("Commit error: {}", e)))?;

    info!(count = levels.len(), "Synced location levels");
    Ok(())
}
