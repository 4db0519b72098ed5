//! Population statistics sync.
//!
//! Loads per-location yearly statistics from a provider, flattens them to
//! one row per location per year, and upserts the rows in fixed-size
//! batches inside a single transaction.

use std::path::PathBuf;

use async_trait::async_trait;
use postgres_client::{AnalyticsStore, LocationStatisticsRow, PostgresClient};
use registry_core::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Maximum rows per upsert statement. Chunking bounds statement size only;
/// the outcome is identical to one statement covering every row.
pub const INSERT_MAX_CHUNK_SIZE: usize = 1000;

/// Yearly measures for one location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearlyStatistics {
    pub year: i32,
    pub crude_birth_rate: f64,
    pub male_population: i64,
    pub female_population: i64,
    pub population: i64,
}

/// Statistics feed entry for one named location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationStatistics {
    pub id: String,
    pub name: String,
    pub years: Vec<YearlyStatistics>,
}

/// Source of the statistics feed.
#[async_trait]
pub trait StatisticsProvider: Send + Sync {
    async fn fetch(&self) -> Result<Vec<LocationStatistics>>;
}

/// Provider backed by a statistics JSON file on disk.
pub struct FileStatisticsProvider {
    path: PathBuf,
}

impl FileStatisticsProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl StatisticsProvider for FileStatisticsProvider {
    async fn fetch(&self) -> Result<Vec<LocationStatistics>> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        let statistics = serde_json::from_str(&raw)?;
        Ok(statistics)
    }
}

/// Flattens the feed to one row per location per year.
pub fn flatten_statistics(statistics: &[LocationStatistics]) -> Vec<LocationStatisticsRow> {
    statistics
        .iter()
        .flat_map(|location| {
            location.years.iter().map(|yearly| LocationStatisticsRow {
                reference_id: location.id.clone(),
                name: location.name.clone(),
                year: yearly.year,
                crude_birth_rate: yearly.crude_birth_rate,
                male_population: yearly.male_population,
                female_population: yearly.female_population,
                total_population: yearly.population,
            })
        })
        .collect()
}

/// Upserts rows in fixed-size batches, logging progress before each batch.
pub async fn upsert_statistics_batches<S: AnalyticsStore>(
    store: &mut S,
    rows: &[LocationStatisticsRow],
) -> Result<()> {
    let total = rows.len();
    for (index, batch) in rows.chunks(INSERT_MAX_CHUNK_SIZE).enumerate() {
        info!(
            "Processing {}/{} location statistics",
            ((index + 1) * INSERT_MAX_CHUNK_SIZE).min(total),
            total
        );
        store.upsert_location_statistics(batch).await?;
    }
    Ok(())
}

/// Fetches the feed and upserts every flattened row in one transaction.
pub async fn sync_location_statistics(
    client: &PostgresClient,
    provider: &dyn StatisticsProvider,
) -> Result<()> {
    let statistics = provider.fetch().await?;
    let rows = flatten_statistics(&statistics);

    let mut tx = client.begin().await?;
    upsert_statistics_batches(&mut *tx, &rows).await?;
    tx.commit()
        .await
        .map_err(|e| Error::storage(format!("Commit error: {}", e)))?;

    info!(count = rows.len(), "Synced location statistics");
    Ok(())
}
