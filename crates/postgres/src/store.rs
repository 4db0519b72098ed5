//! Upsert operations against the analytics tables.

use crate::rows::{EventActionRow, LocationLevelRow, LocationStatisticsRow};
use async_trait::async_trait;
use registry_core::{Error, Result};
use sqlx::{PgConnection, Postgres, QueryBuilder};
use telemetry::metrics;
use tracing::debug;

/// Upsert statement for a single event-action row.
///
/// Every column is overwritten on conflict; two imports of the same action
/// leave the row byte-identical.
const UPSERT_EVENT_ACTION: &str = r#"
INSERT INTO analytics.event_actions (
    id, event_id, event_type, action_type, status, created_at, created_by,
    created_at_location, original_action_id, declared_at, registered_at,
    declaration, annotation
)
VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
ON CONFLICT (id) DO UPDATE SET
    event_id = EXCLUDED.event_id,
    event_type = EXCLUDED.event_type,
    action_type = EXCLUDED.action_type,
    status = EXCLUDED.status,
    created_at = EXCLUDED.created_at,
    created_by = EXCLUDED.created_by,
    created_at_location = EXCLUDED.created_at_location,
    original_action_id = EXCLUDED.original_action_id,
    declared_at = EXCLUDED.declared_at,
    registered_at = EXCLUDED.registered_at,
    declaration = EXCLUDED.declaration,
    annotation = EXCLUDED.annotation
"#;

/// Write access to the analytics tables.
///
/// Implemented by a live Postgres connection (a transaction dereferences to
/// one) and by the in-memory store used in tests; the import and sync cores
/// only ever see this trait.
#[async_trait]
pub trait AnalyticsStore: Send {
    /// Insert-or-overwrite one event-action row, keyed by action id.
    async fn upsert_event_action(&mut self, row: &EventActionRow) -> Result<()>;

    /// Insert-or-overwrite location levels, keyed by id.
    async fn upsert_location_levels(&mut self, rows: &[LocationLevelRow]) -> Result<()>;

    /// Insert-or-overwrite one batch of statistics rows, keyed by
    /// (reference_id, year). The name column is written on insert only.
    async fn upsert_location_statistics(&mut self, rows: &[LocationStatisticsRow]) -> Result<()>;
}

#[async_trait]
impl AnalyticsStore for PgConnection {
    async fn upsert_event_action(&mut self, row: &EventActionRow) -> Result<()> {
        let start = std::time::Instant::now();

        sqlx::query(UPSERT_EVENT_ACTION)
            .bind(row.id)
            .bind(row.event_id)
            .bind(&row.event_type)
            .bind(&row.action_type)
            .bind(&row.status)
            .bind(row.created_at)
            .bind(&row.created_by)
            .bind(&row.created_at_location)
            .bind(row.original_action_id)
            .bind(row.declared_at)
            .bind(row.registered_at)
            .bind(&row.declaration)
            .bind(&row.annotation)
            .execute(&mut *self)
            .await
            .map_err(|e| {
                metrics().upsert_errors.inc();
                Error::storage(format!("event_actions upsert error: {}", e))
            })?;

        let elapsed = start.elapsed();
        metrics().upsert_latency_ms.observe(elapsed.as_millis() as u64);
        metrics().actions_upserted.inc();

        debug!(
            action_id = %row.id,
            event_id = %row.event_id,
            action_type = %row.action_type,
            latency_ms = %elapsed.as_millis(),
            "Upserted event action"
        );

        Ok(())
    }

    async fn upsert_location_levels(&mut self, rows: &[LocationLevelRow]) -> Result<()> {
        if rows.is_empty() {
            return Ok(());
        }

        let start = std::time::Instant::now();

        let mut builder =
            QueryBuilder::<Postgres>::new("INSERT INTO analytics.location_levels (id, level, name) ");
        builder.push_values(rows, |mut b, row| {
            b.push_bind(&row.id)
                .push_bind(row.level)
                .push_bind(&row.name);
        });
        builder.push(" ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name, level = EXCLUDED.level");

        builder.build().execute(&mut *self).await.map_err(|e| {
            metrics().upsert_errors.inc();
            Error::storage(format!("location_levels upsert error: {}", e))
        })?;

        let elapsed = start.elapsed();
        metrics()
            .batch_upsert_latency_ms
            .observe(elapsed.as_millis() as u64);
        metrics().location_levels_upserted.inc_by(rows.len() as u64);

        debug!(
            count = rows.len(),
            latency_ms = %elapsed.as_millis(),
            "Upserted location levels"
        );

        Ok(())
    }

    async fn upsert_location_statistics(&mut self, rows: &[LocationStatisticsRow]) -> Result<()> {
        if rows.is_empty() {
            return Ok(());
        }

        let start = std::time::Instant::now();

        let mut builder = QueryBuilder::<Postgres>::new(
            "INSERT INTO analytics.location_statistics \
             (reference_id, name, year, crude_birth_rate, male_population, female_population, total_population) ",
        );
        builder.push_values(rows, |mut b, row| {
            b.push_bind(&row.reference_id)
                .push_bind(&row.name)
                .push_bind(row.year)
                .push_bind(row.crude_birth_rate)
                .push_bind(row.male_population)
                .push_bind(row.female_population)
                .push_bind(row.total_population);
        });
        builder.push(
            " ON CONFLICT (reference_id, year) DO UPDATE SET \
             year = EXCLUDED.year, \
             crude_birth_rate = EXCLUDED.crude_birth_rate, \
             male_population = EXCLUDED.male_population, \
             female_population = EXCLUDED.female_population, \
             total_population = EXCLUDED.total_population",
        );

        builder.build().execute(&mut *self).await.map_err(|e| {
            metrics().upsert_errors.inc();
            Error::storage(format!("location_statistics upsert error: {}", e))
        })?;

        let elapsed = start.elapsed();
        metrics()
            .batch_upsert_latency_ms
            .observe(elapsed.as_millis() as u64);
        metrics().statistics_rows_upserted.inc_by(rows.len() as u64);
        metrics().statistics_batches.inc();

        debug!(
            count = rows.len(),
            latency_ms = %elapsed.as_millis(),
            "Upserted location statistics batch"
        );

        Ok(())
    }
}
