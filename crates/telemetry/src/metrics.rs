//! Internal metrics collection.
//!
//! Metrics accumulate in-process and are logged as a summary at the end of a
//! run; there is no export surface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// A counter metric.
#[derive(Debug, Default)]
pub struct Counter(AtomicU64);

impl Counter {
    pub fn new() -> Self {
        Self(AtomicU64::new(0))
    }

    pub fn inc(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_by(&self, n: u64) {
        self.0.fetch_add(n, Ordering::Relaxed);
    }

    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }

    pub fn reset(&self) -> u64 {
        self.0.swap(0, Ordering::Relaxed)
    }
}

/// Histogram for latency tracking.
#[derive(Debug)]
pub struct Histogram {
    /// Buckets: 1ms, 5ms, 10ms, 25ms, 50ms, 100ms, 250ms, 500ms, 1s, 5s, 10s
    buckets: [AtomicU64; 11],
    sum: AtomicU64,
    count: AtomicU64,
}

impl Default for Histogram {
    fn default() -> Self {
        Self::new()
    }
}

impl Histogram {
    const BUCKET_BOUNDS: [u64; 11] = [1, 5, 10, 25, 50, 100, 250, 500, 1000, 5000, 10000];

    pub fn new() -> Self {
        Self {
            buckets: Default::default(),
            sum: AtomicU64::new(0),
            count: AtomicU64::new(0),
        }
    }

    /// Records a value in milliseconds.
    pub fn observe(&self, ms: u64) {
        self.sum.fetch_add(ms, Ordering::Relaxed);
        self.count.fetch_add(1, Ordering::Relaxed);

        for (i, &bound) in Self::BUCKET_BOUNDS.iter().enumerate() {
            if ms <= bound {
                self.buckets[i].fetch_add(1, Ordering::Relaxed);
                return;
            }
        }
        // Value exceeds all buckets, add to last
        self.buckets[10].fetch_add(1, Ordering::Relaxed);
    }

    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }

    pub fn sum(&self) -> u64 {
        self.sum.load(Ordering::Relaxed)
    }

    pub fn mean(&self) -> f64 {
        let count = self.count();
        if count == 0 {
            0.0
        } else {
            self.sum() as f64 / count as f64
        }
    }

    /// Returns bucket counts.
    pub fn buckets(&self) -> Vec<(u64, u64)> {
        Self::BUCKET_BOUNDS
            .iter()
            .zip(self.buckets.iter())
            .map(|(&bound, count)| (bound, count.load(Ordering::Relaxed)))
            .collect()
    }
}

/// Collected metrics for the analytics pipeline.
#[derive(Debug, Default)]
pub struct Metrics {
    // Event import metrics
    pub events_imported: Counter,
    pub events_skipped_unsupported: Counter,
    pub actions_upserted: Counter,
    pub actions_skipped: Counter,
    pub upsert_errors: Counter,

    // Reference-data sync metrics
    pub location_levels_upserted: Counter,
    pub statistics_rows_upserted: Counter,
    pub statistics_batches: Counter,

    // Latency histograms
    pub upsert_latency_ms: Histogram,
    pub batch_upsert_latency_ms: Histogram,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }
}

/// A snapshot of metrics at a point in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub timestamp: DateTime<Utc>,
    pub events_imported: u64,
    pub events_skipped_unsupported: u64,
    pub actions_upserted: u64,
    pub actions_skipped: u64,
    pub upsert_errors: u64,
    pub location_levels_upserted: u64,
    pub statistics_rows_upserted: u64,
    pub statistics_batches: u64,
    pub upsert_latency_mean_ms: f64,
    pub batch_upsert_latency_mean_ms: f64,
}

impl Metrics {
    /// Takes a snapshot of current metrics.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            timestamp: Utc::now(),
            events_imported: self.events_imported.get(),
            events_skipped_unsupported: self.events_skipped_unsupported.get(),
            actions_upserted: self.actions_upserted.get(),
            actions_skipped: self.actions_skipped.get(),
            upsert_errors: self.upsert_errors.get(),
            location_levels_upserted: self.location_levels_upserted.get(),
            statistics_rows_upserted: self.statistics_rows_upserted.get(),
            statistics_batches: self.statistics_batches.get(),
            upsert_latency_mean_ms: self.upsert_latency_ms.mean(),
            batch_upsert_latency_mean_ms: self.batch_upsert_latency_ms.mean(),
        }
    }

    /// Logs a one-line summary of the run's counters.
    pub fn log_summary(&self) {
        let snapshot = self.snapshot();
        tracing::info!(
            events_imported = snapshot.events_imported,
            events_skipped_unsupported = snapshot.events_skipped_unsupported,
            actions_upserted = snapshot.actions_upserted,
            actions_skipped = snapshot.actions_skipped,
            upsert_errors = snapshot.upsert_errors,
            location_levels_upserted = snapshot.location_levels_upserted,
            statistics_rows_upserted = snapshot.statistics_rows_upserted,
            statistics_batches = snapshot.statistics_batches,
            upsert_latency_mean_ms = snapshot.upsert_latency_mean_ms,
            "Run summary"
        );
    }
}

/// Global metrics registry.
pub static METRICS: std::sync::LazyLock<Metrics> = std::sync::LazyLock::new(Metrics::new);

/// Get the global metrics instance.
pub fn metrics() -> &'static Metrics {
    &METRICS
}
