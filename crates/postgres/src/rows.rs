//! Typed rows for the analytics tables.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

/// A row of `analytics.event_actions`.
///
/// `declaration` and `annotation` hold the flattened, analytics-eligible
/// field maps; everything else is scalar action/event metadata.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct EventActionRow {
    pub id: Uuid,
    pub event_id: Uuid,
    pub event_type: String,
    pub action_type: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<String>,
    pub created_at_location: Option<String>,
    pub original_action_id: Option<Uuid>,
    /// Creation time of the event's first DECLARE action, from the full
    /// history; identical on every row of the same event.
    pub declared_at: Option<DateTime<Utc>>,
    /// Creation time of the event's first REGISTER action, from the full
    /// history; identical on every row of the same event.
    pub registered_at: Option<DateTime<Utc>>,
    pub declaration: Value,
    pub annotation: Value,
}

/// A row of `analytics.location_levels`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct LocationLevelRow {
    pub id: String,
    /// 1-based depth in the administrative hierarchy.
    pub level: i32,
    pub name: String,
}

/// A row of `analytics.location_statistics`.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct LocationStatisticsRow {
    pub reference_id: String,
    pub name: String,
    pub year: i32,
    pub crude_birth_rate: f64,
    pub male_population: i64,
    pub female_population: i64,
    pub total_population: i64,
}
