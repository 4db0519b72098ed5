//! Event import pipeline.
//!
//! Replays each event's action history and writes one analytics row per
//! committed action:
//! 1. Order actions CREATE-first, then by creation time
//! 2. Reconstruct the cumulative declaration as of each action
//! 3. Select analytics-eligible fields, resolve annotations, derive fields
//! 4. Upsert one row per action, keyed by action id

use std::collections::HashMap;

use postgres_client::{AnalyticsStore, EventActionRow};
use registry_core::{
    derive_fields, flatten_keys, replay_order, resolve_annotation, select_analytics_fields,
    state_as_of, ActionStatus, ActionType, EventConfig, EventConfigRegistry, EventDocument, Result,
};
use serde_json::{Map, Value};
use telemetry::metrics;
use tracing::{info, warn};

/// Imports a batch of events sequentially.
///
/// Events with no registered config are skipped with a warning; a storage
/// failure propagates immediately and leaves the rest of the batch
/// unwritten.
pub async fn import_events<S: AnalyticsStore>(
    events: &[EventDocument],
    registry: &EventConfigRegistry,
    store: &mut S,
) -> Result<()> {
    for event in events {
        import_event(event, registry, store).await?;
    }
    Ok(())
}

/// Imports a single event if its type has a registered config.
pub async fn import_event<S: AnalyticsStore>(
    event: &EventDocument,
    registry: &EventConfigRegistry,
    store: &mut S,
) -> Result<()> {
    let Some(config) = registry.get(&event.event_type) else {
        warn!(
            event_id = %event.id,
            event_type = %event.event_type,
            "Unsupported event type, record will not be written to the analytics database"
        );
        metrics().events_skipped_unsupported.inc();
        return Ok(());
    };

    upsert_analytics_event_actions(event, config, store).await?;

    metrics().events_imported.inc();
    info!(event_id = %event.id, event_type = %event.event_type, "Event logged into analytics");
    Ok(())
}

/// Writes one analytics row per committed action of the event.
///
/// Rows carry the declaration state as of their own action, but share the
/// event-level declared/registered timestamps taken from the full history.
pub async fn upsert_analytics_event_actions<S: AnalyticsStore>(
    event: &EventDocument,
    config: &EventConfig,
    store: &mut S,
) -> Result<()> {
    let ordered = replay_order(&event.actions);

    let declared_at = ordered
        .iter()
        .find(|action| action.action_type == ActionType::Declare)
        .map(|action| action.created_at);
    let registered_at = ordered
        .iter()
        .find(|action| action.action_type == ActionType::Register)
        .map(|action| action.created_at);

    for (index, &action) in ordered.iter().enumerate() {
        if matches!(
            action.status,
            ActionStatus::Requested | ActionStatus::Rejected
        ) {
            metrics().actions_skipped.inc();
            continue;
        }

        let state = state_as_of(event, index);

        let annotation = match config.action_config(action.action_type) {
            Some(action_config) => select_analytics_fields(
                &resolve_annotation(action, &event.actions),
                &action_config.annotation_fields,
            ),
            None => HashMap::new(),
        };

        let declaration = derive_fields(
            &event.event_type,
            action,
            select_analytics_fields(&state.declaration, config.declaration_fields()),
        );

        let row = EventActionRow {
            id: action.id,
            event_id: event.id,
            event_type: event.event_type.clone(),
            action_type: action.action_type.as_str().to_string(),
            status: action.status.as_str().to_string(),
            created_at: action.created_at,
            created_by: action.created_by.clone(),
            created_at_location: action.created_at_location.clone(),
            original_action_id: action.original_action_id,
            declared_at,
            registered_at,
            declaration: into_json_object(flatten_keys(declaration)),
            annotation: into_json_object(flatten_keys(annotation)),
        };

        store.upsert_event_action(&row).await?;
    }

    Ok(())
}

/// Collects a flat field map into a JSON object value for storage.
fn into_json_object(record: HashMap<String, Value>) -> Value {
    Value::Object(record.into_iter().collect::<Map<String, Value>>())
}
