//! Test fixtures and event history generators.

use chrono::{DateTime, Duration, TimeZone, Utc};
use registry_core::{ActionDocument, ActionStatus, ActionType, EventDocument};
use serde_json::Value;
use std::collections::HashMap;
use uuid::Uuid;

/// Base instant all fixture timestamps offset from.
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap()
}

/// Timestamp `minutes` after the base instant.
pub fn minutes_after(minutes: i64) -> DateTime<Utc> {
    base_time() + Duration::minutes(minutes)
}

/// An accepted action with an empty declaration.
pub fn action(action_type: ActionType, created_at: DateTime<Utc>) -> ActionDocument {
    ActionDocument {
        id: Uuid::new_v4(),
        action_type,
        status: ActionStatus::Accepted,
        created_at,
        created_by: Some("user-1".to_string()),
        created_at_location: Some("loc-1".to_string()),
        original_action_id: None,
        declaration: HashMap::new(),
        annotation: None,
    }
}

/// An accepted action carrying the given declaration fields.
pub fn action_with_declaration(
    action_type: ActionType,
    created_at: DateTime<Utc>,
    fields: &[(&str, Value)],
) -> ActionDocument {
    let mut doc = action(action_type, created_at);
    doc.declaration = fields
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect();
    doc
}

/// An action with a non-accepted status.
pub fn action_with_status(
    action_type: ActionType,
    status: ActionStatus,
    created_at: DateTime<Utc>,
) -> ActionDocument {
    let mut doc = action(action_type, created_at);
    doc.status = status;
    doc
}

/// A birth event with the given action history.
pub fn birth_event(actions: Vec<ActionDocument>) -> EventDocument {
    event_of_type("birth", actions)
}

/// An event of an arbitrary type tag with the given action history.
pub fn event_of_type(event_type: &str, actions: Vec<ActionDocument>) -> EventDocument {
    EventDocument {
        id: Uuid::new_v4(),
        event_type: event_type.to_string(),
        tracking_id: Some("B7DQNGB".to_string()),
        actions,
    }
}

/// A minimal CREATE + DECLARE birth history declaring the given fields.
pub fn declared_birth(fields: &[(&str, Value)]) -> EventDocument {
    birth_event(vec![
        action(ActionType::Create, base_time()),
        action_with_declaration(ActionType::Declare, minutes_after(10), fields),
    ])
}
