//! Analytics field selection, annotation resolution, and key flattening.

use crate::event::ActionDocument;
use crate::form::FieldConfig;
use serde_json::Value;
use std::collections::{HashMap, HashSet};

/// Keep only the keys whose schema definition is flagged analytics-eligible.
///
/// Selection is an allow-list: keys without a matching eligible definition
/// are dropped, including keys the schema does not know at all. This is the
/// privacy boundary of the pipeline; nothing reaches the reporting store
/// unless the schema author opted it in.
pub fn select_analytics_fields<'a>(
    record: &HashMap<String, Value>,
    definitions: impl IntoIterator<Item = &'a FieldConfig>,
) -> HashMap<String, Value> {
    let eligible: HashSet<&str> = definitions
        .into_iter()
        .filter(|field| field.analytics)
        .map(|field| field.id.as_str())
        .collect();

    record
        .iter()
        .filter(|(key, _)| eligible.contains(key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Merge an action's annotation over the annotation of the action it was
/// derived from, if any.
///
/// The original action's fields come first, then the current action's fields
/// override same-named keys. A missing back-reference or an absent
/// annotation is treated as empty, never an error.
pub fn resolve_annotation(
    action: &ActionDocument,
    all_actions: &[ActionDocument],
) -> HashMap<String, Value> {
    let mut merged = HashMap::new();

    if let Some(original_id) = action.original_action_id {
        let original = all_actions.iter().find(|a| a.id == original_id);
        if let Some(annotation) = original.and_then(|a| a.annotation.as_ref()) {
            merged.extend(annotation.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
    }

    if let Some(annotation) = &action.annotation {
        merged.extend(annotation.iter().map(|(k, v)| (k.clone(), v.clone())));
    }

    merged
}

/// Rewrite dotted keys into their flat-storage form (`a.b` → `a_b`).
///
/// Keys without dots pass through unchanged; values are untouched.
pub fn flatten_keys(record: HashMap<String, Value>) -> HashMap<String, Value> {
    record
        .into_iter()
        .map(|(key, value)| (key.replace('.', "_"), value))
        .collect()
}
