//! Event-type-specific derived analytics fields.
//!
//! Each supported event type gets one pure rule folding extra fields into an
//! already-selected declaration snapshot. Types without a rule pass the
//! snapshot through unchanged; new types add a match arm here.

use crate::event::{event_types, ActionDocument};
use chrono::NaiveDate;
use serde_json::Value;
use std::collections::HashMap;

/// Declaration key holding the child's date of birth on birth events.
pub const CHILD_DOB: &str = "child.dob";
/// Derived key: child age in whole days at the time of the action.
pub const CHILD_AGE_DAYS: &str = "child.age.days";

/// Fold event-type-specific derived fields into a declaration snapshot.
pub fn derive_fields(
    event_type: &str,
    action: &ActionDocument,
    declaration: HashMap<String, Value>,
) -> HashMap<String, Value> {
    match event_type {
        event_types::BIRTH => derive_birth_fields(action, declaration),
        _ => declaration,
    }
}

/// Birth rule: whole-day difference between the action's creation time and
/// the child's date of birth.
///
/// A missing or unparsable date of birth leaves the snapshot unchanged. A
/// negative age (action recorded before the stated date of birth, i.e. clock
/// skew) is stored as-is, not clamped.
fn derive_birth_fields(
    action: &ActionDocument,
    mut declaration: HashMap<String, Value>,
) -> HashMap<String, Value> {
    let Some(dob) = declaration.get(CHILD_DOB).and_then(Value::as_str) else {
        return declaration;
    };
    let Ok(date) = dob.parse::<NaiveDate>() else {
        return declaration;
    };
    let Some(midnight) = date.and_hms_opt(0, 0, 0) else {
        return declaration;
    };

    let age_days = (action.created_at - midnight.and_utc()).num_days();
    declaration.insert(CHILD_AGE_DAYS.to_string(), Value::from(age_days));
    declaration
}
