//! Replay ordering and point-in-time declaration state.
//!
//! An event's cumulative declaration is never persisted; it is derived on
//! demand by replaying the action history up to a cut point. CREATE sorts
//! first regardless of timestamp as a tie-break against clock skew at
//! creation time.

use crate::event::{ActionDocument, ActionType, EventDocument};
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Cumulative declaration state reconstructed from an action history.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventState {
    pub declaration: HashMap<String, Value>,
}

/// Actions in replay order: CREATE first, everything else by ascending
/// creation time.
///
/// Returns a new sequence of references; the caller's action list is never
/// reordered. The sort is stable, so actions sharing a timestamp keep their
/// input order.
pub fn replay_order(actions: &[ActionDocument]) -> Vec<&ActionDocument> {
    let mut ordered: Vec<&ActionDocument> = actions.iter().collect();
    ordered.sort_by(|a, b| {
        let a_create = a.action_type == ActionType::Create;
        let b_create = b.action_type == ActionType::Create;
        match (a_create, b_create) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => a.created_at.cmp(&b.created_at),
        }
    });
    ordered
}

/// Declaration state after replaying the first `cut_index + 1` actions in
/// replay order.
///
/// Later actions override earlier ones per key; keys are never removed.
/// Recomputed from scratch per call, quadratic across an event's actions,
/// which is fine for histories bounded by a handful of lifecycle steps.
pub fn state_as_of(event: &EventDocument, cut_index: usize) -> EventState {
    let mut state = EventState::default();
    for action in replay_order(&event.actions).into_iter().take(cut_index + 1) {
        for (key, value) in &action.declaration {
            state.declaration.insert(key.clone(), value.clone());
        }
    }
    state
}

/// Declaration state after replaying the full history.
pub fn current_state(event: &EventDocument) -> EventState {
    if event.actions.is_empty() {
        return EventState::default();
    }
    state_as_of(event, event.actions.len() - 1)
}
