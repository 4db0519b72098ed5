//! Event and action documents of the registration event log.
//!
//! These mirror the wire shape produced by the upstream event-sourcing
//! service: an event is an identity plus an append-only list of actions,
//! each action carrying a partial declaration snapshot and optional
//! supplementary annotation data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use uuid::Uuid;

/// Event type tags for the shipped registration events.
pub mod event_types {
    pub const BIRTH: &str = "birth";
    pub const DEATH: &str = "death";
    pub const TENNIS_CLUB_MEMBERSHIP: &str = "tennis-club-membership";

    /// All shipped event type tags.
    pub const ALL: &[&str] = &[BIRTH, DEATH, TENNIS_CLUB_MEMBERSHIP];
}

/// Action types an event history can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    Create,
    Notify,
    Declare,
    Validate,
    Register,
    Read,
    Assign,
    Unassign,
    PrintCertificate,
    RequestCorrection,
    ApproveCorrection,
    RejectCorrection,
    Archive,
}

impl ActionType {
    /// Wire name of the action type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Notify => "NOTIFY",
            Self::Declare => "DECLARE",
            Self::Validate => "VALIDATE",
            Self::Register => "REGISTER",
            Self::Read => "READ",
            Self::Assign => "ASSIGN",
            Self::Unassign => "UNASSIGN",
            Self::PrintCertificate => "PRINT_CERTIFICATE",
            Self::RequestCorrection => "REQUEST_CORRECTION",
            Self::ApproveCorrection => "APPROVE_CORRECTION",
            Self::RejectCorrection => "REJECT_CORRECTION",
            Self::Archive => "ARCHIVE",
        }
    }
}

/// Outcome status of an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionStatus {
    Requested,
    Accepted,
    Rejected,
}

impl ActionStatus {
    /// Wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Requested => "Requested",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
        }
    }
}

/// A single state transition in an event's history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionDocument {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub action_type: ActionType,
    pub status: ActionStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub created_at_location: Option<String>,
    /// Back-reference to the action this one corrects or supersedes.
    #[serde(default)]
    pub original_action_id: Option<Uuid>,
    /// Partial declaration snapshot; may add or override prior fields.
    #[serde(default)]
    pub declaration: HashMap<String, Value>,
    /// Supplementary per-action data (certificate collector details, etc).
    #[serde(default)]
    pub annotation: Option<HashMap<String, Value>>,
}

/// An event's identity plus its ordered action history.
///
/// Invariant: exactly one action has type CREATE.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDocument {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub tracking_id: Option<String>,
    pub actions: Vec<ActionDocument>,
}
