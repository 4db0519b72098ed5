//! Form schema types.
//!
//! An event config is read-only declarative data: declaration pages whose
//! fields may be flagged analytics-eligible, and per-action configs whose
//! annotation fields may carry the same flag. The pipeline never renders or
//! validates forms; it only consults the flags.

use crate::event::ActionType;
use serde::{Deserialize, Serialize};

/// A translatable message (id plus source text).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub default_message: String,
}

impl Message {
    pub fn new(id: impl Into<String>, default_message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            default_message: default_message.into(),
        }
    }
}

/// A single form field definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    pub id: String,
    pub label: Message,
    /// Opted in to the reporting store.
    #[serde(default)]
    pub analytics: bool,
}

impl FieldConfig {
    /// New field, not analytics-eligible.
    pub fn new(id: impl Into<String>, label: Message) -> Self {
        Self {
            id: id.into(),
            label,
            analytics: false,
        }
    }

    /// Mark the field analytics-eligible.
    pub fn analytics(mut self) -> Self {
        self.analytics = true;
        self
    }
}

/// One page of a declaration form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormPage {
    pub id: String,
    pub title: Message,
    pub fields: Vec<FieldConfig>,
}

impl FormPage {
    pub fn new(id: impl Into<String>, title: Message, fields: Vec<FieldConfig>) -> Self {
        Self {
            id: id.into(),
            title,
            fields,
        }
    }
}

/// The declaration form of an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeclarationForm {
    pub label: Message,
    pub pages: Vec<FormPage>,
}

/// Per-action config: which annotation fields an action carries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionConfig {
    pub action_type: ActionType,
    pub label: Message,
    #[serde(default)]
    pub annotation_fields: Vec<FieldConfig>,
}

impl ActionConfig {
    pub fn new(action_type: ActionType, label: Message, annotation_fields: Vec<FieldConfig>) -> Self {
        Self {
            action_type,
            label,
            annotation_fields,
        }
    }
}

/// Immutable schema for one event type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventConfig {
    /// Event-type tag; also the registry key.
    pub id: String,
    pub label: Message,
    pub declaration: DeclarationForm,
    pub actions: Vec<ActionConfig>,
}

impl EventConfig {
    /// Every field across all declaration pages.
    pub fn declaration_fields(&self) -> impl Iterator<Item = &FieldConfig> {
        self.declaration.pages.iter().flat_map(|page| page.fields.iter())
    }

    /// Config for one action type, if the event declares it.
    pub fn action_config(&self, action_type: ActionType) -> Option<&ActionConfig> {
        self.actions.iter().find(|a| a.action_type == action_type)
    }
}
