//! Registered mapping from event-type tag to event config.

use crate::form::EventConfig;
use std::collections::HashMap;

/// Lookup of event configs keyed by event-type tag.
///
/// New event types are supported by registering their config; nothing else
/// in the pipeline switches on concrete types.
#[derive(Debug, Default)]
pub struct EventConfigRegistry {
    configs: HashMap<String, EventConfig>,
}

impl EventConfigRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a config under its own id; replaces any previous entry.
    pub fn register(&mut self, config: EventConfig) {
        self.configs.insert(config.id.clone(), config);
    }

    /// Look up the config for an event-type tag.
    pub fn get(&self, event_type: &str) -> Option<&EventConfig> {
        self.configs.get(event_type)
    }

    /// Registered event-type tags.
    pub fn event_types(&self) -> impl Iterator<Item = &str> {
        self.configs.keys().map(String::as_str)
    }
}
