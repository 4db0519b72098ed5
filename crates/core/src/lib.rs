//! Core types, form schemas, and replay logic for the registry analytics pipeline.

pub mod derive;
pub mod error;
pub mod event;
pub mod fields;
pub mod form;
pub mod registry;
pub mod state;

pub use derive::derive_fields;
pub use error::{Error, Result};
pub use event::*;
pub use fields::{flatten_keys, resolve_annotation, select_analytics_fields};
pub use form::*;
pub use registry::EventConfigRegistry;
pub use state::{current_state, replay_order, state_as_of, EventState};
