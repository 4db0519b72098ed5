//! Shipped event form schemas.
//!
//! One module per event type; `default_registry` wires them all into the
//! lookup the import pipeline uses.

pub mod birth;
pub mod death;
pub mod membership;

pub use birth::birth_event;
pub use death::death_event;
pub use membership::tennis_club_membership_event;

use registry_core::EventConfigRegistry;

/// Registry with every shipped event config registered.
pub fn default_registry() -> EventConfigRegistry {
    let mut registry = EventConfigRegistry::new();
    registry.register(birth_event());
    registry.register(death_event());
    registry.register(tennis_club_membership_event());
    registry
}
