//! Batch jobs for the registry analytics pipeline.
//!
//! Handles the export workflows:
//! - Import (event action history → analytics rows)
//! - Locations (administrative hierarchy dimension sync)
//! - Statistics (yearly population measures sync)

pub mod import;
pub mod locations;
pub mod statistics;

pub use import::*;
pub use locations::{
    location_level_rows, sync_location_levels, upsert_admin_structure, AdminLevel,
};
pub use statistics::*;
