//! Internal telemetry for the registry analytics pipeline.
//!
//! Counters and latency histograms accumulate in-process; each CLI run logs
//! a summary instead of pushing to an external metrics system.

pub mod metrics;
pub mod tracing_setup;

pub use metrics::*;
pub use tracing_setup::*;
