//! Postgres client and analytics store for the registry pipeline.

pub mod client;
pub mod config;
pub mod health;
pub mod rows;
pub mod schema;
pub mod store;

pub use client::*;
pub use config::*;
pub use rows::*;
pub use store::AnalyticsStore;
