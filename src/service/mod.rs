//! Services coordinating the API client, the region stores, and the orchestrator.
//!
//! - `persistence` - region-scoped local stores and their registry
//! - `orchestrator` - remote-then-local load cycles for a screen
//! - `agency`, `stop`, `trip` - the fetch hooks of the agencies list, stop detail, and
//!   trip detail screens

pub mod agency;
pub mod orchestrator;
pub mod persistence;
pub mod stop;
pub mod trip;
