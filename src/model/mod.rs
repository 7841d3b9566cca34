//! Data models shared across the crate.
//!
//! Contains the OneBusAway REST API payload types, region identifiers, the application
//! context handed to loaders, fetch results published by the orchestrator, and the read
//! models assembled from the local cache for individual screens.

pub mod api;
pub mod app;
pub mod fetch;
pub mod region;
pub mod situation;
pub mod stop;
pub mod trip;
