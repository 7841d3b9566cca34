//! Data core of the OneBusAway transit app.
//!
//! This crate keeps a region-scoped SQLite cache of OneBusAway data in sync with the
//! OneBusAway REST API. Screens obtain their data through a
//! [`service::orchestrator::FetchOrchestrator`], which refreshes the cache from the API and
//! then reads it, falling back to cached data when the device is offline. Region stores are
//! created lazily and shared through the
//! [`service::persistence::region::RegionPersistenceRegistry`].

pub mod api;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod util;
