//! Test fixture modules for database and HTTP mock creation.
//!
//! - `oba` - OneBusAway entities (agencies, routes, stops, trips, trip details) as JSON
//!   payloads, cached database rows, and mock REST endpoints

pub mod oba;
