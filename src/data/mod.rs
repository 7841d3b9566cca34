//! Region cache repositories.
//!
//! This module contains one repository per cached OneBusAway entity (agencies, routes,
//! stops, trips, trip details). Each repository upserts API payloads into the region's
//! local store and answers the lookups the loaders need. Repositories are generic over
//! [`sea_orm::ConnectionTrait`] so they work on a connection or inside a transaction.

pub mod agency;
pub mod route;
pub mod situation;
pub mod stop;
pub mod trip;
pub mod trip_details;

#[cfg(test)]
mod tests;

/// Maximum rows written per insert statement, keeping bind parameters under SQLite's limit.
pub(crate) const BATCH_SIZE: usize = 100;

/// OneBusAway encodes absent optional strings as `""`.
pub(crate) fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
