//! Error types for the OBAKit data core.
//!
//! This module provides the error handling system for the crate, with specialized error
//! types for configuration, the OneBusAway REST API and the region-scoped local stores.
//! All errors use `thiserror` for `Display` and `Error` implementations and convert into
//! the aggregate [`Error`] via `?`.

pub mod api;
pub mod config;
pub mod persistence;

use thiserror::Error;

use crate::error::{api::ApiError, config::ConfigError, persistence::PersistenceError};

/// Main error type for the OBAKit data core.
///
/// Aggregates all domain-specific error types and external library errors into a single
/// type. `#[from]` conversions let every layer propagate with the `?` operator.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - OneBusAway API errors (unexpected response codes, missing API service)
/// - Persistence errors (a region's local store could not be opened)
/// - External library errors (HTTP transport and response decoding, database)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// OneBusAway API error (non-success envelope code, no API service configured).
    #[error(transparent)]
    ApiError(#[from] ApiError),
    /// Local store error (store initialization for a region failed).
    #[error(transparent)]
    PersistenceError(#[from] PersistenceError),
    /// HTTP error (connection failures, timeouts, non-2xx HTTP status, malformed bodies).
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
