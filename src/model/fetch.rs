//! Results published by the fetch orchestrator.

use std::sync::Arc;

use crate::error::Error;

/// Reconciled result of one load cycle.
///
/// `is_offline` is `true` when the remote refresh failed during the cycle, regardless of
/// whether cached data was found. `data` is whatever the local cache read produced.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchResult<T> {
    pub is_offline: bool,
    pub data: Option<T>,
}

/// Terminal result of a load cycle as stored by the orchestrator.
///
/// Errors are reference counted so the last outcome can be handed to several readers.
pub type FetchOutcome<T> = Result<FetchResult<T>, Arc<Error>>;

/// Lifecycle of an orchestrator's loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// No load has completed and none is running.
    Idle,
    /// A load cycle is in flight.
    Loading,
    /// The last completed load produced a [`FetchResult`].
    Succeeded,
    /// The last completed load failed because the cache could not be read.
    Failed,
}

impl LoadStatus {
    pub(crate) fn of<T>(outcome: Option<&FetchOutcome<T>>) -> Self {
        match outcome {
            None => LoadStatus::Idle,
            Some(Ok(_)) => LoadStatus::Succeeded,
            Some(Err(_)) => LoadStatus::Failed,
        }
    }
}

/// How a single load cycle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The cycle stored its outcome and notified the consumer.
    Published,
    /// The cycle was cancelled or superseded; nothing was stored.
    Cancelled,
}
