//! Remote-then-local load orchestration.
//!
//! A [`FetchOrchestrator`] drives the loads of one screen. Each load cycle first refreshes
//! the local cache from the remote API, then reads the cache, and publishes the reconciled
//! [`FetchResult`]. A failed refresh only marks the result as offline; a failed cache read
//! fails the load. At most one cycle is in flight per orchestrator: starting a new load
//! cancels the previous one, and dropping the orchestrator cancels whatever is running.


use std::{
    future::Future,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use dioxus_logger::tracing;
use futures::future::{BoxFuture, FutureExt};
use tokio::{sync::watch, task::JoinHandle};
use tokio_util::sync::CancellationToken;

use crate::{
    error::Error,
    model::fetch::{CycleOutcome, FetchOutcome, FetchResult, LoadStatus},
};

/// Refreshes the local cache from the remote API.
pub type RemoteFetch =
    Box<dyn Fn(CancellationToken) -> BoxFuture<'static, Result<(), Error>> + Send + Sync>;

/// Reads the screen's data from the local cache.
pub type LocalFetch<T> =
    Box<dyn Fn(CancellationToken) -> BoxFuture<'static, Result<Option<T>, Error>> + Send + Sync>;

/// Called after every load cycle that stored an outcome.
pub type OutcomeHook = Box<dyn Fn() + Send + Sync>;

pub struct FetchOrchestrator<T> {
    inner: Arc<FetchOrchestratorRef<T>>,
}

struct FetchOrchestratorRef<T> {
    fetch_remote: RemoteFetch,
    fetch_local: LocalFetch<T>,
    on_outcome_updated: OutcomeHook,
    state: Mutex<LoadState<T>>,
    status: watch::Sender<LoadStatus>,
    /// Parent of every cycle token, cancelled when the orchestrator is dropped.
    teardown: CancellationToken,
}

struct LoadState<T> {
    /// Incremented for every started cycle; only the newest cycle may store its outcome.
    generation: u64,
    /// Token of the in-flight cycle, `None` when idle.
    cancel: Option<CancellationToken>,
    outcome: Option<FetchOutcome<T>>,
}

impl<T> FetchOrchestrator<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create an orchestrator from its collaborator hooks
    ///
    /// # Arguments
    /// - `fetch_remote`: Refreshes the cache, an error marks the cycle's result as offline
    /// - `fetch_local`: Reads the cache, an error fails the cycle
    /// - `on_outcome_updated`: Notified after each cycle that stored an outcome
    pub fn new<R, RFut, L, LFut, H>(fetch_remote: R, fetch_local: L, on_outcome_updated: H) -> Self
    where
        R: Fn(CancellationToken) -> RFut + Send + Sync + 'static,
        RFut: Future<Output = Result<(), Error>> + Send + 'static,
        L: Fn(CancellationToken) -> LFut + Send + Sync + 'static,
        LFut: Future<Output = Result<Option<T>, Error>> + Send + 'static,
        H: Fn() + Send + Sync + 'static,
    {
        let (status, _) = watch::channel(LoadStatus::Idle);

        Self {
            inner: Arc::new(FetchOrchestratorRef {
                fetch_remote: Box::new(move |token| fetch_remote(token).boxed()),
                fetch_local: Box::new(move |token| fetch_local(token).boxed()),
                on_outcome_updated: Box::new(on_outcome_updated),
                state: Mutex::new(LoadState {
                    generation: 0,
                    cancel: None,
                    outcome: None,
                }),
                status,
                teardown: CancellationToken::new(),
            }),
        }
    }

    /// Start a load cycle on the Tokio runtime
    ///
    /// A cycle already in flight is cancelled first and never stores its outcome.
    ///
    /// # Returns
    /// Handle resolving to how the spawned cycle ended
    pub fn start_load(&self) -> JoinHandle<CycleOutcome> {
        let (generation, token) = self.inner.begin_cycle();
        let inner = self.inner.clone();

        tokio::spawn(async move { inner.run_cycle(generation, token).await })
    }

    /// Run a load cycle to completion on the current task
    ///
    /// Same semantics as [`start_load`](Self::start_load), a later `start_load` or
    /// `cancel_load` supersedes this cycle.
    pub async fn load(&self) -> CycleOutcome {
        let (generation, token) = self.inner.begin_cycle();

        self.inner.run_cycle(generation, token).await
    }

    /// Cancel the in-flight load, if any
    ///
    /// The last stored outcome is kept and the status falls back to it.
    pub fn cancel_load(&self) {
        let mut state = self.inner.lock_state();

        if self.inner.release_cycle(&mut state) {
            tracing::debug!("Cancelled load cycle");
        }
    }

    /// Data of the last successful load
    pub fn current_data(&self) -> Option<T> {
        match &self.inner.lock_state().outcome {
            Some(Ok(result)) => result.data.clone(),
            _ => None,
        }
    }

    /// Error of the last load, if it failed
    pub fn current_error(&self) -> Option<Arc<Error>> {
        match &self.inner.lock_state().outcome {
            Some(Err(e)) => Some(e.clone()),
            _ => None,
        }
    }

    /// Last stored outcome
    pub fn outcome(&self) -> Option<FetchOutcome<T>> {
        self.inner.lock_state().outcome.clone()
    }

    pub fn status(&self) -> LoadStatus {
        *self.inner.status.borrow()
    }

    /// Receiver notified on every status change
    pub fn subscribe(&self) -> watch::Receiver<LoadStatus> {
        self.inner.status.subscribe()
    }
}

impl<T> FetchOrchestratorRef<T> {
    fn lock_state(&self) -> MutexGuard<'_, LoadState<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Cancel the in-flight cycle and fall back to the status of the last outcome
    ///
    /// # Returns
    /// `true` if a cycle was in flight
    fn release_cycle(&self, state: &mut LoadState<T>) -> bool {
        let Some(token) = state.cancel.take() else {
            return false;
        };

        token.cancel();
        state.generation += 1;
        self.status.send_replace(LoadStatus::of(state.outcome.as_ref()));

        true
    }
}

impl<T> FetchOrchestratorRef<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Cancel the running cycle and register a new one
    fn begin_cycle(&self) -> (u64, CancellationToken) {
        let mut state = self.lock_state();

        if let Some(previous) = state.cancel.take() {
            previous.cancel();
            tracing::debug!("Restarting load, cancelled cycle {}", state.generation);
        }

        state.generation += 1;
        let token = self.teardown.child_token();
        state.cancel = Some(token.clone());

        self.status.send_replace(LoadStatus::Loading);

        (state.generation, token)
    }

    async fn run_cycle(&self, generation: u64, token: CancellationToken) -> CycleOutcome {
        let _guard = CycleGuard {
            inner: self,
            generation,
        };

        let remote = tokio::select! {
            biased;
            _ = token.cancelled() => return CycleOutcome::Cancelled,
            result = (self.fetch_remote)(token.clone()) => result,
        };

        if let Err(e) = &remote {
            tracing::warn!("Remote fetch failed, serving cached data: {}", e);
        }

        let local = tokio::select! {
            biased;
            _ = token.cancelled() => return CycleOutcome::Cancelled,
            result = (self.fetch_local)(token.clone()) => result,
        };

        let outcome = match local {
            Ok(data) => Ok(FetchResult {
                is_offline: remote.is_err(),
                data,
            }),
            Err(e) => {
                tracing::error!("Failed to read local cache: {}", e);
                Err(Arc::new(e))
            }
        };

        {
            let mut state = self.lock_state();

            if state.generation != generation || token.is_cancelled() {
                return CycleOutcome::Cancelled;
            }

            state.cancel = None;
            self.status.send_replace(LoadStatus::of(Some(&outcome)));
            state.outcome = Some(outcome);
        }

        (self.on_outcome_updated)();

        CycleOutcome::Published
    }
}

/// Releases a cycle whose future is dropped before it finishes, such as an abandoned
/// [`FetchOrchestrator::load`] or an aborted [`FetchOrchestrator::start_load`] task.
struct CycleGuard<'a, T> {
    inner: &'a FetchOrchestratorRef<T>,
    generation: u64,
}

impl<T> Drop for CycleGuard<'_, T> {
    fn drop(&mut self) {
        let mut state = self.inner.lock_state();

        // Finished and superseded cycles no longer own the in-flight slot
        if state.generation == self.generation && self.inner.release_cycle(&mut state) {
            tracing::debug!("Released abandoned load cycle {}", self.generation);
        }
    }
}

impl<T> Drop for FetchOrchestrator<T> {
    fn drop(&mut self) {
        self.inner.teardown.cancel();
    }
}
