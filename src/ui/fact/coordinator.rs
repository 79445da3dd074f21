use std::sync::Arc;

use tokio::task::{AbortHandle, JoinHandle};
use tracing::{debug, info, warn};

use crate::fact_source::{FactError, FactSource};
use crate::ui::events::{EventSender, SessionEvent};
use crate::ui::mvi::dispatch_mvi;

use super::intent::FactIntent;
use super::reducer::FactReducer;
use super::state::{FactFailure, FactState};

/// Owns the fact state and at most one in-flight request.
///
/// Requests are suppressed, not queued, while one is pending. Each request
/// is tagged with an epoch; completions from an older epoch are dropped.
/// The fetch runs in its own task so a panicking source still resolves the
/// request as a failure.
pub struct FactFetchCoordinator {
    state: FactState,
    source: Arc<dyn FactSource>,
    epoch: u64,
    in_flight: Option<InFlight>,
    events: EventSender,
}

struct InFlight {
    reporter: JoinHandle<()>,
    fetch: AbortHandle,
}

impl FactFetchCoordinator {
    /// Create the coordinator and start the one automatic fetch.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(source: Arc<dyn FactSource>, events: EventSender) -> Self {
        let mut coordinator = Self {
            state: FactState::default(),
            source,
            epoch: 0,
            in_flight: None,
            events,
        };
        coordinator.request_fact();
        coordinator
    }

    pub fn state(&self) -> &FactState {
        &self.state
    }

    /// Epoch of the most recent request.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Start a fetch unless one is already pending.
    ///
    /// Returns whether a request was issued.
    pub fn request_fact(&mut self) -> bool {
        if self.state.is_loading() {
            debug!(epoch = self.epoch, "fact request suppressed, fetch in flight");
            return false;
        }

        self.epoch = self.epoch.wrapping_add(1);
        dispatch_mvi!(self, state, FactReducer, FactIntent::Request);

        let epoch = self.epoch;
        let source = Arc::clone(&self.source);
        let events = self.events.clone();
        let name = source.name();
        debug!(epoch, source = name, "requesting fact");
        let fetch = tokio::spawn(async move { source.fetch().await });
        let fetch_abort = fetch.abort_handle();
        let reporter = tokio::spawn(async move {
            let result = match fetch.await {
                Ok(result) => result,
                Err(err) if err.is_cancelled() => return,
                Err(_) => Err(FactError::Panicked { name }),
            };
            let _ = events.send(SessionEvent::FactResolved { epoch, result });
        });
        self.in_flight = Some(InFlight {
            reporter,
            fetch: fetch_abort,
        });
        true
    }

    /// Apply a fetch result. Returns false when it was stale and discarded.
    pub fn on_resolved(&mut self, epoch: u64, result: Result<String, FactError>) -> bool {
        if epoch != self.epoch || !self.state.is_loading() {
            debug!(epoch, current = self.epoch, "discarding stale fact result");
            return false;
        }
        self.in_flight = None;

        match result {
            Ok(text) => {
                info!(epoch, "fact loaded");
                dispatch_mvi!(self, state, FactReducer, FactIntent::Succeeded { text });
            }
            Err(err) => {
                warn!(epoch, error_type = err.error_type(), "fact fetch failed: {}", err);
                let failure = FactFailure::from(&err);
                dispatch_mvi!(self, state, FactReducer, FactIntent::Failed { failure });
            }
        }
        true
    }

    /// Abort the in-flight request. Its result, if any, is never applied.
    pub fn shutdown(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.fetch.abort();
            in_flight.reporter.abort();
        }
    }
}

impl Drop for FactFetchCoordinator {
    fn drop(&mut self) {
        self.shutdown();
    }
}
