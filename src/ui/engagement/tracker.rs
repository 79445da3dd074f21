use std::time::Duration;

use tracing::debug;

use crate::timer::TimerHandle;
use crate::ui::events::{EventSender, SessionEvent};
use crate::ui::mvi::dispatch_mvi;

use super::intent::LikeIntent;
use super::reducer::LikeReducer;
use super::state::LikeState;

pub const DEFAULT_ACK_WINDOW: Duration = Duration::from_secs(3);

/// Owns the like counter and its single pending expiry timer.
///
/// Each like bumps `generation` and replaces the stored timer, which aborts
/// the previous one. An expiry that was already queued before the abort
/// carries an old generation and is ignored, so the window always ends
/// `window` after the most recent like.
pub struct EngagementTracker {
    state: LikeState,
    window: Duration,
    generation: u64,
    expiry: Option<TimerHandle>,
    events: EventSender,
}

impl EngagementTracker {
    pub fn new(window: Duration, events: EventSender) -> Self {
        Self {
            state: LikeState::default(),
            window,
            generation: 0,
            expiry: None,
            events,
        }
    }

    pub fn state(&self) -> &LikeState {
        &self.state
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn like(&mut self) {
        dispatch_mvi!(self, state, LikeReducer, LikeIntent::Like);
        self.generation = self.generation.wrapping_add(1);
        self.expiry = Some(TimerHandle::once(
            self.window,
            self.events.clone(),
            SessionEvent::LikeExpired {
                generation: self.generation,
            },
        ));
        debug!(
            count = self.state.count,
            generation = self.generation,
            "like registered"
        );
    }

    /// Apply an expiry. Returns false when it belonged to a superseded like.
    pub fn on_expired(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.expiry.is_none() {
            debug!(generation, current = self.generation, "ignoring stale like expiry");
            return false;
        }
        self.expiry = None;
        dispatch_mvi!(self, state, LikeReducer, LikeIntent::AcknowledgmentExpired);
        true
    }

    /// Cancel the pending expiry. The acknowledgment flag is left as is.
    pub fn shutdown(&mut self) {
        self.expiry = None;
    }
}
