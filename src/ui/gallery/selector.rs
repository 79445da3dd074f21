use std::time::Duration;

use thiserror::Error;
use tracing::{debug, warn};

use crate::timer::TimerHandle;
use crate::ui::events::{EventSender, SessionEvent};
use crate::ui::mvi::dispatch_mvi;

use super::intent::GalleryIntent;
use super::reducer::GalleryReducer;
use super::state::GalleryState;

pub const DEFAULT_ADVANCE_INTERVAL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GalleryError {
    #[error("Gallery needs at least one image")]
    Empty,

    #[error("Image index {index} out of range (gallery has {len} images)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Auto-advance interval must be greater than zero")]
    ZeroInterval,
}

/// Owns the gallery position and the optional auto-advance ticker.
///
/// The ticker is re-armed on every manual selection, so the image the
/// visitor picked stays up for a full period. Ticks from a ticker that has
/// since been replaced carry an old generation and are ignored.
pub struct GallerySelector {
    state: GalleryState,
    interval: Duration,
    generation: u64,
    ticker: Option<TimerHandle>,
    events: EventSender,
}

impl GallerySelector {
    /// Must be called from within a tokio runtime when `auto_advance` is set.
    pub fn new(
        images: Vec<String>,
        auto_advance: bool,
        interval: Duration,
        events: EventSender,
    ) -> Result<Self, GalleryError> {
        if images.is_empty() {
            return Err(GalleryError::Empty);
        }
        if interval.is_zero() {
            return Err(GalleryError::ZeroInterval);
        }

        let mut selector = Self {
            state: GalleryState {
                images,
                current_index: 0,
                auto_advance_enabled: false,
            },
            interval,
            generation: 0,
            ticker: None,
            events,
        };
        selector.set_auto_advance(auto_advance);
        Ok(selector)
    }

    pub fn state(&self) -> &GalleryState {
        &self.state
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn select(&mut self, index: usize) -> Result<(), GalleryError> {
        let len = self.state.len();
        if index >= len {
            warn!(index, len, "rejected out-of-range gallery selection");
            return Err(GalleryError::IndexOutOfRange { index, len });
        }

        dispatch_mvi!(self, state, GalleryReducer, GalleryIntent::Select { index });
        if self.state.auto_advance_enabled {
            self.rearm();
        }
        Ok(())
    }

    /// Move to the next image, wrapping. No-op while auto-advance is off.
    pub fn advance_if_due(&mut self) {
        dispatch_mvi!(self, state, GalleryReducer, GalleryIntent::Advance);
    }

    pub fn set_auto_advance(&mut self, enabled: bool) {
        dispatch_mvi!(
            self,
            state,
            GalleryReducer,
            GalleryIntent::SetAutoAdvance { enabled }
        );
        if enabled {
            self.rearm();
        } else {
            self.generation = self.generation.wrapping_add(1);
            self.ticker = None;
        }
        debug!(enabled, "gallery auto-advance switched");
    }

    /// Apply a ticker firing. Returns false when the tick was stale.
    pub fn on_tick(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.ticker.is_none() {
            debug!(generation, current = self.generation, "ignoring stale gallery tick");
            return false;
        }
        self.advance_if_due();
        true
    }

    pub fn shutdown(&mut self) {
        self.ticker = None;
    }

    fn rearm(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        let generation = self.generation;
        self.ticker = Some(TimerHandle::repeating(
            self.interval,
            self.events.clone(),
            move || SessionEvent::GalleryTick { generation },
        ));
    }
}
