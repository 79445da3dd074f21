use tracing::debug;

use crate::ui::mvi::dispatch_mvi;

use super::intent::ScrollIntent;
use super::reducer::ScrollReducer;
use super::state::{ScrollAnimState, ScrollCurve};

/// Derives header animation values from scroll and intersection callbacks.
///
/// Purely input-driven: no timers, every call recomputes synchronously.
pub struct ScrollAnimationDriver {
    state: ScrollAnimState,
    curve: ScrollCurve,
}

impl ScrollAnimationDriver {
    pub fn new(curve: ScrollCurve) -> Self {
        Self {
            state: ScrollAnimState::default(),
            curve,
        }
    }

    pub fn state(&self) -> &ScrollAnimState {
        &self.state
    }

    pub fn curve(&self) -> ScrollCurve {
        self.curve
    }

    pub fn on_scroll(&mut self, position: f32) {
        let curve = self.curve;
        dispatch_mvi!(
            self,
            state,
            ScrollReducer,
            ScrollIntent::Scrolled { position, curve }
        );
    }

    /// Returns true the first time `section_id` is seen.
    pub fn on_section_visible(&mut self, section_id: &str) -> bool {
        if self.state.is_revealed(section_id) {
            return false;
        }
        debug!(section_id, "section revealed");
        dispatch_mvi!(
            self,
            state,
            ScrollReducer,
            ScrollIntent::SectionVisible {
                section_id: section_id.to_string()
            }
        );
        true
    }
}

impl Default for ScrollAnimationDriver {
    fn default() -> Self {
        Self::new(ScrollCurve::default())
    }
}
