use crate::ui::mvi::Reducer;

use super::intent::GalleryIntent;
use super::state::GalleryState;

pub struct GalleryReducer;

impl Reducer for GalleryReducer {
    type State = GalleryState;
    type Intent = GalleryIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            GalleryIntent::Select { index } if index < state.images.len() => GalleryState {
                current_index: index,
                ..state
            },
            GalleryIntent::Select { .. } => state,

            // Presented as a loop: wrap rather than clamp.
            GalleryIntent::Advance if state.auto_advance_enabled && !state.images.is_empty() => {
                let next = if state.current_index + 1 >= state.images.len() {
                    0
                } else {
                    state.current_index + 1
                };
                GalleryState {
                    current_index: next,
                    ..state
                }
            }
            GalleryIntent::Advance => state,

            GalleryIntent::SetAutoAdvance { enabled } => GalleryState {
                auto_advance_enabled: enabled,
                ..state
            },
        }
    }
}
