use crate::ui::mvi::Reducer;

use super::intent::LikeIntent;
use super::state::LikeState;

pub struct LikeReducer;

impl Reducer for LikeReducer {
    type State = LikeState;
    type Intent = LikeIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LikeIntent::Like => LikeState {
                count: state.count.saturating_add(1),
                acknowledging: true,
            },
            LikeIntent::AcknowledgmentExpired => LikeState {
                acknowledging: false,
                ..state
            },
        }
    }
}
