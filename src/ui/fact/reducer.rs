use crate::ui::mvi::Reducer;

use super::intent::FactIntent;
use super::state::{FactState, FactStatus};

/// Reducer for fact-fetch transitions.
///
/// Completions are only accepted while `Loading`; anything else is a late
/// or duplicate result and leaves the state untouched.
pub struct FactReducer;

impl Reducer for FactReducer {
    type State = FactState;
    type Intent = FactIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FactIntent::Request => FactState {
                status: FactStatus::Loading,
                error: None,
                ..state
            },

            FactIntent::Succeeded { text } if state.is_loading() => FactState {
                status: FactStatus::Loaded,
                text: Some(text),
                error: None,
            },

            // The previous fact stays visible next to the failure.
            FactIntent::Failed { failure } if state.is_loading() => FactState {
                status: FactStatus::Failed,
                error: Some(failure),
                ..state
            },

            FactIntent::Succeeded { .. } | FactIntent::Failed { .. } => state,
        }
    }
}
