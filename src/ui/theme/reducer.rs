use crate::ui::mvi::Reducer;

use super::intent::ThemeIntent;
use super::state::ThemeState;

pub struct ThemeReducer;

impl Reducer for ThemeReducer {
    type State = ThemeState;
    type Intent = ThemeIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ThemeIntent::Restore { mode } => ThemeState { mode },
            ThemeIntent::Toggle => ThemeState {
                mode: state.mode.toggled(),
            },
        }
    }
}
