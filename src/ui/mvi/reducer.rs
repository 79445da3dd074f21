//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// The only place state transitions happen: `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Must not perform side effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

/// Runs a reducer over a controller's state field in place.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer as $crate::ui::mvi::Reducer>::reduce(
            std::mem::take(&mut $self.$field),
            $intent,
        );
    };
}

pub(crate) use dispatch_mvi;
