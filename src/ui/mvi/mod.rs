//! Model-View-Intent (MVI) primitives shared by every showcase component.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ presentation layer
//!    ↑                                   │
//!    └───────────────────────────────────┘
//! ```
//!
//! Reducers are pure. Timers, fetches, and persistence live in the
//! component controllers that wrap them.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub(crate) use reducer::dispatch_mvi;
pub use state::UiState;
