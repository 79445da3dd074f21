//! Fact-fetch lifecycle: idle → loading → loaded / failed, re-enterable.
//!
//! - `state.rs` - Status, last fact text, failure descriptor
//! - `intent.rs` - Request / success / failure
//! - `reducer.rs` - State transitions
//! - `coordinator.rs` - Owns the in-flight request task

mod coordinator;
mod intent;
mod reducer;
mod state;

pub use coordinator::FactFetchCoordinator;
pub use intent::FactIntent;
pub use reducer::FactReducer;
pub use state::{FactFailure, FactFailureKind, FactState, FactStatus};
