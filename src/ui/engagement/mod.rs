//! Like counter with a transient acknowledgment.
//!
//! - `state.rs` - Counter snapshot
//! - `intent.rs` - Like pressed / window expired
//! - `reducer.rs` - State transitions
//! - `tracker.rs` - Owns the expiry timer

mod intent;
mod reducer;
mod state;
mod tracker;

pub use intent::LikeIntent;
pub use reducer::LikeReducer;
pub use state::LikeState;
pub use tracker::{EngagementTracker, DEFAULT_ACK_WINDOW};
