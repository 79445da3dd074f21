//! Scroll- and visibility-driven animation parameters.

mod driver;
mod intent;
mod reducer;
mod state;

pub use driver::ScrollAnimationDriver;
pub use intent::ScrollIntent;
pub use reducer::ScrollReducer;
pub use state::{ScrollAnimState, ScrollCurve};
