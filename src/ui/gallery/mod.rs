//! Rotating image gallery.
//!
//! - `state.rs` - Images, current index, auto-advance switch
//! - `intent.rs` - Select / advance / toggle auto-advance
//! - `reducer.rs` - State transitions
//! - `selector.rs` - Owns the auto-advance ticker

mod intent;
mod reducer;
mod selector;
mod state;

pub use intent::GalleryIntent;
pub use reducer::GalleryReducer;
pub use selector::{GalleryError, GallerySelector, DEFAULT_ADVANCE_INTERVAL};
pub use state::GalleryState;
