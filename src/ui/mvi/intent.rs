//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents are either visitor actions (like pressed, image selected) or
/// system events (timer expired, fetch resolved). Reducers consume them.
pub trait Intent: Send + 'static {}
