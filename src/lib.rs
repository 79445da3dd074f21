//! Interaction state core for the Feline Fascination showcase page.
//!
//! Likes with a timed acknowledgment, a remotely fetched fact, a rotating
//! gallery, a persisted light/dark theme, randomized display names, and
//! scroll-driven header animation. Rendering is left to the caller.

pub mod config;
pub mod content;
pub mod driver;
pub mod fact_source;
pub mod logging;
pub mod preference;
pub mod timer;
pub mod ui;
