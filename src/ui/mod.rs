//! Interaction state of the showcase page.
//!
//! One module per component, each split into state / intent / reducer plus
//! a controller that owns the component's side effects. [`Session`] builds
//! one of each and routes asynchronous events back to their owner.

pub mod engagement;
pub mod events;
pub mod fact;
pub mod gallery;
pub mod mvi;
pub mod name;
pub mod scroll;
pub mod session;
pub mod theme;

pub use session::{Session, SessionDeps, SessionError};
