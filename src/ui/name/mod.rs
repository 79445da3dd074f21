//! Randomized display names.

mod composer;
mod random;

pub use composer::{GeneratedName, NameComposer, NameError, WordPools};
pub use random::{RandomSource, ScriptedSource, ThreadRngSource};
