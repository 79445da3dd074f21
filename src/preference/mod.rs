//! Key/value persistence for the visitor's display preferences.
//!
//! Only the theme mode is stored today. Callers treat every error as
//! "store unavailable" and fall back to in-memory behavior.

mod error;
mod file;
mod memory;

pub use error::PreferenceError;
pub use file::FilePreferenceStore;
pub use memory::MemoryPreferenceStore;

/// Minimal persisted key/value store.
pub trait PreferenceStore: Send + Sync {
    /// Returns `Ok(None)` when nothing is stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}
