use std::path::PathBuf;
use thiserror::Error;

/// Errors from a preference store.
#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("Failed to read preferences '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse preferences '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize preferences: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to write preferences '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Preference store unavailable: {0}")]
    Unavailable(String),
}
