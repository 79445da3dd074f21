//! Failure causes of a fact fetch.

use thiserror::Error;

/// Errors that can occur while retrieving a fact.
///
/// None of these are fatal: the coordinator turns them into a `Failed`
/// state and waits for the visitor to ask again.
#[derive(Debug, Error)]
pub enum FactError {
    /// HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Connection or transport failure.
    #[error("Request to '{url}' failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the configured timeout.
    #[error("Request timeout after {duration}s")]
    Timeout { duration: u64 },

    /// Service answered with a non-success status.
    #[error("Fact service returned status {status}")]
    Status { status: u16 },

    /// Body was not JSON or lacked the text field.
    #[error("Malformed fact response: {reason}")]
    Malformed { reason: String },

    /// The fetch task panicked before producing a result.
    #[error("Fact source '{name}' crashed while fetching")]
    Panicked { name: &'static str },
}

impl FactError {
    /// Short machine-readable label, used in logs and snapshots.
    pub fn error_type(&self) -> &'static str {
        match self {
            FactError::Client(_) => "client_error",
            FactError::Network { .. } => "network_error",
            FactError::Timeout { .. } => "timeout",
            FactError::Status { .. } => "status_error",
            FactError::Malformed { .. } => "malformed_response",
            FactError::Panicked { .. } => "panicked",
        }
    }
}
