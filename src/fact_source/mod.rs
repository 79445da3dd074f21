//! Retrieval of the short fact shown on the page.
//!
//! The interaction core depends only on [`FactSource`]; [`HttpFactSource`]
//! is the production adapter.

mod error;
mod http;

use async_trait::async_trait;

pub use error::FactError;
pub use http::{extract_fact, HttpFactSource};

/// Anything that can produce one fact string per call.
#[async_trait]
pub trait FactSource: Send + Sync {
    /// Name of the source for logging.
    fn name(&self) -> &'static str;

    /// Retrieve a single fact. No retries are attempted.
    async fn fetch(&self) -> Result<String, FactError>;
}
