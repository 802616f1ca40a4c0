//! Rate source port.
//!
//! Implementations can be HTTP clients, in-memory fixtures, etc.

use crate::domain::{DateKey, RawRateDocument};

/// Error type for a single fetch.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Rate source returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Malformed rate document: {0}")]
    Decode(String),
}

/// Port trait for per-date rate providers.
///
/// One instance is shared by reference across every concurrent fetch of a
/// batch, so implementations must be `Send + Sync`.
#[async_trait::async_trait]
pub trait RateSource: Send + Sync {
    /// Fetches the rate document for a single date.
    async fn fetch_rates(&self, date: &DateKey) -> Result<RawRateDocument, SourceError>;
}
