//! Engine error types for kin-engine.

use thiserror::Error;

use kin_store::StoreError;

/// Errors from a recommendation request.
#[derive(Debug, Error)]
pub enum RecommendError {
    /// The interaction store lookup failed. Surfaced to callers as an
    /// opaque failure; details stay in the logs.
    #[error("Interaction store unavailable: {0}")]
    Store(#[from] StoreError),
}
