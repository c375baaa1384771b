//! Store error types for kin-store.

use thiserror::Error;

/// Errors from interaction store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading a snapshot file failed.
    #[error("Snapshot read failed: {0}")]
    Io(#[from] std::io::Error),

    /// Parsing a snapshot file failed.
    #[error("Snapshot parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// Snapshot contents violate an integrity constraint.
    #[error("Invalid snapshot: {0}")]
    Snapshot(String),
}
