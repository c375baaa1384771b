use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Lightweight authenticated user identity for cross-crate passing.
///
/// Produced by the auth layer in front of the engine, consumed by
/// `kin-engine` and `kin-cli`. Contains only data fields, no auth logic,
/// no token verification. The engine trusts the `user_id` as-is.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AuthIdentity {
    /// Verified user ID of the caller.
    pub user_id: String,
}

impl AuthIdentity {
    #[must_use]
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}
