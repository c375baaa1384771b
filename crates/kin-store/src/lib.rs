//! # kin-store
//!
//! Interaction store contract and in-memory implementation for Kindred.
//!
//! The store owns persistence of the like relation and the static
//! post-to-business mapping; the engine only ever reads through the
//! [`InteractionStore`] trait. [`MemoryStore`] is the bundled backend,
//! seeded from a JSON snapshot file or the built-in sample dataset. A real
//! persistence backend slots in by implementing the same trait without
//! touching ranking logic.

pub mod error;
mod memory;
pub mod snapshot;

pub use error::StoreError;
pub use memory::{MemoryStore, StoreStats};
pub use snapshot::Snapshot;

use std::collections::HashSet;

use kin_core::entities::{Business, UserLikes};

/// Read interface the recommendation engine needs from interaction data.
///
/// All methods take a point-in-time view: within one engine invocation the
/// returned data is treated as an immutable snapshot.
#[allow(async_fn_in_trait)]
pub trait InteractionStore {
    /// The set of post ids the user has liked. Unknown users resolve to an
    /// empty set.
    async fn likes_of(&self, user_id: &str) -> Result<HashSet<String>, StoreError>;

    /// Every known user together with its like-set. Order is unspecified;
    /// callers needing determinism must sort.
    async fn all_users(&self) -> Result<Vec<UserLikes>, StoreError>;

    /// The id of the business a post belongs to, if the post is known.
    async fn business_of(&self, post_id: &str) -> Result<Option<String>, StoreError>;

    /// Metadata for a business, if it is known.
    async fn business_metadata(&self, business_id: &str) -> Result<Option<Business>, StoreError>;
}
