//! JSON snapshot format for interaction data.
//!
//! A snapshot is a point-in-time export of the like relation plus the static
//! post-to-business mapping and business metadata. The file is the swap-in
//! point for a real persistence backend: anything that can produce this shape
//! can feed the engine.

use std::collections::HashSet;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use kin_core::entities::Business;

use crate::error::StoreError;

/// One user's row in a snapshot file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotUser {
    pub id: String,
    pub likes: Vec<String>,
}

/// One post's row in a snapshot file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotPost {
    pub id: String,
    pub business_id: String,
}

/// A complete interaction snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// When this snapshot was exported from the owning system.
    pub generated_at: DateTime<Utc>,
    pub users: Vec<SnapshotUser>,
    pub posts: Vec<SnapshotPost>,
    pub businesses: Vec<Business>,
}

impl Snapshot {
    /// Read and validate a snapshot from a JSON file.
    ///
    /// Likes referencing posts absent from the snapshot are dropped with a
    /// warning rather than rejecting the whole file; duplicate user, post,
    /// or business ids reject it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the file cannot be read,
    /// `StoreError::Parse` if it is not valid JSON, and
    /// `StoreError::Snapshot` if its contents violate integrity constraints.
    pub fn from_file(path: &Path) -> Result<Self, StoreError> {
        let data = std::fs::read(path)?;
        let mut snapshot: Self = serde_json::from_slice(&data)?;
        snapshot.validate()?;
        snapshot.prune_unknown_likes();
        Ok(snapshot)
    }

    fn validate(&self) -> Result<(), StoreError> {
        let mut user_ids = HashSet::new();
        for user in &self.users {
            if !user_ids.insert(user.id.as_str()) {
                return Err(StoreError::Snapshot(format!(
                    "duplicate user id '{}'",
                    user.id
                )));
            }
        }

        let mut post_ids = HashSet::new();
        for post in &self.posts {
            if !post_ids.insert(post.id.as_str()) {
                return Err(StoreError::Snapshot(format!(
                    "duplicate post id '{}'",
                    post.id
                )));
            }
        }

        let mut business_ids = HashSet::new();
        for business in &self.businesses {
            if !business_ids.insert(business.id.as_str()) {
                return Err(StoreError::Snapshot(format!(
                    "duplicate business id '{}'",
                    business.id
                )));
            }
        }

        Ok(())
    }

    /// Drop likes pointing at posts the snapshot does not contain.
    fn prune_unknown_likes(&mut self) {
        let post_ids: HashSet<&str> = self.posts.iter().map(|p| p.id.as_str()).collect();
        for user in &mut self.users {
            user.likes.retain(|post_id| {
                let known = post_ids.contains(post_id.as_str());
                if !known {
                    warn!(user_id = %user.id, post_id = %post_id, "dropping like for unknown post");
                }
                known
            });
        }
    }
}
