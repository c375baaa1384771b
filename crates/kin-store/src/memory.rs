//! In-memory interaction store.
//!
//! Holds the full like relation, the post-to-business mapping, and business
//! metadata as plain maps. Built either from a [`Snapshot`] file, from parts,
//! or as the built-in sample dataset. Constructed once at process start (or
//! per-test) and injected into the engine.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use kin_core::entities::{Business, UserLikes};

use crate::InteractionStore;
use crate::error::StoreError;
use crate::snapshot::{Snapshot, SnapshotPost, SnapshotUser};

/// Aggregate counts over a store's contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStats {
    pub users: usize,
    pub posts: usize,
    pub businesses: usize,
    /// Total number of (user, post) like pairs.
    pub likes: usize,
}

/// In-memory [`InteractionStore`] implementation.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    likes: HashMap<String, HashSet<String>>,
    post_owner: HashMap<String, String>,
    businesses: HashMap<String, Business>,
}

impl MemoryStore {
    #[must_use]
    pub fn new(
        likes: HashMap<String, HashSet<String>>,
        post_owner: HashMap<String, String>,
        businesses: HashMap<String, Business>,
    ) -> Self {
        Self {
            likes,
            post_owner,
            businesses,
        }
    }

    #[must_use]
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let likes = snapshot
            .users
            .into_iter()
            .map(|user| (user.id, user.likes.into_iter().collect()))
            .collect();
        let post_owner = snapshot
            .posts
            .into_iter()
            .map(|post| (post.id, post.business_id))
            .collect();
        let businesses = snapshot
            .businesses
            .into_iter()
            .map(|business| (business.id.clone(), business))
            .collect();
        Self::new(likes, post_owner, businesses)
    }

    /// Load a store from a JSON snapshot file.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the file cannot be read, parsed, or fails
    /// snapshot validation.
    pub fn from_json_file(path: &Path) -> Result<Self, StoreError> {
        Ok(Self::from_snapshot(Snapshot::from_file(path)?))
    }

    /// The built-in sample dataset: four users, nine posts, five businesses.
    ///
    /// Used by the CLI when no snapshot file is configured, and by tests as
    /// a known fixture.
    #[must_use]
    pub fn sample() -> Self {
        let users = [
            ("user_1", ["post_1", "post_2", "post_3", "post_5"]),
            ("user_2", ["post_2", "post_3", "post_4", "post_6"]),
            ("user_3", ["post_1", "post_4", "post_7", "post_8"]),
            ("user_4", ["post_2", "post_5", "post_6", "post_9"]),
        ];
        let posts = [
            ("post_1", "business_1"),
            ("post_2", "business_2"),
            ("post_3", "business_1"),
            ("post_4", "business_3"),
            ("post_5", "business_2"),
            ("post_6", "business_3"),
            ("post_7", "business_4"),
            ("post_8", "business_4"),
            ("post_9", "business_5"),
        ];
        let businesses = [
            ("business_1", "Luna Coffee Roasters", "coffee"),
            ("business_2", "Golden Gate Bakery", "bakery"),
            ("business_3", "Mission Taqueria", "mexican"),
            ("business_4", "Harbor Books", "bookstore"),
            ("business_5", "Cedar & Vine", "restaurant"),
        ];

        let snapshot = Snapshot {
            generated_at: chrono::Utc::now(),
            users: users
                .into_iter()
                .map(|(id, likes)| SnapshotUser {
                    id: id.to_string(),
                    likes: likes.into_iter().map(String::from).collect(),
                })
                .collect(),
            posts: posts
                .into_iter()
                .map(|(id, business_id)| SnapshotPost {
                    id: id.to_string(),
                    business_id: business_id.to_string(),
                })
                .collect(),
            businesses: businesses
                .into_iter()
                .map(|(id, name, category)| Business {
                    id: id.to_string(),
                    name: name.to_string(),
                    category: category.to_string(),
                })
                .collect(),
        };
        Self::from_snapshot(snapshot)
    }

    /// Aggregate counts over the store's contents.
    #[must_use]
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            users: self.likes.len(),
            posts: self.post_owner.len(),
            businesses: self.businesses.len(),
            likes: self.likes.values().map(HashSet::len).sum(),
        }
    }
}

impl InteractionStore for MemoryStore {
    /// Unknown users resolve to an empty like-set, the degenerate
    /// no-interaction-data path, not an error.
    async fn likes_of(&self, user_id: &str) -> Result<HashSet<String>, StoreError> {
        Ok(self.likes.get(user_id).cloned().unwrap_or_default())
    }

    async fn all_users(&self) -> Result<Vec<UserLikes>, StoreError> {
        Ok(self
            .likes
            .iter()
            .map(|(user_id, likes)| UserLikes {
                user_id: user_id.clone(),
                likes: likes.clone(),
            })
            .collect())
    }

    async fn business_of(&self, post_id: &str) -> Result<Option<String>, StoreError> {
        Ok(self.post_owner.get(post_id).cloned())
    }

    async fn business_metadata(&self, business_id: &str) -> Result<Option<Business>, StoreError> {
        Ok(self.businesses.get(business_id).cloned())
    }
}
