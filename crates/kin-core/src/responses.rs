//! CLI response types returned as JSON by `kin` commands.
//!
//! The recommendation envelope is the external contract of the system: field
//! names are camelCase and must stay stable for callers. `message` is only
//! present on the no-likes and failure paths.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Business;

/// Algorithm tag carried in every recommendation envelope.
pub const ALGORITHM_COLLABORATIVE_FILTERING: &str = "collaborative_filtering";

/// A user with similar taste to the requester.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PotentialFriend {
    pub user_id: String,
    pub similarity_score: f64,
    /// Number of posts both users have liked.
    pub shared_interests: usize,
}

/// A business recommended from the likes of similar users.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedBusiness {
    pub business: Business,
    pub recommendation_score: f64,
    pub reason: String,
}

/// Response from `kin recommend`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsResponse {
    pub success: bool,
    pub potential_friends: Vec<PotentialFriend>,
    pub recommended_businesses: Vec<RecommendedBusiness>,
    pub algorithm: String,
    pub total_similar_users: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RecommendationsResponse {
    /// Degenerate success envelope for a requester with no recorded likes.
    #[must_use]
    pub fn no_likes(message: impl Into<String>) -> Self {
        Self {
            success: true,
            potential_friends: Vec::new(),
            recommended_businesses: Vec::new(),
            algorithm: ALGORITHM_COLLABORATIVE_FILTERING.to_string(),
            total_similar_users: 0,
            message: Some(message.into()),
        }
    }

    /// Opaque failure envelope. Internals are logged, never surfaced here.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            potential_friends: Vec::new(),
            recommended_businesses: Vec::new(),
            algorithm: ALGORITHM_COLLABORATIVE_FILTERING.to_string(),
            total_similar_users: 0,
            message: Some(message.into()),
        }
    }
}

/// Response from `kin similarity`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityResponse {
    pub user_a: String,
    pub user_b: String,
    pub similarity_score: f64,
    pub shared_interests: usize,
}

/// Response from `kin stats`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatsResponse {
    pub users: usize,
    pub posts: usize,
    pub businesses: usize,
    pub likes: usize,
}
