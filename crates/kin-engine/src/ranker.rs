//! Collaborative-filtering ranker.
//!
//! Selects the requester's taste neighborhood, aggregates the neighborhood's
//! likes into per-post scores (excluding posts the requester already likes),
//! rolls post scores up to businesses, and produces the ordered response
//! envelope. Ordering is fully deterministic: scores descending, ids
//! ascending on ties.

use std::collections::{HashMap, HashSet};

use tracing::{debug, info};

use kin_core::entities::UserLikes;
use kin_core::identity::AuthIdentity;
use kin_core::responses::{
    ALGORITHM_COLLABORATIVE_FILTERING, PotentialFriend, RecommendationsResponse,
    RecommendedBusiness, SimilarityResponse,
};
use kin_store::InteractionStore;

use crate::error::RecommendError;
use crate::similarity::{cosine_similarity, shared_interest_count};

/// Neighborhood size: how many top-similar users feed the aggregation.
pub const TOP_SIMILAR_USERS: usize = 10;

/// Maximum number of businesses returned per request.
pub const MAX_RECOMMENDED_BUSINESSES: usize = 20;

/// Message for requesters with no recorded likes.
const NO_LIKES_MESSAGE: &str =
    "No likes recorded yet. Like some posts to get personalized recommendations.";

/// A retained similar user, borrowed from the interaction snapshot.
struct Neighbor<'a> {
    user_id: &'a str,
    similarity: f64,
    shared: usize,
    likes: &'a HashSet<String>,
}

/// Recommendation engine over an injected [`InteractionStore`].
///
/// Stateless between requests: every invocation reads a fresh snapshot from
/// the store and discards all derived data after building the response, so
/// concurrent invocations for different users share nothing mutable.
pub struct Recommender<S> {
    store: S,
}

impl<S: InteractionStore> Recommender<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Produce recommendations for the verified caller.
    ///
    /// An empty like-set short-circuits to the degenerate success envelope;
    /// store failures propagate as [`RecommendError::Store`].
    ///
    /// # Errors
    ///
    /// Returns `RecommendError` if any interaction store lookup fails.
    pub async fn recommend(
        &self,
        identity: &AuthIdentity,
    ) -> Result<RecommendationsResponse, RecommendError> {
        let requester = identity.user_id.as_str();

        let requester_likes = self.store.likes_of(requester).await?;
        if requester_likes.is_empty() {
            info!(user_id = %requester, "requester has no likes; returning degenerate result");
            return Ok(RecommendationsResponse::no_likes(NO_LIKES_MESSAGE));
        }

        let all_users = self.store.all_users().await?;

        // Pure compute phase: no suspension points from here to resolution.
        let mut neighbors = rank_neighbors(requester, &requester_likes, &all_users);
        let total_similar_users = neighbors.len();
        neighbors.truncate(TOP_SIMILAR_USERS);

        let post_scores = score_candidate_posts(&requester_likes, &neighbors);

        let potential_friends = neighbors
            .iter()
            .map(|neighbor| PotentialFriend {
                user_id: neighbor.user_id.to_string(),
                similarity_score: neighbor.similarity,
                shared_interests: neighbor.shared,
            })
            .collect::<Vec<_>>();

        // Resolution phase: roll post scores up to businesses.
        let mut business_scores: HashMap<String, BusinessAccumulator> = HashMap::new();
        for (post_id, score) in &post_scores {
            let Some(business_id) = self.store.business_of(post_id).await? else {
                debug!(post_id = %post_id, "post has no owning business; skipping");
                continue;
            };
            let entry = business_scores.entry(business_id).or_default();
            entry.score += score;
            entry.contributing_posts += 1;
        }

        let mut ranked: Vec<(String, BusinessAccumulator)> = business_scores.into_iter().collect();
        ranked.sort_by(|a, b| {
            b.1.score
                .partial_cmp(&a.1.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        ranked.truncate(MAX_RECOMMENDED_BUSINESSES);

        let mut recommended_businesses = Vec::with_capacity(ranked.len());
        for (business_id, accumulator) in ranked {
            let Some(business) = self.store.business_metadata(&business_id).await? else {
                debug!(business_id = %business_id, "business has no metadata; skipping");
                continue;
            };
            recommended_businesses.push(RecommendedBusiness {
                business,
                recommendation_score: accumulator.score,
                reason: reason_for(accumulator.contributing_posts),
            });
        }

        info!(
            user_id = %requester,
            similar_users = total_similar_users,
            friends = potential_friends.len(),
            businesses = recommended_businesses.len(),
            "recommendations generated"
        );

        Ok(RecommendationsResponse {
            success: true,
            potential_friends,
            recommended_businesses,
            algorithm: ALGORITHM_COLLABORATIVE_FILTERING.to_string(),
            total_similar_users,
            message: None,
        })
    }

    /// Pairwise similarity diagnostic between two users.
    ///
    /// # Errors
    ///
    /// Returns `RecommendError` if an interaction store lookup fails.
    pub async fn similarity(
        &self,
        user_a: &str,
        user_b: &str,
    ) -> Result<SimilarityResponse, RecommendError> {
        let likes_a = self.store.likes_of(user_a).await?;
        let likes_b = self.store.likes_of(user_b).await?;
        Ok(SimilarityResponse {
            user_a: user_a.to_string(),
            user_b: user_b.to_string(),
            similarity_score: cosine_similarity(&likes_a, &likes_b),
            shared_interests: shared_interest_count(&likes_a, &likes_b),
        })
    }
}

#[derive(Debug, Default)]
struct BusinessAccumulator {
    score: f64,
    contributing_posts: usize,
}

/// Every other user with strictly positive similarity to the requester,
/// sorted by similarity descending, user id ascending on ties.
fn rank_neighbors<'a>(
    requester: &str,
    requester_likes: &HashSet<String>,
    all_users: &'a [UserLikes],
) -> Vec<Neighbor<'a>> {
    let mut neighbors: Vec<Neighbor<'a>> = all_users
        .iter()
        .filter(|user| user.user_id != requester)
        .filter_map(|user| {
            let similarity = cosine_similarity(requester_likes, &user.likes);
            (similarity > 0.0).then(|| Neighbor {
                user_id: &user.user_id,
                similarity,
                shared: shared_interest_count(requester_likes, &user.likes),
                likes: &user.likes,
            })
        })
        .collect();

    neighbors.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.user_id.cmp(b.user_id))
    });
    neighbors
}

/// Similarity-weighted scores for posts liked by the neighborhood but not by
/// the requester. A post liked by several neighbors compounds their weights.
fn score_candidate_posts(
    requester_likes: &HashSet<String>,
    neighbors: &[Neighbor<'_>],
) -> HashMap<String, f64> {
    let mut scores: HashMap<String, f64> = HashMap::new();
    for neighbor in neighbors {
        for post_id in neighbor.likes {
            if requester_likes.contains(post_id) {
                continue;
            }
            *scores.entry(post_id.clone()).or_insert(0.0) += neighbor.similarity;
        }
    }
    scores
}

fn reason_for(contributing_posts: usize) -> String {
    if contributing_posts == 1 {
        String::from("Based on 1 post liked by similar users")
    } else {
        format!("Based on {contributing_posts} posts liked by similar users")
    }
}
