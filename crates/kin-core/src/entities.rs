use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A business that posts belong to. Metadata is supplied externally and
/// immutable from the engine's perspective.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Business {
    pub id: String,
    pub name: String,
    pub category: String,
}

/// One user's like-set: the unordered set of post ids the user has liked.
///
/// Read-only for the engine. Once fetched for a computation it is treated as
/// an immutable snapshot for the duration of that computation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserLikes {
    pub user_id: String,
    pub likes: HashSet<String>,
}

impl UserLikes {
    #[must_use]
    pub fn new(user_id: impl Into<String>, likes: impl IntoIterator<Item = String>) -> Self {
        Self {
            user_id: user_id.into(),
            likes: likes.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_likes_deduplicates_posts() {
        let likes = UserLikes::new(
            "user_1",
            ["post_1", "post_2", "post_1"].map(String::from),
        );
        assert_eq!(likes.likes.len(), 2);
        assert!(likes.likes.contains("post_1"));
    }

    #[test]
    fn business_round_trips_through_json() {
        let business = Business {
            id: "business_1".to_string(),
            name: "Blue Bottle".to_string(),
            category: "coffee".to_string(),
        };
        let json = serde_json::to_string(&business).unwrap();
        let back: Business = serde_json::from_str(&json).unwrap();
        assert_eq!(back, business);
    }
}
