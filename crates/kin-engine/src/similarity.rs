//! Pairwise taste similarity between users.
//!
//! Users are binary preference vectors over the union of their like-sets:
//! cosine similarity reduces to `|A ∩ B| / (sqrt(|A|) * sqrt(|B|))`. The
//! result is symmetric, deterministic, and bounded in `[0, 1]`.

use std::collections::HashSet;

/// Cosine similarity of two like-sets.
///
/// Returns `0.0` when either set is empty (zero magnitude) or the sets share
/// no posts; `1.0` iff the sets are equal and non-empty.
#[must_use]
pub fn cosine_similarity(likes_a: &HashSet<String>, likes_b: &HashSet<String>) -> f64 {
    if likes_a.is_empty() || likes_b.is_empty() {
        return 0.0;
    }

    let shared = shared_interest_count(likes_a, likes_b);
    if shared == 0 {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let dot = shared as f64;
    #[allow(clippy::cast_precision_loss)]
    let magnitude = (likes_a.len() as f64).sqrt() * (likes_b.len() as f64).sqrt();
    dot / magnitude
}

/// Number of posts both users have liked.
#[must_use]
pub fn shared_interest_count(likes_a: &HashSet<String>, likes_b: &HashSet<String>) -> usize {
    // Iterate the smaller set; intersection size is symmetric.
    let (small, large) = if likes_a.len() <= likes_b.len() {
        (likes_a, likes_b)
    } else {
        (likes_b, likes_a)
    };
    small.iter().filter(|post| large.contains(*post)).count()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn likes(posts: &[&str]) -> HashSet<String> {
        posts.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn identical_non_empty_sets_score_one() {
        let a = likes(&["post_1", "post_2"]);
        let score = cosine_similarity(&a, &a);
        assert!((score - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn disjoint_sets_score_zero() {
        let a = likes(&["post_1", "post_2"]);
        let b = likes(&["post_3", "post_4"]);
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[rstest]
    #[case(&[], &[])]
    #[case(&["post_1"], &[])]
    #[case(&[], &["post_1"])]
    fn empty_sets_score_zero(#[case] a: &[&str], #[case] b: &[&str]) {
        assert_eq!(cosine_similarity(&likes(a), &likes(b)), 0.0);
    }

    #[rstest]
    #[case(&["post_1", "post_2", "post_3", "post_5"], &["post_2", "post_3", "post_4", "post_6"], 0.5)]
    #[case(&["post_1", "post_2", "post_3", "post_5"], &["post_1", "post_4", "post_7", "post_8"], 0.25)]
    #[case(&["post_1", "post_2"], &["post_2"], 1.0 / std::f64::consts::SQRT_2)]
    fn known_pairs_match_the_cosine_formula(
        #[case] a: &[&str],
        #[case] b: &[&str],
        #[case] expected: f64,
    ) {
        let score = cosine_similarity(&likes(a), &likes(b));
        assert!(
            (score - expected).abs() < 1e-12,
            "expected {expected}, got {score}"
        );
    }

    #[rstest]
    #[case(&["post_1"], &["post_1", "post_2"])]
    #[case(&["post_1", "post_2", "post_3"], &["post_3", "post_4"])]
    #[case(&["post_1"], &["post_2"])]
    fn similarity_is_symmetric(#[case] a: &[&str], #[case] b: &[&str]) {
        let (a, b) = (likes(a), likes(b));
        assert_eq!(cosine_similarity(&a, &b), cosine_similarity(&b, &a));
    }

    #[rstest]
    #[case(&["post_1"], &["post_1", "post_2", "post_3"])]
    #[case(&["post_1", "post_2"], &["post_2", "post_3"])]
    #[case(&["post_1", "post_2", "post_3", "post_4"], &["post_1", "post_2", "post_3", "post_4"])]
    fn similarity_is_bounded(#[case] a: &[&str], #[case] b: &[&str]) {
        let score = cosine_similarity(&likes(a), &likes(b));
        assert!((0.0..=1.0).contains(&score), "out of bounds: {score}");
    }

    #[test]
    fn shared_interest_count_is_the_intersection_size() {
        let a = likes(&["post_1", "post_2", "post_3"]);
        let b = likes(&["post_2", "post_3", "post_4"]);
        assert_eq!(shared_interest_count(&a, &b), 2);
        assert_eq!(shared_interest_count(&b, &a), 2);
    }
}
