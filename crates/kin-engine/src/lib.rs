//! # kin-engine
//!
//! Collaborative-filtering core for Kindred: pairwise taste similarity and
//! the business ranker built on top of it.
//!
//! The engine is pure computation over data it reads through the
//! [`kin_store::InteractionStore`] trait. It holds no mutable state and
//! never writes; swapping the storage backend never touches ranking logic.

pub mod error;
pub mod ranker;
pub mod similarity;

pub use error::RecommendError;
pub use ranker::{MAX_RECOMMENDED_BUSINESSES, Recommender, TOP_SIMILAR_USERS};
pub use similarity::{cosine_similarity, shared_interest_count};
