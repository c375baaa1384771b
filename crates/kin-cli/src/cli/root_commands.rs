use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Friend and business recommendations for a user.
    Recommend(RecommendArgs),
    /// Pairwise taste similarity between two users.
    Similarity(SimilarityArgs),
    /// Dataset statistics from the configured store.
    Stats,
    /// Dump JSON Schema for a response envelope.
    Schema(SchemaArgs),
}

/// Arguments for `kin recommend`.
#[derive(Clone, Debug, Args)]
pub struct RecommendArgs {
    /// User to produce recommendations for.
    pub user_id: String,
}

/// Arguments for `kin similarity`.
#[derive(Clone, Debug, Args)]
pub struct SimilarityArgs {
    /// First user.
    pub user_a: String,
    /// Second user.
    pub user_b: String,
}

/// Arguments for `kin schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Envelope name (recommendations, similarity, stats). All when omitted.
    pub name: Option<String>,
}
