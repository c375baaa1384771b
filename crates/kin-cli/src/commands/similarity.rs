use anyhow::Context;

use kin_engine::Recommender;
use kin_store::MemoryStore;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SimilarityArgs;
use crate::output;

/// Handle `kin similarity`.
pub async fn handle(
    args: &SimilarityArgs,
    store: MemoryStore,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let recommender = Recommender::new(store);
    let response = recommender
        .similarity(&args.user_a, &args.user_b)
        .await
        .with_context(|| {
            format!(
                "similarity lookup failed for '{}' and '{}'",
                args.user_a, args.user_b
            )
        })?;

    output::output(&response, flags.format)
}
