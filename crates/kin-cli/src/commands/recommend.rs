use kin_core::identity::AuthIdentity;
use kin_core::responses::RecommendationsResponse;
use kin_engine::Recommender;
use kin_store::MemoryStore;
use tracing::error;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RecommendArgs;
use crate::output;

/// Message surfaced to callers when a request fails internally.
const FAILURE_MESSAGE: &str = "Failed to generate recommendations";

/// Handle `kin recommend`.
///
/// Store failures are logged with detail, reported to the caller as an
/// opaque failure envelope, and exit non-zero.
pub async fn handle(
    args: &RecommendArgs,
    store: MemoryStore,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let identity = AuthIdentity::new(args.user_id.clone());
    let recommender = Recommender::new(store);

    match recommender.recommend(&identity).await {
        Ok(response) => output::output(&response, flags.format),
        Err(err) => {
            error!(user_id = %args.user_id, error = %err, "recommendation request failed");
            output::output(
                &RecommendationsResponse::failure(FAILURE_MESSAGE),
                flags.format,
            )?;
            anyhow::bail!("recommendation request failed for user '{}'", args.user_id)
        }
    }
}
