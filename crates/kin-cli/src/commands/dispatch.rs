use kin_store::MemoryStore;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    store: MemoryStore,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Recommend(args) => commands::recommend::handle(&args, store, flags).await,
        Commands::Similarity(args) => commands::similarity::handle(&args, store, flags).await,
        Commands::Stats => commands::stats::handle(&store, flags),
        Commands::Schema(_) => unreachable!("schema is pre-dispatched in main"),
    }
}
