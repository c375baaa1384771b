use kin_core::responses::StatsResponse;
use kin_store::MemoryStore;

use crate::cli::GlobalFlags;
use crate::output;

/// Handle `kin stats`.
pub fn handle(store: &MemoryStore, flags: &GlobalFlags) -> anyhow::Result<()> {
    let stats = store.stats();
    let response = StatsResponse {
        users: stats.users,
        posts: stats.posts,
        businesses: stats.businesses,
        likes: stats.likes,
    };

    output::output(&response, flags.format)
}
