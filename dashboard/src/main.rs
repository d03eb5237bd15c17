use std::sync::Arc;

use lib_core::config::{core_config, init_config};
use lp_dashboard::services::SnapshotFeed;
use lp_dashboard::{debug, App, Result};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    debug::init();

    init_config()?;
    let config = core_config();

    let feed = SnapshotFeed::from_env();
    let requested = std::env::args().nth(1);
    tracing::info!(
        snapshot = %feed.path().display(),
        requested = ?requested,
        "Starting dashboard"
    );

    let app = App::new(config, Arc::new(feed), requested);
    if let Err(e) = app.run().await {
        tracing::error!(error = %e, "dashboard stopped");
        return Err(e);
    }

    Ok(())
}
