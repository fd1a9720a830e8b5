//! GrubDash server binary
//!
//! Reads configuration from `GRUBDASH_CONFIG` (optional YAML file) and the
//! `HOST`/`PORT` environment variables, then serves until Ctrl+C or SIGTERM.

use anyhow::Result;
use grubdash::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = AppConfig::load()?;

    tracing::info!(
        dishes = config.seed.dishes.len(),
        orders = config.seed.orders.len(),
        "Starting grubdash v{}",
        env!("CARGO_PKG_VERSION")
    );

    let addr = config.bind_addr();
    ServerBuilder::new().with_seed(config.seed).serve(&addr).await
}
