// Static site build entry point
//
// Usage: cargo run --bin build_site
// Reads fixtures from CONTENT_DIR (default "content") and writes the site
// tree to SITE_DIR (default "dist").

use std::path::{Path, PathBuf};

use portfolio_gen::{ContentStore, SiteBuilder};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portfolio_gen=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let content_dir = std::env::var("CONTENT_DIR").unwrap_or_else(|_| "content".to_string());
    let site_dir = std::env::var("SITE_DIR").unwrap_or_else(|_| "dist".to_string());

    tracing::info!("Configuration:");
    tracing::info!("  CONTENT_DIR: {}", content_dir);
    tracing::info!("  SITE_DIR: {}", site_dir);

    let store = ContentStore::load(Path::new(&content_dir))?;
    SiteBuilder::new(&store, PathBuf::from(site_dir)).build()?;

    Ok(())
}
