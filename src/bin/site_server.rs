// Preview server entry point
//
// Usage: cargo run --features serve --bin site_server

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use portfolio_gen::{create_router, AppState, ContentStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "portfolio_gen=info,tower_http=debug,axum=debug,warn".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let content_dir = std::env::var("CONTENT_DIR").unwrap_or_else(|_| "content".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    tracing::info!("Configuration:");
    tracing::info!("  CONTENT_DIR: {}", content_dir);
    tracing::info!("  PORT: {}", port);

    let store = Arc::new(ContentStore::load(Path::new(&content_dir))?);
    tracing::info!(
        "Loaded content: {} education, {} experience, {} awards, {} publications",
        store.education.len(),
        store.experience.len(),
        store.awards.len(),
        store.publications.len()
    );

    let app = create_router(AppState { store });

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
