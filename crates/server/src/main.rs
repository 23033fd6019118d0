//! Movie filter web server.
//!
//! Loads the catalog once, then serves the filter form.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use data_loader::DataIndex;
use server::{create_router, AppContext, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = ServerConfig::parse();
    info!("Starting movie filter server");

    let index = DataIndex::load_from_files(&config.movies_path(), &config.ratings_path())
        .context("Failed to load movie catalog")?;
    let ctx = AppContext::new(Arc::new(index), config.form_rules());
    info!("Serving {} genres", ctx.genres.len());

    let app = create_router(ctx).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr()))?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
