//! photoalbums-api - Albums-with-photos aggregation service
//!
//! Fetches albums and photos from the upstream placeholder service on every
//! request, joins them, and serves the result as JSON.

use anyhow::{Context, Result};
use clap::Parser;
use photoalbums_common::config::TomlConfig;
use photoalbums_common::HttpFetcher;
use photoalbums_api::cli::Args;
use photoalbums_api::{build_router, AppState};
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Config is read before tracing exists; where it came from is logged below
    let (mut config, source) =
        TomlConfig::load(args.config.as_deref()).context("Failed to load configuration")?;
    args.apply(&mut config);

    let default_filter = format!(
        "photoalbums_api={level},photoalbums_common={level},tower_http={level}",
        level = config.logging.level
    );
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting photoalbums-api v{} ({})",
        env!("CARGO_PKG_VERSION"),
        if cfg!(debug_assertions) { "debug" } else { "release" }
    );
    source.report();

    config.validate().context("Invalid configuration")?;

    let fetcher = HttpFetcher::new(&config.upstream).context("Failed to create upstream client")?;
    info!("Albums source: {}", fetcher.albums_url());
    info!("Photos source: {}", fetcher.photos_url());

    let state = AppState::new(fetcher);
    let app = build_router(state);

    let addr = format!("{}:{}", config.server.bind_address, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("photoalbums-api listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C, or on SIGTERM where available; in-flight requests drain
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler");
        tokio::select! {
            result = signal::ctrl_c() => {
                result.expect("Failed to listen for Ctrl+C");
                info!("Received Ctrl+C, draining in-flight requests");
            }
            _ = sigterm.recv() => {
                info!("Received SIGTERM, draining in-flight requests");
            }
        }
    }

    #[cfg(not(unix))]
    {
        signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
        info!("Received Ctrl+C, draining in-flight requests");
    }
}
