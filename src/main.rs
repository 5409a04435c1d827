mod api;
mod config;
mod feed;
mod fetcher;
mod models;
mod remote;
mod transfer;

use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stdout)
        .with_target(false)
        .init();

    info!("Payments feed starting...");

    // Load configuration
    let cfg = config::load()?;
    info!("Loaded config:");
    info!("  Backend URL: {}", cfg.backend_url);
    info!("  Port: {}", cfg.port);
    info!("  Fetch timeout: {:?}", cfg.fetch_timeout);
    info!("  Request timeout: {:?}", cfg.request_timeout);

    // One shared client; every outbound call carries the fetch deadline
    let backend = Arc::new(remote::Backend::new(&cfg.backend_url, cfg.fetch_timeout)?);

    // Spawn API task
    let api_handle = tokio::spawn({
        let cfg = cfg.clone();
        let backend = Arc::clone(&backend);
        async move { api::serve(cfg, backend).await }
    });

    // Graceful shutdown
    tokio::select! {
        res = api_handle => match res {
            Ok(Ok(_)) => info!("API exited cleanly"),
            Ok(Err(e)) => error!("API error: {:?}", e),
            Err(e) => error!("API task panicked: {:?}", e),
        },
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received, stopping...");
        }
    }

    info!("Payments feed stopped.");
    Ok(())
}
