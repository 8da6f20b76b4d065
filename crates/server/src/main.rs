use anyhow::Context;
use dirlist_server::{ServerConfig, build_router};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = ServerConfig::locate();
    let config = match &config_path {
        Some(path) => ServerConfig::from_file(path)
            .with_context(|| format!("failed to load server config from {}", path.display()))?,
        None => ServerConfig::default(),
    };

    init_tracing(&config)?;

    info!("starting dirlist server");
    match &config_path {
        Some(path) => info!(path = %path.display(), "loaded server config"),
        None => info!("no config file found, using defaults"),
    }
    info!(
        listing_mode = ?config.listing_mode,
        default_path = %config.default_path,
        debug = config.debug,
        cors = config.cors,
        "server config"
    );

    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    info!(address = %listener.local_addr()?, "listening");

    axum::serve(listener, build_router(&config))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated with an error")?;

    info!("server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received, stopping server"),
        Err(err) => {
            warn!(error = %err, "failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}

fn init_tracing(config: &ServerConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.default_log_filter()))?;

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    Ok(())
}
