//! Main entry point of the application.
//! Loads the configuration, sets up logging and serves the API with Axum.

use anyhow::{Context, Result};
use dotenv::dotenv;
use log::{info, warn};

use fieldcheck::backend;
use fieldcheck::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().context("Invalid configuration")?;
    let app = backend::router::get_router(&config);

    let addr = config.socket_addr();
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to open web server listener")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Failed to serve the application")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Could not listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
