//! Proxima API Server - backend for the Proxima Cloud website
//!
//! Provides REST endpoints for:
//! - QR code visit tracking (Postgres)
//! - Contact form relay (Gmail SMTP)
//! - Health check

use std::net::SocketAddr;

use anyhow::Result;
use tokio::signal;
use tracing::info;

mod config;
mod error;
mod extract;
mod handlers;
mod models;
mod routes;
mod state;
mod store;

use config::ServiceConfig;
use state::Resources;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("proxima_api=info".parse()?)
                .add_directive("contact_mailer=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .init();

    info!("Initializing Proxima API...");
    let config = ServiceConfig::from_env()?;
    let resources = Resources::init(&config).await?;

    let app = routes::router(resources.state.clone());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Starting Proxima API on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    resources.visits.close().await;
    info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
