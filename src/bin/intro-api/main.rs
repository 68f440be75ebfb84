//! # Intro API Server
//!
//! Command-line entry point for the intro API server.
//!
//! Serves the demo endpoints with request logging until Ctrl+C.

use std::io;
use std::net::SocketAddr;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use intro_api::http::{build_router, AppState};
use intro_api::request_log::tracing_log::SEPARATOR;

mod cli;

use cli::Cli;

#[tokio::main]
async fn main() -> io::Result<()> {
    // Initialize logging
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(env_filter).init();

    // Parse CLI arguments
    let cli = Cli::parse();

    let mut builder = AppState::builder().with_upstream_url(cli.upstream);
    if let Some(timeout) = cli.upstream_timeout {
        builder = builder.with_upstream_timeout(timeout);
    }
    let state = builder.build()?;

    let app = build_router(state);

    let addr: SocketAddr = cli.listen.parse().map_err(io::Error::other)?;
    for line in banner(addr) {
        tracing::info!("{line}");
    }

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// Startup lines pointing at the docs pages on the bound port.
fn banner(addr: SocketAddr) -> Vec<String> {
    let port = addr.port();
    vec![
        SEPARATOR.to_string(),
        "Starting server...".to_string(),
        format!("API Docs: http://localhost:{port}/docs"),
        format!("ReDoc: http://localhost:{port}/redoc"),
        SEPARATOR.to_string(),
    ]
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install Ctrl+C handler: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("received Ctrl+C, shutting down");
}
