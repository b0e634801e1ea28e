//! Edge redirect server (v1)
//!
//! Sits in front of an origin and answers `www.` hosts with a permanent
//! redirect to the bare domain.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request        ┌───────────────────────────────────────────────┐
//!     ──────────────────────┼─▶ request id ─▶ trace ─▶ timeout ─▶ body limit │
//!                           │                                       │       │
//!                           │                                       ▼       │
//!                           │                              ┌──────────────┐ │
//!     301 + Location        │                              │  normalizer  │ │
//!     ◀─────────────────────┼──────────────── www. host ───│ (host.rs)    │ │
//!                           │                              └──────┬───────┘ │
//!                           │                                     │ other   │
//!                           │                                     ▼         │
//!     Origin Response       │                              ┌──────────────┐ │
//!     ◀─────────────────────┼──────────────────────────────│ origin proxy │◀┼──── Origin
//!                           │                              └──────────────┘ │
//!                           └───────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use edge_redirect::config::{load_config, EdgeConfig};
use edge_redirect::http::HttpServer;
use edge_redirect::lifecycle::{spawn_signal_handler, Shutdown};
use edge_redirect::observability::init_logging;

#[derive(Parser)]
#[command(name = "edge-redirect")]
#[command(about = "Redirects www. hosts to their bare domain in front of an origin", long_about = None)]
struct Args {
    /// Path to a TOML config file; defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => EdgeConfig::default(),
    };

    init_logging(&config.observability)?;

    tracing::info!("edge-redirect v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        config_path = ?args.config,
        bind_address = %config.listener.bind_address,
        origin = %config.origin.address,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    spawn_signal_handler(shutdown);

    let server = HttpServer::new(config)?;
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
