//! Greeting service.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ─────────────────▶ http::server ──▶ http::greeting ──▶ spawn_blocking
//!                          (request id,                         │
//!                           trace, timeout)                     ▼
//!                                                       pipeline::greeting
//!                                                  filter → single → join → map
//!                                                        (diagnostics::Flow)
//!     Client Response                                           │
//!     ◀──────────────── http::response ◀────────────────────────┘
//!
//!     harness (branch selection + diagnostic strategies) is driven from
//!     tests and `greeting-cli diagnose`, never from HTTP.
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use greeting_service::config::{load_config, ServiceConfig};
use greeting_service::http::HttpServer;
use greeting_service::lifecycle::Shutdown;
use greeting_service::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "greeting-service")]
#[command(about = "Greets a pair of names over HTTP", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };

    logging::init_logging(&config.observability);

    tracing::info!("greeting-service v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        config_file = ?args.config,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    // Held for the whole run; dropping it would stop the server.
    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
