//! gke-api entry point.

use clap::Parser;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use gke_api::api::{serve, AppState};
use gke_api::config::Config;
use gke_api::metrics;

/// Minimal HTTP service with health, info, and echo endpoints.
///
/// Settings come from the environment (ENV, PORT, RUST_LOG, LOG_JSON,
/// METRICS_PORT), optionally seeded from a .env file.
#[derive(Parser, Debug)]
#[command(name = "gke-api")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, env = "VERBOSE")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration before logging so RUST_LOG/LOG_JSON from .env apply
    let config = Config::load()?;

    // Initialize logging
    init_logging(&config, args.verbose);

    // Initialize metrics
    metrics::init_metrics();
    if let Some(addr) = config.metrics_addr() {
        metrics::install_prometheus(addr).map_err(|e| {
            error!("Failed to start metrics exporter: {}", e);
            e
        })?;
    }

    info!("Environment: {}", config.env);

    // Start HTTP server
    let addr = config.bind_addr();
    let listener = TcpListener::bind(addr).await.map_err(|e| {
        error!("Failed to bind {}: {}", addr, e);
        e
    })?;

    serve(listener, AppState::new(config)).await?;

    Ok(())
}

fn init_logging(config: &Config, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("gke_api=debug,tower_http=debug,info")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.rust_log))
    };

    let registry = tracing_subscriber::registry().with(filter);

    if config.log_json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}
