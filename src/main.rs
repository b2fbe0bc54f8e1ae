//! Panel poller daemon.
//!
//! Keeps named display regions refreshed from HTTP endpoints and serves
//! them on a small dashboard.
//!
//! # Architecture Overview
//!
//! ```text
//!   config.toml ──▶ config ──▶ Poller ──┬──▶ PollLoop "summary" ──┐
//!                                       ├──▶ PollLoop "news"    ──┤  GET every refresh_ms
//!                                       └──▶ PollLoop ...       ──┤◀────────────────────── Console
//!                                                                  │                         endpoints
//!                                                                  ▼
//!                                                           RegionStore
//!                                                                  │
//!     Browser ◀──────────────────── dashboard (axum) ◀─────────────┘
//! ```
//!
//! Each loop tolerates one failed poll silently; a second consecutive
//! failure replaces its region with the failure message until a poll
//! succeeds again.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use panel_poller::config::{load_config, PollerConfig};
use panel_poller::dashboard::DashboardServer;
use panel_poller::display::RegionStore;
use panel_poller::lifecycle::{signals::shutdown_on_ctrl_c, Shutdown};
use panel_poller::observability::{logging, metrics};
use panel_poller::poller::Poller;

#[derive(Parser)]
#[command(name = "panel-poller")]
#[command(version, about = "Keep console panels refreshed from HTTP endpoints", long_about = None)]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the dashboard bind address.
    #[arg(long)]
    dashboard_addr: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => PollerConfig::default(),
    };
    if let Some(addr) = args.dashboard_addr {
        config.dashboard.bind_address = addr;
    }

    logging::init_logging(&config.observability)?;

    tracing::info!("panel-poller v{} starting", env!("CARGO_PKG_VERSION"));
    if args.config.is_none() {
        tracing::warn!("No config file given; running with defaults and no panels");
    }
    tracing::info!(
        panels = config.panels.len(),
        base_url = %config.client.base_url,
        dashboard = config.dashboard.enabled,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr)?,
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let regions = Arc::new(RegionStore::new());
    for panel in &config.panels {
        regions.register(&panel.target, panel.initial_content.as_deref().unwrap_or(""));
    }

    let poller = Poller::from_config(&config, regions.clone())?;
    let loops = poller.start_panels(&config.panels)?;

    let shutdown = Shutdown::new();
    if config.dashboard.enabled {
        let listener = TcpListener::bind(&config.dashboard.bind_address).await?;
        let server = DashboardServer::new(&config.dashboard, regions.clone());
        let server_handle = tokio::spawn(server.run(listener, shutdown.subscribe()));

        shutdown_on_ctrl_c(&shutdown).await?;
        server_handle.await??;
    } else {
        shutdown_on_ctrl_c(&shutdown).await?;
    }

    tracing::info!(loops = loops.len(), "Shutdown complete");
    Ok(())
}
