//! Dashboard serving the display regions to browsers.
//!
//! # Routes
//! - `GET /` — HTML page, one `<div id>` per region
//! - `GET /status` — version and region count
//! - `GET /regions` — JSON snapshot of every region
//! - `GET /regions/{id}` — raw content of one region

pub mod handlers;

use std::sync::Arc;
use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::config::DashboardConfig;
use crate::display::RegionStore;
use self::handlers::*;

/// State injected into dashboard handlers.
#[derive(Clone)]
pub struct DashboardState {
    pub regions: Arc<RegionStore>,
    pub title: Arc<str>,
}

pub fn setup_dashboard_router(state: DashboardState) -> Router {
    Router::new()
        .route("/", get(get_index))
        .route("/status", get(get_status))
        .route("/regions", get(get_regions))
        .route("/regions/{id}", get(get_region))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// HTTP server for the dashboard.
pub struct DashboardServer {
    router: Router,
}

impl DashboardServer {
    pub fn new(config: &DashboardConfig, regions: Arc<RegionStore>) -> Self {
        let state = DashboardState {
            regions,
            title: Arc::from(config.title.as_str()),
        };

        Self {
            router: setup_dashboard_router(state),
        }
    }

    /// Serve until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "Dashboard listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("Dashboard stopped");
        Ok(())
    }
}
