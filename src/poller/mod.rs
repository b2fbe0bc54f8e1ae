//! Poller subsystem.
//!
//! # Data Flow
//! ```text
//! Poller::start_poll(url, target, refresh)
//!     → request.rs (resolve URL, validate refresh)
//!     → poll_loop.rs (one PollLoop per call, owns its state.rs counter)
//!
//! Each cycle:
//!     Transport GET → ready-state changes
//!     → on_response_ready (Done only)
//!     → DisplaySurface update (body or failure message)
//!     → spawn timer → sleep(refresh) → next cycle
//! ```
//!
//! # Design Decisions
//! - No cancellation: a loop runs until the runtime shuts down
//! - No backoff, no timeout, no retries
//! - Nothing suppresses overlapping cycles; every Done reschedules
//! - Loops share nothing with each other

pub mod poll_loop;
pub mod request;
pub mod state;

use std::sync::Arc;
use thiserror::Error;
use url::Url;

use crate::config::{PanelConfig, PollerConfig};
use crate::display::DisplaySurface;
use crate::transport::{HttpTransport, Transport};

pub use poll_loop::PollLoop;
pub use request::PollRequest;
pub use state::{CycleOutcome, PollState};

/// Errors raised while setting up a poll loop.
#[derive(Debug, Error)]
pub enum PollError {
    #[error("invalid poll url '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("poll url '{url}' uses unsupported scheme '{scheme}' (only http)")]
    UnsupportedScheme { url: String, scheme: String },

    #[error("refresh interval for '{0}' must be greater than zero")]
    ZeroRefresh(String),
}

/// Starts poll loops that share a transport, a display and a failure message.
pub struct Poller<T, D> {
    transport: Arc<T>,
    display: Arc<D>,
    base_url: Url,
    failure_message: Arc<str>,
}

impl<T: Transport, D: DisplaySurface> Poller<T, D> {
    pub fn new(
        transport: Arc<T>,
        display: Arc<D>,
        base_url: Url,
        failure_message: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            transport,
            display,
            base_url,
            failure_message: failure_message.into(),
        }
    }

    /// Start polling `url` into region `target_id` every `refresh_ms` milliseconds.
    ///
    /// The first request is issued immediately. The returned handle is for
    /// inspection only; the loop cannot be stopped.
    pub fn start_poll(
        &self,
        url: &str,
        target_id: &str,
        refresh_ms: u64,
    ) -> Result<Arc<PollLoop<T, D>>, PollError> {
        let request = PollRequest::new(&self.base_url, url, target_id, refresh_ms)?;

        tracing::info!(
            target_id = %request.target,
            url = %request.url,
            refresh_ms,
            "Starting poll loop"
        );

        let poll_loop = Arc::new(PollLoop::new(
            request,
            self.transport.clone(),
            self.display.clone(),
            self.failure_message.clone(),
        ));
        poll_loop.start_poll();
        Ok(poll_loop)
    }

    /// Start one loop per configured panel.
    pub fn start_panels(&self, panels: &[PanelConfig]) -> Result<Vec<Arc<PollLoop<T, D>>>, PollError> {
        panels
            .iter()
            .map(|panel| self.start_poll(&panel.url, &panel.target, panel.refresh_ms))
            .collect()
    }
}

impl<D: DisplaySurface> Poller<HttpTransport, D> {
    /// Build an HTTP poller from configuration.
    pub fn from_config(config: &PollerConfig, display: Arc<D>) -> Result<Self, PollError> {
        let base_url = Url::parse(&config.client.base_url).map_err(|source| PollError::InvalidUrl {
            url: config.client.base_url.clone(),
            source,
        })?;
        let transport = Arc::new(HttpTransport::new(config.client.user_agent.clone()));

        Ok(Self::new(
            transport,
            display,
            base_url,
            config.failure_message.as_str(),
        ))
    }
}
