//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the poller.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Markup written to a region once a failure streak is surfaced.
pub const DEFAULT_FAILURE_MESSAGE: &str = "<hr><b>Router is down</b>";

/// Root configuration for the poller.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PollerConfig {
    /// Static markup shown after the second consecutive failed poll.
    pub failure_message: String,

    /// HTTP client settings shared by every panel.
    pub client: ClientConfig,

    /// Panels to keep refreshed, one poll loop each.
    pub panels: Vec<PanelConfig>,

    /// Dashboard serving the display regions.
    pub dashboard: DashboardConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            failure_message: DEFAULT_FAILURE_MESSAGE.to_string(),
            client: ClientConfig::default(),
            panels: Vec::new(),
            dashboard: DashboardConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// HTTP client configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL that relative panel URLs are resolved against.
    pub base_url: String,

    /// User-Agent header sent with every poll.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:7657/".to_string(),
            user_agent: concat!("panel-poller/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// A display region and the endpoint that feeds it.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PanelConfig {
    /// Region identifier the response body is written to.
    pub target: String,

    /// Endpoint polled with GET (absolute, or relative to `client.base_url`).
    pub url: String,

    /// Delay before the next poll once the current one completes.
    #[serde(default = "default_refresh_ms")]
    pub refresh_ms: u64,

    /// Content shown until the first successful poll.
    #[serde(default)]
    pub initial_content: Option<String>,
}

fn default_refresh_ms() -> u64 {
    60_000
}

/// Dashboard configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Serve the regions over HTTP.
    pub enabled: bool,

    /// Dashboard bind address.
    pub bind_address: String,

    /// Page title for the HTML view.
    pub title: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            bind_address: "127.0.0.1:7658".to_string(),
            title: "Console".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}
