//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check panel targets are present and unique
//! - Check panel URLs resolve against the base URL to a plain http:// endpoint
//! - Validate value ranges (refresh > 0, addresses parse)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: PollerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::net::SocketAddr;
use thiserror::Error;
use url::Url;

use crate::config::schema::PollerConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("client.base_url '{0}' is not an absolute URL")]
    InvalidBaseUrl(String),

    #[error("panel #{0} has an empty target")]
    EmptyTarget(usize),

    #[error("panel target '{0}' is defined more than once")]
    DuplicateTarget(String),

    #[error("panel '{0}' has an empty url")]
    EmptyUrl(String),

    #[error("panel '{target}' url '{url}' cannot be resolved")]
    InvalidUrl { target: String, url: String },

    #[error("panel '{target}' url '{url}' uses unsupported scheme '{scheme}' (only http)")]
    UnsupportedScheme { target: String, url: String, scheme: String },

    #[error("panel '{0}' refresh_ms must be greater than zero")]
    ZeroRefresh(String),

    #[error("{field} '{value}' is not a valid socket address")]
    InvalidAddress { field: &'static str, value: String },
}

/// Validate a parsed configuration.
pub fn validate_config(config: &PollerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let base = match Url::parse(&config.client.base_url) {
        Ok(url) => Some(url),
        Err(_) => {
            errors.push(ValidationError::InvalidBaseUrl(config.client.base_url.clone()));
            None
        }
    };

    let mut seen = HashSet::new();
    for (index, panel) in config.panels.iter().enumerate() {
        if panel.target.trim().is_empty() {
            errors.push(ValidationError::EmptyTarget(index));
        } else if !seen.insert(panel.target.as_str()) {
            errors.push(ValidationError::DuplicateTarget(panel.target.clone()));
        }

        if panel.url.trim().is_empty() {
            errors.push(ValidationError::EmptyUrl(panel.target.clone()));
        } else if let Some(base) = &base {
            match base.join(&panel.url) {
                Ok(resolved) if resolved.scheme() != "http" => {
                    errors.push(ValidationError::UnsupportedScheme {
                        target: panel.target.clone(),
                        url: panel.url.clone(),
                        scheme: resolved.scheme().to_string(),
                    });
                }
                Ok(_) => {}
                Err(_) => {
                    errors.push(ValidationError::InvalidUrl {
                        target: panel.target.clone(),
                        url: panel.url.clone(),
                    });
                }
            }
        }

        if panel.refresh_ms == 0 {
            errors.push(ValidationError::ZeroRefresh(panel.target.clone()));
        }
    }

    if config.dashboard.enabled && config.dashboard.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "dashboard.bind_address",
            value: config.dashboard.bind_address.clone(),
        });
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
