//! Poll request definition.

use std::time::Duration;
use url::Url;

use crate::poller::PollError;

/// Where to poll, what to update, and how often.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollRequest {
    pub url: Url,
    pub target: String,
    pub refresh: Duration,
}

impl PollRequest {
    /// Build a request, resolving `url` against `base` when it is relative.
    pub fn new(base: &Url, url: &str, target: &str, refresh_ms: u64) -> Result<Self, PollError> {
        if refresh_ms == 0 {
            return Err(PollError::ZeroRefresh(target.to_string()));
        }

        let url = base.join(url).map_err(|source| PollError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        if url.scheme() != "http" {
            return Err(PollError::UnsupportedScheme {
                scheme: url.scheme().to_string(),
                url: url.to_string(),
            });
        }

        Ok(Self {
            url,
            target: target.to_string(),
            refresh: Duration::from_millis(refresh_ms),
        })
    }
}
