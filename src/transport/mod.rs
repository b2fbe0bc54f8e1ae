//! Outbound HTTP transport subsystem.
//!
//! # Data Flow
//! ```text
//! PollLoop issues GET(url)
//!     → Transport::get returns a channel of ready-state changes
//!     → http.rs drives a hyper-util client and reports:
//!         Opened → HeadersReceived(status) → Loading(status) → Done(status, body)
//!     → PollLoop inspects each change, acting only on Done
//! ```
//!
//! # Design Decisions
//! - One uniform abstraction for every transport
//! - Connection errors complete the request with status 0
//! - No request timeout: a request that never completes never reports Done

pub mod http;

use tokio::sync::mpsc;
use url::Url;

pub use http::HttpTransport;

/// Lifecycle phase of an in-flight request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReadyState {
    /// Request sent, nothing received yet.
    Opened,
    /// Status line and headers received.
    HeadersReceived,
    /// Body is being received.
    Loading,
    /// Request finished, successfully or not.
    Done,
}

/// A ready-state change reported by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub ready_state: ReadyState,
    /// HTTP status, or 0 when nothing was received.
    pub status: u16,
    /// Response body as text; empty until `Done`.
    pub body: String,
}

impl Response {
    pub fn opened() -> Self {
        Self {
            ready_state: ReadyState::Opened,
            status: 0,
            body: String::new(),
        }
    }

    pub fn headers_received(status: u16) -> Self {
        Self {
            ready_state: ReadyState::HeadersReceived,
            status,
            body: String::new(),
        }
    }

    pub fn loading(status: u16) -> Self {
        Self {
            ready_state: ReadyState::Loading,
            status,
            body: String::new(),
        }
    }

    pub fn done(status: u16, body: impl Into<String>) -> Self {
        Self {
            ready_state: ReadyState::Done,
            status,
            body: body.into(),
        }
    }

    /// Transport-level failure (refused connection, reset, bad URI).
    pub fn network_error() -> Self {
        Self::done(0, String::new())
    }

    pub fn is_complete(&self) -> bool {
        self.ready_state == ReadyState::Done
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Asynchronous GET with ready-state notifications.
pub trait Transport: Send + Sync + 'static {
    /// Start a GET to `url`.
    ///
    /// Ready-state changes arrive on the returned channel in order. The
    /// channel may stay open forever if the remote never answers.
    fn get(&self, url: &Url) -> mpsc::UnboundedReceiver<Response>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_done_is_complete() {
        assert!(!Response::opened().is_complete());
        assert!(!Response::headers_received(200).is_complete());
        assert!(!Response::loading(200).is_complete());
        assert!(Response::done(200, "x").is_complete());
    }

    #[test]
    fn test_network_error_is_complete_failure() {
        let response = Response::network_error();
        assert!(response.is_complete());
        assert!(!response.is_ok());
        assert_eq!(response.status, 0);
    }

    #[test]
    fn test_only_200_is_ok() {
        assert!(Response::done(200, "").is_ok());
        assert!(!Response::done(204, "").is_ok());
        assert!(!Response::done(304, "").is_ok());
    }
}
