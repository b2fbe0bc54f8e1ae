//! HTTP transport backed by the hyper-util legacy client.
//!
//! # Responsibilities
//! - Issue GET requests with an empty body
//! - Report each ready-state change over the request's channel
//! - Collapse connection and body errors into a status-0 completion

use axum::body::Body;
use axum::http::Request;
use hyper::body::Incoming;
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use tokio::sync::mpsc;
use url::Url;

use crate::transport::{Response, Transport};

/// Plain-HTTP transport shared by every poll loop.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client<HttpConnector, Body>,
    user_agent: String,
}

impl HttpTransport {
    pub fn new(user_agent: impl Into<String>) -> Self {
        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());

        Self {
            client,
            user_agent: user_agent.into(),
        }
    }

    async fn fetch(
        client: Client<HttpConnector, Body>,
        request: Request<Body>,
        url: Url,
        tx: mpsc::UnboundedSender<Response>,
    ) {
        let _ = tx.send(Response::opened());

        let response: axum::http::Response<Incoming> = match client.request(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Poll request failed: connection error");
                let _ = tx.send(Response::network_error());
                return;
            }
        };

        let status = response.status().as_u16();
        let _ = tx.send(Response::headers_received(status));
        let _ = tx.send(Response::loading(status));

        match axum::body::to_bytes(Body::new(response.into_body()), usize::MAX).await {
            Ok(bytes) => {
                let body = String::from_utf8_lossy(&bytes).into_owned();
                let _ = tx.send(Response::done(status, body));
            }
            Err(e) => {
                tracing::warn!(url = %url, status, error = %e, "Poll request failed: body read error");
                let _ = tx.send(Response::network_error());
            }
        }
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &Url) -> mpsc::UnboundedReceiver<Response> {
        let (tx, rx) = mpsc::unbounded_channel();

        let request = Request::builder()
            .method("GET")
            .uri(url.as_str())
            .header("user-agent", self.user_agent.as_str())
            .body(Body::empty());

        match request {
            Ok(request) => {
                tokio::spawn(Self::fetch(self.client.clone(), request, url.clone(), tx));
            }
            Err(e) => {
                tracing::error!(url = %url, error = %e, "Failed to build poll request");
                let _ = tx.send(Response::network_error());
            }
        }

        rx
    }
}
