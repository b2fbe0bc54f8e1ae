//! Metrics collection and exposition.
//!
//! # Metrics
//! - `poller_cycles_total` (counter): completed cycles by target, outcome
//! - `poller_response_status_total` (counter): completed responses by target, status
//! - `poller_consecutive_failures` (gauge): current failure streak per target (0 or 1)

use std::net::SocketAddr;
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::poller::CycleOutcome;

/// Install the Prometheus exporter listening on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Record a completed cycle.
pub fn record_cycle(target: &str, outcome: CycleOutcome, consecutive_failures: u32) {
    ::metrics::counter!(
        "poller_cycles_total",
        "target" => target.to_string(),
        "outcome" => outcome.as_str()
    )
    .increment(1);
    ::metrics::gauge!("poller_consecutive_failures", "target" => target.to_string())
        .set(f64::from(consecutive_failures));
}

/// Record the status of a completed response.
pub fn record_response_status(target: &str, status: u16) {
    ::metrics::counter!(
        "poller_response_status_total",
        "target" => target.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}
