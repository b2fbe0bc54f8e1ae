//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Poll loops and the dashboard produce:
//!     → logging.rs (structured log events, one span per poll cycle)
//!     → metrics.rs (cycle outcomes, response statuses, failure streaks)
//!
//! Consumers:
//!     → stdout
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Every poll cycle gets its own span with a UUID so overlapping cycles can be told apart
//! - Metrics are cheap; with no exporter installed they are no-ops

pub mod logging;
pub mod metrics;
