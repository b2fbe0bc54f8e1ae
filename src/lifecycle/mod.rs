//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Validate → Logging/metrics → Seed regions → Start poll loops → Serve dashboard
//!
//! Shutdown:
//!     Ctrl+C (signals.rs) → Shutdown broadcast (shutdown.rs) → Dashboard drains → Runtime exits
//! ```
//!
//! # Design Decisions
//! - Poll loops are not cancellable; they end with the runtime
//! - Only the dashboard listens for the shutdown broadcast

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
