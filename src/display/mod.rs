//! Display surface subsystem.
//!
//! # Data Flow
//! ```text
//! PollLoop outcome
//!     → DisplaySurface::set_content(region, markup)
//!     → regions.rs stores the raw markup per region
//!     → dashboard reads regions for browsers
//! ```
//!
//! # Design Decisions
//! - Content is opaque markup: never parsed, never sanitized
//! - Regions are keyed by caller-supplied string identifiers

pub mod regions;

pub use regions::{RegionSnapshot, RegionStore};

/// Something that can show raw content in named regions.
pub trait DisplaySurface: Send + Sync + 'static {
    /// Replace the content of `region` with `content`.
    fn set_content(&self, region: &str, content: &str);
}
