//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → PollerConfig (validated, immutable)
//!     → panels handed to the poller, dashboard settings to the server
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; loops cannot be stopped, so there is no reload
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::ClientConfig;
pub use schema::DashboardConfig;
pub use schema::ObservabilityConfig;
pub use schema::PanelConfig;
pub use schema::PollerConfig;
pub use validation::ValidationError;
