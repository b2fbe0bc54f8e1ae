//! Background panel poller library.

pub mod config;
pub mod dashboard;
pub mod display;
pub mod lifecycle;
pub mod observability;
pub mod poller;
pub mod transport;

pub use config::schema::PollerConfig;
pub use dashboard::DashboardServer;
pub use display::{DisplaySurface, RegionStore};
pub use lifecycle::Shutdown;
pub use poller::{PollLoop, Poller};
pub use transport::{HttpTransport, Transport};
