//! Host network-health monitor library.

pub mod config;
pub mod display;
pub mod lifecycle;
pub mod monitor;
pub mod observability;
pub mod probe;
pub mod resilience;
pub mod storage;

pub use config::MonitorConfig;
pub use lifecycle::Shutdown;
pub use monitor::NetworkMonitor;
