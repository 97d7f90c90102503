//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events, stderr and/or log file)
//!     → metrics.rs (gauges and counters per cycle)
//!
//! Consumers:
//!     → Log file (network_monitor.log by default)
//!     → Metrics endpoint (Prometheus scrape, opt-in)
//! ```

pub mod logging;
pub mod metrics;
