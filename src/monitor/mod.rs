//! Monitoring pipeline.
//!
//! # Data Flow
//! ```text
//! runner.rs (interval tick)
//!     → sampler.rs     (ProbeSet → Sample)
//!     → classifier.rs  (PingResult → HealthStatus)
//!     → escalator.rs   (streak counter → Escalation)
//!     → diagnostics.rs (only on Escalation::Diagnose)
//!     → history.rs     (rolling window, capacity 100)
//!
//! report tick / shutdown:
//!     history.rs → report.rs (Summary → text)
//! ```
//!
//! # Design Decisions
//! - Probe failures are data (`PingResult::Failure`, `SiteCheckResult::Inaccessible`)
//! - History and the alert counter live in an owned `MonitorState`
//! - Thresholds are constants, not configuration

pub mod classifier;
pub mod diagnostics;
pub mod escalator;
pub mod history;
pub mod report;
pub mod runner;
pub mod sampler;
pub mod state;
pub mod types;

pub use classifier::classify;
pub use diagnostics::{DiagnosticReport, Diagnostics};
pub use escalator::{AlertEscalator, AlertState, DiagnosticsPolicy, Escalation};
pub use history::{History, HISTORY_CAPACITY};
pub use report::{Reporter, Summary};
pub use runner::{NetworkMonitor, RunOutcome};
pub use sampler::Sampler;
pub use state::{run_cycle, CycleOutcome, MonitorState};
pub use types::{HealthStatus, InterfaceInfo, PingResult, Sample, SiteCheckResult, TrafficStats};
