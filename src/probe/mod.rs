//! Probe capabilities consumed by the monitoring pipeline.
//!
//! # Data Flow
//! ```text
//! Sampler / Diagnostics
//!     → ProbeSet (trait objects)
//!         → ping.rs     (system `ping`, round-trip + loss)
//!         → dns.rs      (resolver lookup)
//!         → http.rs     (reqwest GET, 5s deadline)
//!         → trace.rs    (system `traceroute`, 20s deadline)
//!         → inspect.rs  (interfaces + traffic counters)
//! ```
//!
//! # Design Decisions
//! - Output scraping stays inside the implementations; the core only sees
//!   `PingResult` / `SiteCheckResult` / plain values
//! - Every call carries its own deadline (see `resilience::timeouts`)
//! - Probes never panic or propagate faults into the cycle; failures are data

pub mod dns;
pub mod http;
pub mod inspect;
pub mod ping;
pub mod trace;

use async_trait::async_trait;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::config::ProbeConfig;
use crate::monitor::types::{InterfaceInfo, PingResult, SiteCheckResult, TrafficStats};

/// Errors raised inside probe implementations.
///
/// These never reach the monitoring core; the sampler and diagnostics turn
/// them into failure variants or flags.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// Probe did not finish within its deadline.
    #[error("timed out after {0:?}")]
    Timeout(Duration),

    /// External command could not be started.
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// External command ran but reported failure.
    #[error("`{command}` exited with {status}")]
    CommandFailed { command: &'static str, status: String },

    /// Command output did not have the expected shape.
    #[error("could not parse {0} output")]
    Parse(&'static str),

    /// Name resolution failed or returned no addresses.
    #[error("DNS lookup for {domain} failed: {reason}")]
    Resolve { domain: String, reason: String },

    /// HTTP client construction or request failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Reading host counters failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Round-trip and loss measurement.
#[async_trait]
pub trait Prober: Send + Sync {
    async fn ping(&self, host: &str, count: u32) -> PingResult;
}

/// Name resolution.
#[async_trait]
pub trait Resolver: Send + Sync {
    async fn lookup(&self, domain: &str) -> Result<IpAddr, ProbeError>;
}

/// HTTP reachability of a site.
#[async_trait]
pub trait HttpChecker: Send + Sync {
    async fn check(&self, host: &str) -> SiteCheckResult;
}

/// Network path tracing.
#[async_trait]
pub trait Tracer: Send + Sync {
    async fn trace(&self, host: &str) -> Result<String, ProbeError>;
}

/// Host interface inventory and traffic counters.
pub trait NetInspector: Send + Sync {
    fn interfaces(&self) -> Vec<InterfaceInfo>;
    fn traffic_stats(&self) -> Result<TrafficStats, ProbeError>;
}

/// The full set of probes one cycle draws from.
#[derive(Clone)]
pub struct ProbeSet {
    pub prober: Arc<dyn Prober>,
    pub resolver: Arc<dyn Resolver>,
    pub http: Arc<dyn HttpChecker>,
    pub tracer: Arc<dyn Tracer>,
    pub inspector: Arc<dyn NetInspector>,
}

impl ProbeSet {
    /// Probes backed by the host: system commands, the OS resolver, reqwest and sysinfo.
    pub fn system(config: &ProbeConfig) -> Result<Self, ProbeError> {
        Ok(Self {
            prober: Arc::new(ping::SystemPinger::new(Duration::from_secs(config.ping_timeout_secs))),
            resolver: Arc::new(dns::SystemResolver::new(Duration::from_secs(config.dns_timeout_secs))),
            http: Arc::new(http::ReqwestChecker::new(Duration::from_secs(config.http_timeout_secs))?),
            tracer: Arc::new(trace::SystemTracer::new(Duration::from_secs(config.trace_timeout_secs))),
            inspector: Arc::new(inspect::SystemInspector),
        })
    }
}

/// Exit-status description for error messages.
pub(crate) fn describe_status(status: std::process::ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("exit code {code}"),
        None => "signal".to_string(),
    }
}
