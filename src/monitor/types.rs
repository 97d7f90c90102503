//! Sample data model.
//!
//! Every probe outcome is a tagged variant so callers match exhaustively
//! instead of poking at optional keys. These types are also the persisted
//! line format: one `Sample` per JSON line.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::net::Ipv4Addr;

/// One complete snapshot of network state from a single monitoring cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Captured once per cycle and reused for artifact naming.
    pub timestamp: DateTime<Local>,
    pub interfaces: Vec<InterfaceInfo>,
    pub traffic: TrafficStats,
    pub ping: PingResult,
    pub sites: BTreeMap<String, SiteCheckResult>,
    pub health: HealthStatus,
}

impl Sample {
    /// Day key used to pick the daily sample log (`YYYYMMDD`).
    pub fn day_key(&self) -> String {
        self.timestamp.format("%Y%m%d").to_string()
    }

    /// Second-resolution key used for trace and report artifacts.
    pub fn stamp_key(&self) -> String {
        self.timestamp.format("%Y%m%d_%H%M%S").to_string()
    }

    /// Whether `site` was reachable in this sample. Untracked sites count as down.
    pub fn site_accessible(&self, site: &str) -> bool {
        self.sites
            .get(site)
            .map(SiteCheckResult::is_accessible)
            .unwrap_or(false)
    }
}

/// An IPv4 address assigned to a host interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceInfo {
    pub name: String,
    pub ip_address: Ipv4Addr,
    pub netmask: Ipv4Addr,
    pub broadcast: Option<Ipv4Addr>,
}

impl InterfaceInfo {
    /// Build a row from an address and its CIDR prefix length.
    ///
    /// Loopback and /31, /32 networks have no broadcast address.
    pub fn from_prefix(name: impl Into<String>, ip_address: Ipv4Addr, prefix: u8) -> Self {
        let prefix = prefix.min(32);
        let mask = if prefix == 0 {
            0
        } else {
            u32::MAX << (32 - u32::from(prefix))
        };
        let broadcast = if prefix >= 31 || ip_address.is_loopback() {
            None
        } else {
            Some(Ipv4Addr::from(u32::from(ip_address) | !mask))
        };

        Self {
            name: name.into(),
            ip_address,
            netmask: Ipv4Addr::from(mask),
            broadcast,
        }
    }
}

/// Cumulative interface counters summed across the host, as reported at sample time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficStats {
    pub bytes_sent: u64,
    pub bytes_recv: u64,
    pub packets_sent: u64,
    pub packets_recv: u64,
    pub err_in: u64,
    pub err_out: u64,
    pub drop_in: u64,
    pub drop_out: u64,
}

impl TrafficStats {
    pub fn has_errors(&self) -> bool {
        self.err_in > 0 || self.err_out > 0
    }

    pub fn has_drops(&self) -> bool {
        self.drop_in > 0 || self.drop_out > 0
    }
}

/// Outcome of a reachability probe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PingResult {
    Success { avg_ping_ms: f64, packet_loss_pct: f64 },
    Failure { error: String },
}

impl PingResult {
    pub fn avg_ping_ms(&self) -> Option<f64> {
        match self {
            PingResult::Success { avg_ping_ms, .. } => Some(*avg_ping_ms),
            PingResult::Failure { .. } => None,
        }
    }
}

/// Outcome of an HTTP reachability check against one site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SiteCheckResult {
    Accessible { status_code: u16, response_time_ms: f64 },
    Inaccessible { error: String },
}

impl SiteCheckResult {
    pub fn is_accessible(&self) -> bool {
        matches!(self, SiteCheckResult::Accessible { .. })
    }
}

/// Classified health of a single sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum HealthStatus {
    Good,
    Warning(String),
    Critical(String),
}

impl HealthStatus {
    pub fn is_good(&self) -> bool {
        matches!(self, HealthStatus::Good)
    }

    /// Lowercase label used in reports and logs.
    pub fn label(&self) -> &'static str {
        match self {
            HealthStatus::Good => "good",
            HealthStatus::Warning(_) => "warning",
            HealthStatus::Critical(_) => "critical",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            HealthStatus::Good => "network is healthy",
            HealthStatus::Warning(reason) | HealthStatus::Critical(reason) => reason,
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label(), self.message())
    }
}
