//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the monitor.
//! All types derive Serde traits for deserialization from config files.
//! Health thresholds are constants of the classifier and intentionally absent here.

use serde::{Deserialize, Serialize};

use crate::monitor::escalator::DiagnosticsPolicy;

/// Root configuration for the network monitor.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct MonitorConfig {
    /// Cycle and report scheduling.
    pub monitor: ScheduleConfig,

    /// Probe targets and deadlines.
    pub probes: ProbeConfig,

    /// Deep diagnostics settings.
    pub diagnostics: DiagnosticsConfig,

    /// Artifact storage.
    pub storage: StorageConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Scheduling configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Seconds between monitoring cycles.
    pub interval_secs: u64,

    /// Seconds between summary reports.
    pub report_interval_secs: u64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            interval_secs: 10,
            report_interval_secs: 3600,
        }
    }
}

/// Probe configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Host pinged every cycle.
    pub ping_target: String,

    /// Echo requests per ping.
    pub ping_count: u32,

    /// Deadline for the whole ping run, in seconds.
    pub ping_timeout_secs: u64,

    /// Deadline for a DNS lookup, in seconds.
    pub dns_timeout_secs: u64,

    /// Deadline for one HTTP check, in seconds.
    pub http_timeout_secs: u64,

    /// Deadline for a path trace, in seconds.
    pub trace_timeout_secs: u64,

    /// Sites checked for HTTP reachability, in display order.
    pub sites: Vec<String>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            ping_target: "8.8.8.8".to_string(),
            ping_count: 4,
            ping_timeout_secs: 15,
            dns_timeout_secs: 5,
            http_timeout_secs: 5,
            trace_timeout_secs: 20,
            sites: vec![
                "google.com".to_string(),
                "github.com".to_string(),
                "stackoverflow.com".to_string(),
                "wikipedia.org".to_string(),
                "yahoo.com".to_string(),
            ],
        }
    }
}

/// Diagnostics configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DiagnosticsConfig {
    /// Domain resolved to verify DNS.
    pub reference_domain: String,

    /// Address traced to inspect routing.
    pub trace_target: String,

    /// Re-trigger policy once the alert streak reaches the threshold.
    pub policy: DiagnosticsPolicy,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            reference_domain: "google.com".to_string(),
            trace_target: "8.8.8.8".to_string(),
            policy: DiagnosticsPolicy::EveryCycle,
        }
    }
}

/// Storage configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory receiving sample logs, traces and reports.
    pub data_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: "network_data".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Append logs to this file.
    pub log_file: Option<String>,

    /// Print the status screen after every cycle.
    pub console: bool,

    /// Enable the Prometheus endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_file: Some("network_monitor.log".to_string()),
            console: true,
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}
