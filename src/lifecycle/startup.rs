//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration
//! - Initialize logging and metrics
//! - Build the probe set and the monitor
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Config first, logging second, so config errors still reach stderr

use std::path::Path;
use thiserror::Error;

use crate::config::{load_config, ConfigError, MonitorConfig};
use crate::monitor::NetworkMonitor;
use crate::observability::logging::{self, LoggingError};
use crate::observability::metrics;
use crate::probe::{ProbeError, ProbeSet};

/// Environment variable holding the optional config file path.
pub const CONFIG_ENV: &str = "NETWATCH_CONFIG";

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("logging: {0}")]
    Logging(#[from] LoggingError),

    #[error("probes: {0}")]
    Probes(#[from] ProbeError),
}

/// Load the config named by `NETWATCH_CONFIG`, or defaults when unset.
pub fn resolve_config() -> Result<MonitorConfig, ConfigError> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => load_config(Path::new(&path)),
        None => Ok(MonitorConfig::default()),
    }
}

/// Bring up logging and metrics, then build the monitor on system probes.
pub fn start(config: &MonitorConfig) -> Result<NetworkMonitor, StartupError> {
    logging::init(&config.observability)?;

    tracing::info!(
        ping_target = %config.probes.ping_target,
        interval_secs = config.monitor.interval_secs,
        policy = ?config.diagnostics.policy,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let probes = ProbeSet::system(&config.probes)?;
    Ok(NetworkMonitor::new(config, probes))
}
