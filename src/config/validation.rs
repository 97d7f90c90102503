//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (intervals and timeouts > 0)
//! - Detect blank or duplicate site entries
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: MonitorConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::fmt;
use std::net::SocketAddr;

use crate::config::schema::MonitorConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Check a parsed configuration for semantic errors.
pub fn validate_config(config: &MonitorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let positive = [
        ("monitor.interval_secs", config.monitor.interval_secs),
        ("monitor.report_interval_secs", config.monitor.report_interval_secs),
        ("probes.ping_timeout_secs", config.probes.ping_timeout_secs),
        ("probes.dns_timeout_secs", config.probes.dns_timeout_secs),
        ("probes.http_timeout_secs", config.probes.http_timeout_secs),
        ("probes.trace_timeout_secs", config.probes.trace_timeout_secs),
    ];
    for (field, value) in positive {
        if value == 0 {
            errors.push(ValidationError::new(field, "must be greater than zero"));
        }
    }

    if config.probes.ping_count == 0 {
        errors.push(ValidationError::new("probes.ping_count", "must be greater than zero"));
    }

    for (field, value) in [
        ("probes.ping_target", &config.probes.ping_target),
        ("diagnostics.reference_domain", &config.diagnostics.reference_domain),
        ("diagnostics.trace_target", &config.diagnostics.trace_target),
        ("storage.data_dir", &config.storage.data_dir),
    ] {
        if value.trim().is_empty() {
            errors.push(ValidationError::new(field, "must not be empty"));
        }
    }

    if config.probes.sites.is_empty() {
        errors.push(ValidationError::new("probes.sites", "at least one site is required"));
    }
    let mut seen = HashSet::new();
    for (i, site) in config.probes.sites.iter().enumerate() {
        if site.trim().is_empty() {
            errors.push(ValidationError::new(format!("probes.sites[{i}]"), "must not be empty"));
        } else if !seen.insert(site.as_str()) {
            errors.push(ValidationError::new(
                format!("probes.sites[{i}]"),
                format!("duplicate site '{site}'"),
            ));
        }
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::new(
            "observability.metrics_address",
            format!("'{}' is not a socket address", config.observability.metrics_address),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
