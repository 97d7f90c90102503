//! Deep diagnostics run after a sustained degraded streak.
//!
//! # Steps
//! 1. Resolve the reference domain → `dns_ok`
//! 2. Trace the reference address → `trace_output`
//! 3. Re-read interfaces → `interfaces_found`
//! 4. Re-read traffic counters → error / drop flags
//!
//! # Design Decisions
//! - Steps are independent; one failing step never skips the others
//! - Findings are logged here; the report is not fed back into escalation

use crate::config::DiagnosticsConfig;
use crate::probe::ProbeSet;

/// Findings of one diagnostics run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticReport {
    pub dns_ok: bool,
    /// Present only when the trace completed.
    pub trace_output: Option<String>,
    pub interfaces_found: bool,
    pub has_traffic_errors: bool,
    pub has_dropped_packets: bool,
}

impl DiagnosticReport {
    /// True when no step surfaced a problem.
    pub fn is_clean(&self) -> bool {
        self.dns_ok
            && self.trace_output.is_some()
            && self.interfaces_found
            && !self.has_traffic_errors
            && !self.has_dropped_packets
    }
}

pub struct Diagnostics {
    probes: ProbeSet,
    reference_domain: String,
    trace_target: String,
}

impl Diagnostics {
    pub fn new(probes: ProbeSet, config: &DiagnosticsConfig) -> Self {
        Self {
            probes,
            reference_domain: config.reference_domain.clone(),
            trace_target: config.trace_target.clone(),
        }
    }

    pub async fn run(&self) -> DiagnosticReport {
        tracing::info!("Diagnosing network issues...");

        let dns_ok = match self.probes.resolver.lookup(&self.reference_domain).await {
            Ok(ip) => {
                tracing::debug!(domain = %self.reference_domain, %ip, "DNS lookup succeeded");
                true
            }
            Err(e) => {
                tracing::error!(domain = %self.reference_domain, error = %e, "DNS problem: unable to resolve domain name");
                false
            }
        };

        let trace_output = match self.probes.tracer.trace(&self.trace_target).await {
            Ok(output) => Some(output),
            Err(e) => {
                tracing::error!(target_host = %self.trace_target, error = %e, "Network routing problem");
                None
            }
        };

        let interfaces_found = !self.probes.inspector.interfaces().is_empty();
        if !interfaces_found {
            tracing::error!("No network interface found with an IPv4 address");
        }

        let (has_traffic_errors, has_dropped_packets) = match self.probes.inspector.traffic_stats() {
            Ok(stats) => {
                if stats.has_errors() {
                    tracing::error!(input = stats.err_in, output = stats.err_out, "Network errors");
                }
                if stats.has_drops() {
                    tracing::error!(input = stats.drop_in, output = stats.drop_out, "Lost packets");
                }
                (stats.has_errors(), stats.has_drops())
            }
            Err(e) => {
                tracing::error!(error = %e, "Traffic counters unavailable");
                (false, false)
            }
        };

        DiagnosticReport {
            dns_ok,
            trace_output,
            interfaces_found,
            has_traffic_errors,
            has_dropped_packets,
        }
    }
}
