//! Metrics collection and exposition.
//!
//! # Metrics
//! - `netwatch_ping_avg_ms` (gauge): last average round-trip, absent on failure
//! - `netwatch_packet_loss_pct` (gauge): last packet loss, 100 on failure
//! - `netwatch_health_status` (gauge): 0=good, 1=warning, 2=critical
//! - `netwatch_alert_streak` (gauge): consecutive non-good samples
//! - `netwatch_site_up` (gauge, `site` label): 1=accessible, 0=not
//! - `netwatch_diagnostics_runs_total` (counter)
//!
//! # Design Decisions
//! - Recording goes through the `metrics` facade and is a no-op until an
//!   exporter is installed
//! - The Prometheus listener is opt-in; by default the daemon listens on nothing

use metrics::{counter, gauge};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;

use crate::monitor::types::{HealthStatus, PingResult, Sample};

/// Install the Prometheus exporter on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(%addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(%addr, error = %e, "Failed to install metrics exporter"),
    }
}

pub fn health_code(health: &HealthStatus) -> f64 {
    match health {
        HealthStatus::Good => 0.0,
        HealthStatus::Warning(_) => 1.0,
        HealthStatus::Critical(_) => 2.0,
    }
}

/// Record gauges for a freshly collected sample.
pub fn record_sample(sample: &Sample) {
    match sample.ping {
        PingResult::Success { avg_ping_ms, packet_loss_pct } => {
            gauge!("netwatch_ping_avg_ms").set(avg_ping_ms);
            gauge!("netwatch_packet_loss_pct").set(packet_loss_pct);
        }
        PingResult::Failure { .. } => {
            gauge!("netwatch_packet_loss_pct").set(100.0);
        }
    }
    gauge!("netwatch_health_status").set(health_code(&sample.health));

    for (site, result) in &sample.sites {
        let up = if result.is_accessible() { 1.0 } else { 0.0 };
        gauge!("netwatch_site_up", "site" => site.clone()).set(up);
    }
}

pub fn record_alert_streak(streak: u32) {
    gauge!("netwatch_alert_streak").set(f64::from(streak));
}

pub fn record_diagnostics_run() {
    counter!("netwatch_diagnostics_runs_total").increment(1);
}
