//! Health classification.
//!
//! Rules are evaluated in order, first match wins:
//! ```text
//! ping failed           → Critical
//! loss  > 5 %           → Warning
//! avg   > 100 ms        → Warning
//! otherwise             → Good
//! ```

use crate::monitor::types::{HealthStatus, PingResult};

/// Packet loss above this percentage is a warning.
pub const PACKET_LOSS_THRESHOLD_PCT: f64 = 5.0;

/// Average round-trip above this many milliseconds is a warning.
pub const LATENCY_THRESHOLD_MS: f64 = 100.0;

/// Derive the health status of a cycle from its ping outcome.
pub fn classify(ping: &PingResult) -> HealthStatus {
    match *ping {
        PingResult::Failure { .. } => HealthStatus::Critical("internet not accessible".to_string()),
        PingResult::Success { packet_loss_pct, .. } if packet_loss_pct > PACKET_LOSS_THRESHOLD_PCT => {
            HealthStatus::Warning(format!("packet loss: {}%", packet_loss_pct))
        }
        PingResult::Success { avg_ping_ms, .. } if avg_ping_ms > LATENCY_THRESHOLD_MS => {
            HealthStatus::Warning(format!("high latency: {:.2} ms", avg_ping_ms))
        }
        PingResult::Success { .. } => HealthStatus::Good,
    }
}
