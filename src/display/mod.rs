//! Console status screen printed after every cycle.

use std::fmt;

use crate::monitor::escalator::Escalation;
use crate::monitor::state::CycleOutcome;
use crate::monitor::types::{HealthStatus, PingResult, Sample, SiteCheckResult};

const WIDE: &str = "============================================================";
const THIN: &str = "------------------------------------------------------------";

/// ANSI clear-screen and cursor-home sequence.
pub const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

fn mib(bytes: u64) -> f64 {
    bytes as f64 / (1024.0 * 1024.0)
}

fn badge(health: &HealthStatus) -> &'static str {
    match health {
        HealthStatus::Good => "[OK] Good",
        HealthStatus::Warning(_) => "[!!] Warning",
        HealthStatus::Critical(_) => "[XX] Critical",
    }
}

/// Render the status screen for the latest sample. Sites are listed in
/// `sites` order.
pub fn render_status(
    sample: &Sample,
    outcome: &CycleOutcome,
    sites: &[String],
    ping_target: &str,
    data_dir: &str,
) -> String {
    StatusScreen {
        sample,
        outcome,
        sites,
        ping_target,
        data_dir,
    }
    .to_string()
}

struct StatusScreen<'a> {
    sample: &'a Sample,
    outcome: &'a CycleOutcome,
    sites: &'a [String],
    ping_target: &'a str,
    data_dir: &'a str,
}

impl fmt::Display for StatusScreen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sample = self.sample;
        writeln!(f, "{WIDE}")?;
        writeln!(f, "Network Monitoring - {}", sample.timestamp.format("%Y-%m-%d %H:%M:%S"))?;
        writeln!(f, "{WIDE}")?;

        writeln!(f, "\nNetwork status: {}", badge(&sample.health))?;
        writeln!(f, "Message: {}", sample.health.message())?;
        match self.outcome.escalation {
            Escalation::Calm => {}
            Escalation::Alerting { streak } => writeln!(f, "Alert streak: {streak}")?,
            Escalation::Diagnose { streak } => {
                writeln!(f, "Alert streak: {streak} (diagnostics run, see log)")?
            }
        }

        writeln!(f, "\nNetwork interfaces:\n{THIN}")?;
        for iface in &sample.interfaces {
            writeln!(f, "Interface: {}", iface.name)?;
            writeln!(f, "IP address: {}", iface.ip_address)?;
            writeln!(f, "Netmask: {}", iface.netmask)?;
            match iface.broadcast {
                Some(broadcast) => writeln!(f, "Broadcast: {broadcast}")?,
                None => writeln!(f, "Broadcast: -")?,
            }
            writeln!(f, "------------------------------")?;
        }

        let t = &sample.traffic;
        writeln!(f, "\nNetwork traffic statistics:\n{THIN}")?;
        writeln!(f, "Bytes sent: {:.2} MB", mib(t.bytes_sent))?;
        writeln!(f, "Bytes received: {:.2} MB", mib(t.bytes_recv))?;
        writeln!(f, "Packets sent: {}", t.packets_sent)?;
        writeln!(f, "Packets received: {}", t.packets_recv)?;
        writeln!(f, "Input errors: {}", t.err_in)?;
        writeln!(f, "Output errors: {}", t.err_out)?;
        writeln!(f, "Dropped input packets: {}", t.drop_in)?;
        writeln!(f, "Dropped output packets: {}", t.drop_out)?;

        writeln!(f, "\nPing results to {}:\n{THIN}", self.ping_target)?;
        match &sample.ping {
            PingResult::Success { avg_ping_ms, packet_loss_pct } => {
                writeln!(f, "Average ping: {avg_ping_ms:.2} ms")?;
                writeln!(f, "Packet loss: {packet_loss_pct}%")?;
            }
            PingResult::Failure { error } => writeln!(f, "Ping failed: {error}")?,
        }

        writeln!(f, "\nWebsite status:\n{THIN}")?;
        for site in self.sites {
            match sample.sites.get(site) {
                Some(SiteCheckResult::Accessible { status_code, response_time_ms }) => writeln!(
                    f,
                    "{site}: Accessible (Code {status_code}, Response time: {response_time_ms:.2} ms)"
                )?,
                Some(SiteCheckResult::Inaccessible { error }) => {
                    writeln!(f, "{site}: Not accessible ({error})")?
                }
                None => writeln!(f, "{site}: Not checked")?,
            }
        }

        writeln!(f, "\nData is saved in the '{}' folder.", self.data_dir)?;
        writeln!(f, "\nMonitoring... (Press Ctrl+C to exit)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::types::{InterfaceInfo, TrafficStats};
    use chrono::{Local, TimeZone};
    use std::collections::BTreeMap;
    use std::net::Ipv4Addr;

    fn sample() -> Sample {
        Sample {
            timestamp: Local.with_ymd_and_hms(2026, 10, 16, 8, 30, 0).unwrap(),
            interfaces: vec![InterfaceInfo::from_prefix("eth0", Ipv4Addr::new(192, 168, 0, 7), 24)],
            traffic: TrafficStats {
                bytes_sent: 3 * 1024 * 1024,
                ..TrafficStats::default()
            },
            ping: PingResult::Success { avg_ping_ms: 140.0, packet_loss_pct: 0.0 },
            sites: BTreeMap::from([
                (
                    "up.example".to_string(),
                    SiteCheckResult::Accessible { status_code: 200, response_time_ms: 35.5 },
                ),
                (
                    "down.example".to_string(),
                    SiteCheckResult::Inaccessible { error: "timed out".into() },
                ),
            ]),
            health: HealthStatus::Warning("high latency: 140.00 ms".into()),
        }
    }

    #[test]
    fn test_render_status() {
        let outcome = CycleOutcome {
            escalation: Escalation::Diagnose { streak: 3 },
            diagnostics: None,
        };
        let sites = vec!["up.example".to_string(), "down.example".to_string()];
        let text = render_status(&sample(), &outcome, &sites, "8.8.8.8", "network_data");

        assert!(text.contains("Network status: [!!] Warning"));
        assert!(text.contains("Message: high latency: 140.00 ms"));
        assert!(text.contains("Alert streak: 3 (diagnostics run"));
        assert!(text.contains("Broadcast: 192.168.0.255"));
        assert!(text.contains("Bytes sent: 3.00 MB"));
        assert!(text.contains("Ping results to 8.8.8.8"));
        assert!(text.contains("up.example: Accessible (Code 200, Response time: 35.50 ms)"));
        assert!(text.contains("down.example: Not accessible (timed out)"));
    }

    #[test]
    fn test_sites_follow_configured_order() {
        let outcome = CycleOutcome {
            escalation: Escalation::Calm,
            diagnostics: None,
        };
        let sites = vec![
            "up.example".to_string(),
            "down.example".to_string(),
            "extra.example".to_string(),
        ];
        let text = render_status(&sample(), &outcome, &sites, "8.8.8.8", "network_data");

        let up = text.find("up.example:").unwrap();
        let down = text.find("down.example:").unwrap();
        let extra = text.find("extra.example: Not checked").unwrap();
        assert!(up < down && down < extra);
        assert!(text.ends_with("(Press Ctrl+C to exit)\n"));
    }
}
