//! Reachability probe backed by the system `ping` command.

use async_trait::async_trait;
use std::time::Duration;
use tokio::process::Command;

use crate::monitor::types::PingResult;
use crate::probe::{describe_status, ProbeError, Prober};
use crate::resilience::timeouts::with_timeout;

/// Runs `ping -c <count>` (`-n` on Windows) and scrapes average RTT and loss.
#[derive(Debug, Clone)]
pub struct SystemPinger {
    timeout: Duration,
}

impl SystemPinger {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    async fn run(&self, host: &str, count: u32) -> Result<(f64, f64), ProbeError> {
        let count_flag = if cfg!(windows) { "-n" } else { "-c" };
        let mut command = Command::new("ping");
        command.arg(count_flag).arg(count.to_string()).arg(host).kill_on_drop(true);

        let output = with_timeout(self.timeout, async {
            command
                .output()
                .await
                .map_err(|source| ProbeError::Spawn { command: "ping", source })
        })
        .await?;

        if !output.status.success() {
            return Err(ProbeError::CommandFailed {
                command: "ping",
                status: describe_status(output.status),
            });
        }

        parse_ping_output(&String::from_utf8_lossy(&output.stdout))
    }
}

#[async_trait]
impl Prober for SystemPinger {
    async fn ping(&self, host: &str, count: u32) -> PingResult {
        match self.run(host, count).await {
            Ok((avg_ping_ms, packet_loss_pct)) => PingResult::Success { avg_ping_ms, packet_loss_pct },
            Err(e) => {
                tracing::error!(host, error = %e, "Error pinging host");
                PingResult::Failure { error: e.to_string() }
            }
        }
    }
}

/// Extract `(avg_ms, loss_pct)` from Linux, BSD/macOS or Windows ping output.
pub fn parse_ping_output(output: &str) -> Result<(f64, f64), ProbeError> {
    let avg = parse_average(output).ok_or(ProbeError::Parse("ping average"))?;
    let loss = parse_loss(output).ok_or(ProbeError::Parse("ping loss"))?;
    Ok((avg, loss))
}

fn parse_average(output: &str) -> Option<f64> {
    for line in output.lines() {
        // rtt min/avg/max/mdev = 9.1/10.2/11.3/0.8 ms
        if line.contains("min/avg/max") {
            let values = line.split('=').nth(1)?;
            return values.trim().split('/').nth(1)?.trim().parse().ok();
        }
        // Minimum = 10ms, Maximum = 12ms, Average = 11ms
        if let Some(idx) = line.find("Average = ") {
            let rest = &line[idx + "Average = ".len()..];
            return rest.trim().trim_end_matches("ms").trim().parse().ok();
        }
    }
    None
}

fn parse_loss(output: &str) -> Option<f64> {
    for line in output.lines() {
        let Some(idx) = line.find("% packet loss").or_else(|| line.find("% loss")) else {
            continue;
        };
        let head = &line[..idx];
        let token = head.rsplit(|c: char| c.is_whitespace() || c == '(').next()?;
        return token.parse().ok();
    }
    None
}
