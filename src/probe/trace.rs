//! Path tracing backed by the system `traceroute` (`tracert` on Windows).

use async_trait::async_trait;
use std::time::Duration;
use tokio::process::Command;

use crate::probe::{describe_status, ProbeError, Tracer};
use crate::resilience::timeouts::with_timeout;

#[derive(Debug, Clone)]
pub struct SystemTracer {
    timeout: Duration,
}

impl SystemTracer {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl Tracer for SystemTracer {
    async fn trace(&self, host: &str) -> Result<String, ProbeError> {
        let program = if cfg!(windows) { "tracert" } else { "traceroute" };
        let mut command = Command::new(program);
        command.arg(host).kill_on_drop(true);

        let output = with_timeout(self.timeout, async {
            command
                .output()
                .await
                .map_err(|source| ProbeError::Spawn { command: "traceroute", source })
        })
        .await?;

        if !output.status.success() {
            return Err(ProbeError::CommandFailed {
                command: "traceroute",
                status: describe_status(output.status),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
