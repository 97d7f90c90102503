//! DNS resolution through the OS resolver.

use async_trait::async_trait;
use std::net::IpAddr;
use std::time::Duration;

use crate::probe::{ProbeError, Resolver};
use crate::resilience::timeouts::with_timeout;

/// Resolves names with `tokio::net::lookup_host`, preferring IPv4 answers.
#[derive(Debug, Clone)]
pub struct SystemResolver {
    timeout: Duration,
}

impl SystemResolver {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl Resolver for SystemResolver {
    async fn lookup(&self, domain: &str) -> Result<IpAddr, ProbeError> {
        let addrs: Vec<IpAddr> = with_timeout(self.timeout, async {
            tokio::net::lookup_host((domain, 0))
                .await
                .map(|iter| iter.map(|addr| addr.ip()).collect())
                .map_err(|e| resolve_failed(domain, e))
        })
        .await?;

        addrs
            .iter()
            .find(|ip| ip.is_ipv4())
            .or_else(|| addrs.first())
            .copied()
            .ok_or_else(|| resolve_failed(domain, "no addresses returned"))
    }
}

fn resolve_failed(domain: &str, reason: impl ToString) -> ProbeError {
    ProbeError::Resolve {
        domain: domain.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_resolves_localhost() {
        let resolver = SystemResolver::new(Duration::from_secs(5));
        let ip = resolver.lookup("localhost").await.unwrap();
        assert!(ip.is_loopback());
    }
}
