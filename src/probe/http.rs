//! HTTP reachability checks.

use async_trait::async_trait;
use std::time::{Duration, Instant};

use crate::monitor::types::SiteCheckResult;
use crate::probe::{HttpChecker, ProbeError};

/// Issues `GET http://<host>` and records status and response time.
///
/// Any HTTP response counts as reachable, whatever its status code;
/// only transport failures and timeouts make a site inaccessible.
#[derive(Debug, Clone)]
pub struct ReqwestChecker {
    client: reqwest::Client,
}

impl ReqwestChecker {
    pub fn new(timeout: Duration) -> Result<Self, ProbeError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("netwatch/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    /// Wrap a preconfigured client; its timeout is the check deadline.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn url_for(host: &str) -> String {
        if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("http://{host}")
        }
    }
}

#[async_trait]
impl HttpChecker for ReqwestChecker {
    async fn check(&self, host: &str) -> SiteCheckResult {
        let started = Instant::now();
        match self.client.get(Self::url_for(host)).send().await {
            Ok(response) => SiteCheckResult::Accessible {
                status_code: response.status().as_u16(),
                response_time_ms: started.elapsed().as_secs_f64() * 1000.0,
            },
            Err(e) => {
                tracing::error!(site = host, error = %e, "Error accessing site");
                SiteCheckResult::Inaccessible { error: e.to_string() }
            }
        }
    }
}
