//! One-shot collection of a `Sample`.

use chrono::Local;
use std::collections::BTreeMap;

use crate::config::ProbeConfig;
use crate::monitor::classifier::classify;
use crate::monitor::types::Sample;
use crate::probe::ProbeSet;

/// Invokes every probe once and assembles the cycle's sample.
pub struct Sampler {
    probes: ProbeSet,
    ping_target: String,
    ping_count: u32,
    sites: Vec<String>,
}

impl Sampler {
    pub fn new(probes: ProbeSet, config: &ProbeConfig) -> Self {
        Self {
            probes,
            ping_target: config.ping_target.clone(),
            ping_count: config.ping_count,
            sites: config.sites.clone(),
        }
    }

    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    /// Collect a sample. Probe faults are recorded in the sample, never returned.
    pub async fn collect(&self) -> Sample {
        let timestamp = Local::now();

        let interfaces = self.probes.inspector.interfaces();
        let traffic = self.probes.inspector.traffic_stats().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Traffic counters unavailable, recording zeros");
            Default::default()
        });

        let ping = self.probes.prober.ping(&self.ping_target, self.ping_count).await;

        let mut sites = BTreeMap::new();
        for site in &self.sites {
            let result = self.probes.http.check(site).await;
            sites.insert(site.clone(), result);
        }

        let health = classify(&ping);
        tracing::debug!(
            target_host = %self.ping_target,
            status = health.label(),
            interfaces = interfaces.len(),
            "Sample collected"
        );

        Sample {
            timestamp,
            interfaces,
            traffic,
            ping,
            sites,
            health,
        }
    }
}
