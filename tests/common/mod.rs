//! Scripted probe doubles shared by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::{HashSet, VecDeque};
use std::net::{IpAddr, Ipv4Addr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use netwatch::monitor::{InterfaceInfo, PingResult, SiteCheckResult, TrafficStats};
use netwatch::probe::{HttpChecker, NetInspector, ProbeError, ProbeSet, Prober, Resolver, Tracer};

/// Replays ping results in order, then repeats the fallback.
pub struct ScriptedPinger {
    script: Mutex<VecDeque<PingResult>>,
    fallback: PingResult,
    pub calls: AtomicUsize,
}

impl ScriptedPinger {
    pub fn new(script: Vec<PingResult>, fallback: PingResult) -> Self {
        Self {
            script: Mutex::new(script.into()),
            fallback,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl Prober for ScriptedPinger {
    async fn ping(&self, _host: &str, _count: u32) -> PingResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone())
    }
}

/// Every site answers 200 except the ones listed as down.
pub struct StaticHttp {
    down: HashSet<String>,
    pub calls: AtomicUsize,
}

impl StaticHttp {
    pub fn new(down: &[&str]) -> Self {
        Self {
            down: down.iter().map(|s| s.to_string()).collect(),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl HttpChecker for StaticHttp {
    async fn check(&self, host: &str) -> SiteCheckResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.down.contains(host) {
            SiteCheckResult::Inaccessible { error: "connection refused".into() }
        } else {
            SiteCheckResult::Accessible { status_code: 200, response_time_ms: 25.0 }
        }
    }
}

pub struct FakeResolver {
    pub healthy: bool,
    pub calls: AtomicUsize,
}

#[async_trait]
impl Resolver for FakeResolver {
    async fn lookup(&self, domain: &str) -> Result<IpAddr, ProbeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.healthy {
            Ok(IpAddr::V4(Ipv4Addr::new(142, 250, 0, 1)))
        } else {
            Err(ProbeError::Resolve {
                domain: domain.to_string(),
                reason: "no servers reachable".into(),
            })
        }
    }
}

pub struct FakeTracer {
    pub output: Option<String>,
    pub calls: AtomicUsize,
}

#[async_trait]
impl Tracer for FakeTracer {
    async fn trace(&self, _host: &str) -> Result<String, ProbeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.output {
            Some(output) => Ok(output.clone()),
            None => Err(ProbeError::Timeout(std::time::Duration::from_secs(20))),
        }
    }
}

pub struct FakeInspector {
    pub interfaces: Vec<InterfaceInfo>,
    pub traffic: Option<TrafficStats>,
}

impl NetInspector for FakeInspector {
    fn interfaces(&self) -> Vec<InterfaceInfo> {
        self.interfaces.clone()
    }

    fn traffic_stats(&self) -> Result<TrafficStats, ProbeError> {
        self.traffic
            .ok_or_else(|| ProbeError::Io(std::io::Error::other("counters unavailable")))
    }
}

/// Handles to the doubles so tests can inspect call counts.
pub struct Probes {
    pub pinger: Arc<ScriptedPinger>,
    pub http: Arc<StaticHttp>,
    pub resolver: Arc<FakeResolver>,
    pub tracer: Arc<FakeTracer>,
    pub inspector: Arc<FakeInspector>,
}

impl Probes {
    pub fn set(&self) -> ProbeSet {
        ProbeSet {
            prober: self.pinger.clone(),
            resolver: self.resolver.clone(),
            http: self.http.clone(),
            tracer: self.tracer.clone(),
            inspector: self.inspector.clone(),
        }
    }
}

pub fn good_ping() -> PingResult {
    PingResult::Success { avg_ping_ms: 20.0, packet_loss_pct: 0.0 }
}

pub fn slow_ping() -> PingResult {
    PingResult::Success { avg_ping_ms: 250.0, packet_loss_pct: 0.0 }
}

pub fn failed_ping() -> PingResult {
    PingResult::Failure { error: "ping timed out".into() }
}

/// Healthy host doubles with a scripted ping sequence.
pub fn healthy_probes(script: Vec<PingResult>, fallback: PingResult) -> Probes {
    Probes {
        pinger: Arc::new(ScriptedPinger::new(script, fallback)),
        http: Arc::new(StaticHttp::new(&[])),
        resolver: Arc::new(FakeResolver { healthy: true, calls: AtomicUsize::new(0) }),
        tracer: Arc::new(FakeTracer {
            output: Some(" 1  gateway (192.168.1.1)  1.123 ms".into()),
            calls: AtomicUsize::new(0),
        }),
        inspector: Arc::new(FakeInspector {
            interfaces: vec![InterfaceInfo::from_prefix("eth0", Ipv4Addr::new(192, 168, 1, 10), 24)],
            traffic: Some(TrafficStats {
                bytes_sent: 10_000,
                bytes_recv: 20_000,
                packets_sent: 100,
                packets_recv: 200,
                ..TrafficStats::default()
            }),
        }),
    }
}
