//! Host interface inventory and traffic counters.
//!
//! Interface addresses come from `sysinfo`. Traffic counters come from
//! `/proc/net/dev` on Linux, which also carries drop counts; elsewhere the
//! `sysinfo` totals are used and drops read as zero.

use std::net::IpAddr;
use sysinfo::Networks;

use crate::monitor::types::{InterfaceInfo, TrafficStats};
use crate::probe::{NetInspector, ProbeError};

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemInspector;

impl NetInspector for SystemInspector {
    fn interfaces(&self) -> Vec<InterfaceInfo> {
        let networks = Networks::new_with_refreshed_list();
        let mut rows: Vec<InterfaceInfo> = Vec::new();
        for (name, data) in &networks {
            for network in data.ip_networks() {
                if let IpAddr::V4(addr) = network.addr {
                    rows.push(InterfaceInfo::from_prefix(name.as_str(), addr, network.prefix));
                }
            }
        }
        rows.sort_by(|a, b| a.name.cmp(&b.name).then(a.ip_address.cmp(&b.ip_address)));
        rows
    }

    #[cfg(target_os = "linux")]
    fn traffic_stats(&self) -> Result<TrafficStats, ProbeError> {
        let content = std::fs::read_to_string("/proc/net/dev")?;
        parse_proc_net_dev(&content)
    }

    #[cfg(not(target_os = "linux"))]
    fn traffic_stats(&self) -> Result<TrafficStats, ProbeError> {
        let networks = Networks::new_with_refreshed_list();
        let mut stats = TrafficStats::default();
        for (_, data) in &networks {
            stats.bytes_sent += data.total_transmitted();
            stats.bytes_recv += data.total_received();
            stats.packets_sent += data.total_packets_transmitted();
            stats.packets_recv += data.total_packets_received();
            stats.err_in += data.total_errors_on_received();
            stats.err_out += data.total_errors_on_transmitted();
        }
        Ok(stats)
    }
}

/// Sum the per-interface rows of `/proc/net/dev`.
///
/// Row layout after `iface:` is 8 receive columns then 8 transmit columns:
/// `bytes packets errs drop fifo frame compressed multicast`.
pub fn parse_proc_net_dev(content: &str) -> Result<TrafficStats, ProbeError> {
    let mut stats = TrafficStats::default();
    let mut rows = 0;

    for line in content.lines() {
        let Some((_, counters)) = line.split_once(':') else {
            continue;
        };
        let fields: Vec<u64> = counters
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<_, _>>()
            .map_err(|_| ProbeError::Parse("/proc/net/dev"))?;
        if fields.len() < 16 {
            return Err(ProbeError::Parse("/proc/net/dev"));
        }

        stats.bytes_recv += fields[0];
        stats.packets_recv += fields[1];
        stats.err_in += fields[2];
        stats.drop_in += fields[3];
        stats.bytes_sent += fields[8];
        stats.packets_sent += fields[9];
        stats.err_out += fields[10];
        stats.drop_out += fields[11];
        rows += 1;
    }

    if rows == 0 {
        return Err(ProbeError::Parse("/proc/net/dev"));
    }
    Ok(stats)
}
