//! Scheduler loop tests: interval ticks, persistence and graceful shutdown.

use std::fs;
use std::path::Path;
use std::time::Duration;

use netwatch::config::MonitorConfig;
use netwatch::lifecycle::Shutdown;
use netwatch::monitor::{HealthStatus, NetworkMonitor};
use netwatch::storage::DataStore;

mod common;

use common::{failed_ping, good_ping, healthy_probes};

fn config(data_dir: &Path) -> MonitorConfig {
    let mut config = MonitorConfig::default();
    config.probes.sites = vec!["a.example".into(), "b.example".into()];
    config.storage.data_dir = data_dir.display().to_string();
    config.observability.console = false;
    config.observability.log_file = None;
    config
}

fn files_with_prefix(dir: &Path, prefix: &str) -> Vec<std::path::PathBuf> {
    let mut files: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with(prefix))
        })
        .collect();
    files.sort();
    files
}

#[tokio::test(start_paused = true)]
async fn test_loop_runs_cycles_until_shutdown() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path());
    let probes = healthy_probes(vec![], good_ping());
    let monitor = NetworkMonitor::new(&config, probes.set());

    let shutdown = Shutdown::new();
    let handle = tokio::spawn(monitor.run(shutdown.subscribe()));

    // Ticks at t=0, 10s and 20s.
    tokio::time::sleep(Duration::from_secs(25)).await;
    shutdown.trigger();
    let outcome = handle.await.unwrap();
    let state = outcome.state;

    assert_eq!(state.history.len(), 3);
    assert!(state.history.iter().all(|s| s.health == HealthStatus::Good));

    let store = DataStore::new(dir.path());
    let logged: usize = files_with_prefix(dir.path(), "network_data_")
        .iter()
        .map(|path| store.read_samples(path).unwrap().len())
        .sum();
    assert_eq!(logged, 3);

    let final_report = outcome.final_report.expect("final report should be written on shutdown");
    let text = fs::read_to_string(&final_report).unwrap();
    assert!(text.contains("a.example: 100.00%"));
    assert!(text.contains("good: 3 (100.00%)"));
}

#[tokio::test(start_paused = true)]
async fn test_trace_saved_when_diagnostics_run() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path());
    let probes = healthy_probes(vec![], failed_ping());
    let monitor = NetworkMonitor::new(&config, probes.set());

    let shutdown = Shutdown::new();
    let handle = tokio::spawn(monitor.run(shutdown.subscribe()));

    tokio::time::sleep(Duration::from_secs(25)).await;
    shutdown.trigger();
    let state = handle.await.unwrap().state;

    assert_eq!(state.alert_state().count(), 3);
    let traces = files_with_prefix(dir.path(), "traceroute_");
    assert!(!traces.is_empty());
    assert!(fs::read_to_string(&traces[0]).unwrap().contains("gateway"));
}

#[tokio::test(start_paused = true)]
async fn test_no_trace_before_threshold() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path());
    let probes = healthy_probes(vec![], failed_ping());
    let monitor = NetworkMonitor::new(&config, probes.set());

    let shutdown = Shutdown::new();
    let handle = tokio::spawn(monitor.run(shutdown.subscribe()));

    // Ticks at t=0 and 10s only.
    tokio::time::sleep(Duration::from_secs(15)).await;
    shutdown.trigger();
    let state = handle.await.unwrap().state;

    assert_eq!(state.alert_state().count(), 2);
    assert!(files_with_prefix(dir.path(), "traceroute_").is_empty());
}

#[tokio::test]
async fn test_persistence_failure_keeps_history() {
    let dir = tempfile::tempdir().unwrap();
    // A regular file where the data directory should be makes every write fail.
    let blocked = dir.path().join("blocked");
    fs::write(&blocked, "not a directory").unwrap();

    let config = config(&blocked);
    let probes = healthy_probes(vec![], good_ping());
    let mut monitor = NetworkMonitor::new(&config, probes.set());

    monitor.tick().await;
    monitor.tick().await;
    assert_eq!(monitor.state().history.len(), 2);
    assert!(monitor.write_report().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_periodic_report_written_before_shutdown() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config(dir.path());
    config.monitor.report_interval_secs = 30;
    let probes = healthy_probes(vec![], good_ping());
    let monitor = NetworkMonitor::new(&config, probes.set());

    let shutdown = Shutdown::new();
    let handle = tokio::spawn(monitor.run(shutdown.subscribe()));

    // Cycles at t=0, 10s, 20s and 30s; the report ticker fires at 30s.
    tokio::time::sleep(Duration::from_secs(35)).await;
    let periodic = files_with_prefix(dir.path(), "report_");
    assert_eq!(periodic.len(), 1, "periodic report should exist before shutdown");
    let text = fs::read_to_string(&periodic[0]).unwrap();
    assert!(text.contains("good: 4 (100.00%)"));

    shutdown.trigger();
    let outcome = handle.await.unwrap();
    assert_eq!(outcome.state.history.len(), 4);

    // The shutdown report never replaces the periodic one.
    let final_report = outcome.final_report.unwrap();
    assert_ne!(final_report, periodic[0]);
    assert_eq!(files_with_prefix(dir.path(), "report_").len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_failed_final_report_is_not_claimed() {
    let dir = tempfile::tempdir().unwrap();
    let blocked = dir.path().join("blocked");
    fs::write(&blocked, "not a directory").unwrap();

    let config = config(&blocked);
    let probes = healthy_probes(vec![], good_ping());
    let monitor = NetworkMonitor::new(&config, probes.set());

    let shutdown = Shutdown::new();
    let handle = tokio::spawn(monitor.run(shutdown.subscribe()));

    tokio::time::sleep(Duration::from_secs(5)).await;
    shutdown.trigger();
    let outcome = handle.await.unwrap();

    assert_eq!(outcome.state.history.len(), 1);
    assert!(outcome.final_report.is_none());
}
