//! The monitoring loop.
//!
//! # Responsibilities
//! - Drive one cycle per interval, strictly one at a time
//! - Persist each sample, trace outputs and reports
//! - Produce a report on the report tick and at shutdown
//!
//! # Design Decisions
//! - Diagnostics run inline; a slow cycle delays the next tick instead of
//!   overlapping it (`MissedTickBehavior::Delay`)
//! - Shutdown is only observed between cycles, so the cycle in flight finishes
//! - Persistence failures are logged and never touch in-memory state

use chrono::Local;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::config::MonitorConfig;
use crate::display;
use crate::monitor::diagnostics::Diagnostics;
use crate::monitor::report::Reporter;
use crate::monitor::sampler::Sampler;
use crate::monitor::state::{run_cycle, CycleOutcome, MonitorState};
use crate::observability::metrics;
use crate::probe::ProbeSet;
use crate::storage::DataStore;

/// What the loop hands back once it has stopped.
#[derive(Debug)]
pub struct RunOutcome {
    pub state: MonitorState,
    /// Path of the shutdown report, if it was written.
    pub final_report: Option<PathBuf>,
}

pub struct NetworkMonitor {
    interval: Duration,
    report_interval: Duration,
    ping_target: String,
    console: bool,
    sampler: Sampler,
    diagnostics: Diagnostics,
    reporter: Reporter,
    store: DataStore,
    state: MonitorState,
}

impl NetworkMonitor {
    pub fn new(config: &MonitorConfig, probes: ProbeSet) -> Self {
        Self {
            interval: Duration::from_secs(config.monitor.interval_secs),
            report_interval: Duration::from_secs(config.monitor.report_interval_secs),
            ping_target: config.probes.ping_target.clone(),
            console: config.observability.console,
            sampler: Sampler::new(probes.clone(), &config.probes),
            diagnostics: Diagnostics::new(probes, &config.diagnostics),
            reporter: Reporter::new(config.probes.sites.clone()),
            store: DataStore::new(&config.storage.data_dir),
            state: MonitorState::new(config.diagnostics.policy),
        }
    }

    pub fn state(&self) -> &MonitorState {
        &self.state
    }

    /// Run until shutdown, then write the final report and hand back the state.
    pub async fn run(mut self, mut shutdown: broadcast::Receiver<()>) -> RunOutcome {
        tracing::info!(
            interval_secs = self.interval.as_secs(),
            sites = self.sampler.sites().len(),
            data_dir = %self.store.dir().display(),
            "Starting network monitoring"
        );

        let mut cycles = time::interval(self.interval);
        cycles.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut reports = time::interval_at(Instant::now() + self.report_interval, self.report_interval);
        reports.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = shutdown.recv() => break,
                _ = cycles.tick() => {
                    self.tick().await;
                }
                _ = reports.tick() => {
                    if self.write_report().is_some() {
                        tracing::info!("Periodic report generated");
                    }
                }
            }
        }

        tracing::info!("Network monitoring stopped");
        let final_report = self.write_report();
        if let Some(path) = &final_report {
            tracing::info!(path = %path.display(), "Final report saved");
        }
        RunOutcome {
            state: self.state,
            final_report,
        }
    }

    /// Run one cycle and its side effects.
    pub async fn tick(&mut self) -> CycleOutcome {
        let outcome = run_cycle(&mut self.state, &self.sampler, &self.diagnostics).await;
        self.after_cycle(&outcome);
        outcome
    }

    fn after_cycle(&self, outcome: &CycleOutcome) {
        metrics::record_alert_streak(self.state.alert_state().count());

        let Some(sample) = self.state.history.latest() else {
            return;
        };
        metrics::record_sample(sample);

        if let Err(e) = self.store.append_sample(sample) {
            tracing::error!(error = %e, "Failed to persist sample");
        }

        if let Some(report) = &outcome.diagnostics {
            metrics::record_diagnostics_run();
            if let Some(output) = &report.trace_output {
                match self.store.write_trace(&sample.stamp_key(), output) {
                    Ok(path) => tracing::info!(path = %path.display(), "Traceroute result saved"),
                    Err(e) => tracing::error!(error = %e, "Failed to save traceroute output"),
                }
            }
        }

        if self.console {
            let dir = self.store.dir().display().to_string();
            print!(
                "{}{}",
                display::CLEAR_SCREEN,
                display::render_status(sample, outcome, self.sampler.sites(), &self.ping_target, &dir)
            );
        }
    }

    /// Summarize the current history and save it. Returns the report path.
    pub fn write_report(&self) -> Option<PathBuf> {
        let now = Local::now();
        let text = self.reporter.summarize(&self.state.history, now);
        match self.store.write_report(&now.format("%Y%m%d_%H%M%S").to_string(), &text) {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::error!(error = %e, "Failed to save report");
                None
            }
        }
    }
}
