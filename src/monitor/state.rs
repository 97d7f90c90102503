//! Per-process monitoring state and the single-cycle step.
//!
//! # Data Flow
//! ```text
//! Sampler.collect()
//!     → Sample (health already classified)
//!     → AlertEscalator.observe(health)
//!     → Diagnostics.run()   (only on Escalation::Diagnose)
//!     → History.append(sample)
//! ```
//!
//! State is owned by the caller and threaded through each cycle; nothing
//! here is global.

use crate::monitor::diagnostics::{DiagnosticReport, Diagnostics};
use crate::monitor::escalator::{AlertEscalator, AlertState, DiagnosticsPolicy, Escalation};
use crate::monitor::history::History;
use crate::monitor::sampler::Sampler;
use crate::monitor::types::Sample;

/// Rolling history plus the alert counter.
#[derive(Debug, Clone, Default)]
pub struct MonitorState {
    pub history: History,
    pub escalator: AlertEscalator,
}

impl MonitorState {
    pub fn new(policy: DiagnosticsPolicy) -> Self {
        Self {
            history: History::new(),
            escalator: AlertEscalator::new(policy),
        }
    }

    pub fn alert_state(&self) -> AlertState {
        self.escalator.state()
    }
}

/// What happened during one cycle besides the sample itself.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleOutcome {
    pub escalation: Escalation,
    pub diagnostics: Option<DiagnosticReport>,
}

/// Run one collect → classify → escalate → diagnose → append cycle.
///
/// The sample ends up owned by `state.history`; read it back through
/// `state.history.latest()`.
pub async fn run_cycle(state: &mut MonitorState, sampler: &Sampler, diagnostics: &Diagnostics) -> CycleOutcome {
    let sample = sampler.collect().await;
    record(state, sample, diagnostics).await
}

/// Escalate and store an already collected sample.
pub async fn record(state: &mut MonitorState, sample: Sample, diagnostics: &Diagnostics) -> CycleOutcome {
    let escalation = state.escalator.observe(&sample.health);

    let report = if escalation.should_diagnose() {
        Some(diagnostics.run().await)
    } else {
        None
    };

    state.history.append(sample);

    CycleOutcome {
        escalation,
        diagnostics: report,
    }
}
