//! Consecutive-degradation tracking.
//!
//! # States
//! - Calm: streak == 0
//! - Alerting: streak > 0
//!
//! # State Transitions
//! ```text
//! Good              → streak := 0 (Calm)
//! Warning/Critical  → streak += 1 (Alerting)
//! streak >= 3       → run diagnostics (subject to DiagnosticsPolicy)
//! ```
//!
//! Reaching the threshold does not reset the streak; only a Good sample does.

use serde::{Deserialize, Serialize};

use crate::monitor::types::HealthStatus;

/// Streak length at which deeper diagnostics are run.
pub const DIAGNOSTICS_STREAK_THRESHOLD: u32 = 3;

/// When diagnostics fire once the threshold has been reached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticsPolicy {
    /// Run on every degraded cycle while the streak stays at or above the threshold.
    #[default]
    EveryCycle,
    /// Run once, on the cycle where the streak first reaches the threshold.
    OncePerStreak,
}

/// Process-wide alert counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlertState {
    consecutive_non_good: u32,
}

impl AlertState {
    /// Current streak length.
    pub fn count(&self) -> u32 {
        self.consecutive_non_good
    }

    pub fn is_alerting(&self) -> bool {
        self.consecutive_non_good > 0
    }
}

/// What the escalator decided for one sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escalation {
    /// Health is good; the streak was reset.
    Calm,
    /// Degraded, below the diagnostics threshold (or already diagnosed this streak).
    Alerting { streak: u32 },
    /// Degraded long enough that diagnostics must run this cycle.
    Diagnose { streak: u32 },
}

impl Escalation {
    pub fn should_diagnose(&self) -> bool {
        matches!(self, Escalation::Diagnose { .. })
    }
}

/// Stateful counter driving the diagnostics trigger.
#[derive(Debug, Clone, Default)]
pub struct AlertEscalator {
    state: AlertState,
    policy: DiagnosticsPolicy,
}

impl AlertEscalator {
    pub fn new(policy: DiagnosticsPolicy) -> Self {
        Self {
            state: AlertState::default(),
            policy,
        }
    }

    pub fn state(&self) -> AlertState {
        self.state
    }

    /// Feed the health of a new sample and decide whether to escalate.
    pub fn observe(&mut self, health: &HealthStatus) -> Escalation {
        if health.is_good() {
            if self.state.is_alerting() {
                tracing::info!(streak = self.state.count(), "Network recovered, alert streak reset");
            }
            self.state.consecutive_non_good = 0;
            return Escalation::Calm;
        }

        self.state.consecutive_non_good = self.state.consecutive_non_good.saturating_add(1);
        let streak = self.state.consecutive_non_good;
        tracing::warn!(streak, health = %health, "Network alert");

        let trigger = match self.policy {
            DiagnosticsPolicy::EveryCycle => streak >= DIAGNOSTICS_STREAK_THRESHOLD,
            DiagnosticsPolicy::OncePerStreak => streak == DIAGNOSTICS_STREAK_THRESHOLD,
        };

        if trigger {
            Escalation::Diagnose { streak }
        } else {
            Escalation::Alerting { streak }
        }
    }
}
