//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Probe call:
//!     → timeouts.rs (enforce per-probe deadline)
//!     → On expiry: ProbeError::Timeout, recorded by the caller as a failure
//! ```
//!
//! # Design Decisions
//! - Timeouts are non-negotiable; every external call has a deadline
//! - No retries inside a cycle; the next cycle is the retry

pub mod timeouts;
