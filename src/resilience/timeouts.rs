//! Timeout enforcement.
//!
//! # Responsibilities
//! - Wrap probe futures with a deadline
//! - Cancel the underlying work cleanly on expiry
//!
//! # Design Decisions
//! - Uses Tokio's timeout facilities
//! - Timeout errors are distinct from other probe errors
//! - Child processes are spawned with `kill_on_drop`, so dropping the future kills them

use std::future::Future;
use std::time::Duration;

use crate::probe::ProbeError;

/// Run `fut` with a hard deadline, mapping expiry to [`ProbeError::Timeout`].
pub async fn with_timeout<F, T>(limit: Duration, fut: F) -> Result<T, ProbeError>
where
    F: Future<Output = Result<T, ProbeError>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result,
        Err(_) => Err(ProbeError::Timeout(limit)),
    }
}
