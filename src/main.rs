//! netwatch: host network-health monitor.
//!
//! # Architecture Overview
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │                              NETWATCH                                │
//!   │                                                                      │
//!   │   interval tick                                                      │
//!   │        │                                                             │
//!   │        ▼                                                             │
//!   │  ┌──────────┐   ┌────────────┐   ┌───────────┐   ┌─────────────┐     │
//!   │  │ sampler  │──▶│ classifier │──▶│ escalator │──▶│ diagnostics │     │
//!   │  └────┬─────┘   └────────────┘   └───────────┘   └─────────────┘     │
//!   │       │ probes: ping · dns · http · trace · interfaces                │
//!   │       ▼                                                              │
//!   │  ┌──────────┐   report tick / shutdown   ┌──────────┐                │
//!   │  │ history  │───────────────────────────▶│ reporter │                │
//!   │  └────┬─────┘                            └────┬─────┘                │
//!   │       ▼                                       ▼                      │
//!   │  network_data_YYYYMMDD.json            report_*.txt                  │
//!   │                                                                      │
//!   │  Cross-cutting: config · logging/metrics · timeouts · lifecycle      │
//!   └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Configuration is read from the TOML file named by `NETWATCH_CONFIG`;
//! without it the built-in defaults apply. Ctrl-C stops after the current
//! cycle and writes a final report.

use netwatch::lifecycle::{signals, startup, Shutdown};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = startup::resolve_config()?;
    let monitor = startup::start(&config)?;

    tracing::info!("netwatch v{} starting", env!("CARGO_PKG_VERSION"));

    let shutdown = Shutdown::new();
    let monitor_shutdown = shutdown.subscribe();
    tokio::spawn(signals::listen(shutdown.clone()));

    let outcome = monitor.run(monitor_shutdown).await;

    if config.observability.console {
        println!("\nMonitoring stopped.");
        if let Some(path) = &outcome.final_report {
            println!(
                "Final report saved to '{}' ({} samples).",
                path.display(),
                outcome.state.history.len()
            );
        }
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
