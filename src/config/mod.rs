//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, path from NETWATCH_CONFIG)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → MonitorConfig (validated, immutable)
//!     → handed to the sampler, diagnostics, storage and observability at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::MonitorConfig;
pub use schema::{DiagnosticsConfig, ObservabilityConfig, ProbeConfig, ScheduleConfig, StorageConfig};
