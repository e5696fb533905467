//! Logging setup shared by Doorlock binaries.
//!
//! Events are written to stderr so that stdout stays free for links and JSON output.

mod config;
mod tracing_init;

pub use config::{LogFormat, TelemetryConfig};
pub use tracing_init::init_telemetry;

/// Installs the subscriber configured from `RUST_LOG` and `LOG_FORMAT`.
pub fn install() -> anyhow::Result<()> {
    init_telemetry(TelemetryConfig::from_env())
}
