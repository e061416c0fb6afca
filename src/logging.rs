//! Tracing/logging initialization.
//!
//! Filtering is configured through `RUST_LOG`. The CLI logs compact text to
//! stderr (so stdout stays clean for command output); the server logs JSON.

use tracing_subscriber::EnvFilter;

/// Output format for log events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable single-line events
    Compact,
    /// One JSON object per event
    Json,
}

/// Initialize tracing/logging for the process.
///
/// `default_level` applies when `RUST_LOG` is unset or invalid. Safe to call
/// multiple times (subsequent calls are no-ops).
pub fn init(format: LogFormat, default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = match format {
        LogFormat::Compact => builder.compact().without_time().try_init(),
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init(),
    };
}
