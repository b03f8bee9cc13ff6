//! Logging setup, powered by tracing-subscriber
//!
//! Only the binary installs a subscriber. The library emits `tracing`
//! events and stays silent when no subscriber is installed.

use tracing_subscriber::EnvFilter;

use super::{ObservabilityError, ObservabilityResult};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable text
    Text,
    /// JSON lines
    Json,
}

impl LogFormat {
    /// Parses a format name; unknown names fall back to text
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" | "jsonl" => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }
}

/// Builds the filter from the configured level.
///
/// `RUST_LOG` takes precedence when set.
pub fn build_env_filter(level: &str) -> ObservabilityResult<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(level).map_err(|e| {
        ObservabilityError::new(format!("invalid log filter '{}': {}", level, e))
    })
}

/// Installs the global subscriber, writing to stderr.
///
/// Stdout is reserved for responses.
pub fn init_logging(level: &str, format: LogFormat) -> ObservabilityResult<()> {
    let filter = build_env_filter(level)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    let result = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.with_ansi(false).try_init(),
    };

    result.map_err(|e| ObservabilityError::new(format!("failed to install subscriber: {}", e)))
}
