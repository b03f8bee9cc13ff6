//! Observability subsystem for tabula
//!
//! Provides typed lifecycle events and the logging setup used by the
//! binary.
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on execution
//! 3. No background threads
//!
//! # Usage
//!
//! ```ignore
//! use tabula::observability::{init_logging, Event, LogFormat};
//!
//! init_logging("info", LogFormat::Text)?;
//! tracing::info!(event = %Event::ConfigLoaded, tables = 2);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{build_env_filter, init_logging, LogFormat};

use thiserror::Error;

/// Observability error.
///
/// Never fatal to the store; the binary reports it and exits.
#[derive(Debug, Clone, Error)]
#[error("TABULA_OBSERVABILITY_FAILED: {message}")]
pub struct ObservabilityError {
    message: String,
}

impl ObservabilityError {
    /// Create a new observability error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Get the message
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result type for observability operations
pub type ObservabilityResult<T> = Result<T, ObservabilityError>;
