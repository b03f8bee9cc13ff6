//! CLI-specific error types

use std::io;

use thiserror::Error;

use crate::config::ConfigError;
use crate::observability::ObservabilityError;
use crate::store::StoreError;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Logging could not be installed
    #[error(transparent)]
    Logging(#[from] ObservabilityError),

    /// A store operation failed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A request was not understood
    #[error("bad request: {0}")]
    BadRequest(String),

    /// I/O error (stdin/stdout)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    /// Bad request
    pub fn bad_request(msg: impl Into<String>) -> Self {
        CliError::BadRequest(msg.into())
    }

    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Config(e) => e.code(),
            CliError::Logging(_) => "TABULA_OBSERVABILITY_FAILED",
            CliError::Store(e) => e.code(),
            CliError::BadRequest(_) => "TABULA_BAD_REQUEST",
            CliError::Io(_) => "TABULA_IO_ERROR",
        }
    }

    /// Message shown to callers; validation failures read "Invalid: ..."
    pub fn display_message(&self) -> String {
        match self {
            CliError::Store(e) if e.is_validation() => format!("Invalid: {}", e),
            other => other.to_string(),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::bad_request(e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaError;

    #[test]
    fn test_validation_message_prefixed() {
        let err = CliError::from(StoreError::from(SchemaError::missing_required("title")));
        assert_eq!(err.display_message(), "Invalid: title cannot be null");
        assert_eq!(err.code(), "TABULA_MISSING_REQUIRED_FIELD");
    }

    #[test]
    fn test_other_messages_unprefixed() {
        let err = CliError::from(StoreError::record_not_found("users", 9));
        assert_eq!(err.display_message(), "record 9 not found in table 'users'");

        let err = CliError::bad_request("missing op");
        assert_eq!(err.code(), "TABULA_BAD_REQUEST");
        assert_eq!(err.display_message(), "bad request: missing op");
    }
}
