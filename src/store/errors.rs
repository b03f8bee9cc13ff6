//! Store error types
//!
//! Wraps schema errors and adds:
//! - TABULA_RECORD_NOT_FOUND

use thiserror::Error;

use crate::schema::SchemaError;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Schema lookup or row validation failed
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// No row with the given primary key
    #[error("record {id} not found in table '{table}'")]
    RecordNotFound { table: String, id: i64 },
}

impl StoreError {
    /// Create a record not found error
    pub fn record_not_found(table: impl Into<String>, id: i64) -> Self {
        StoreError::RecordNotFound {
            table: table.into(),
            id,
        }
    }

    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::Schema(e) => e.code(),
            StoreError::RecordNotFound { .. } => "TABULA_RECORD_NOT_FOUND",
        }
    }

    /// Returns the schema error, if this wraps one
    pub fn schema_error(&self) -> Option<&SchemaError> {
        match self {
            StoreError::Schema(e) => Some(e),
            StoreError::RecordNotFound { .. } => None,
        }
    }

    /// Whether this error came from validating a row
    pub fn is_validation(&self) -> bool {
        self.schema_error().is_some_and(SchemaError::is_validation)
    }
}
