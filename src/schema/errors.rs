//! Schema error types
//!
//! Error codes:
//! - TABULA_UNKNOWN_TABLE
//! - TABULA_DUPLICATE_TABLE
//! - TABULA_INVALID_SCHEMA
//! - TABULA_UNKNOWN_FIELD
//! - TABULA_TYPE_MISMATCH
//! - TABULA_MISSING_REQUIRED_FIELD
//! - TABULA_PRIMARY_KEY_SUPPLIED
//!
//! Row-level messages read the way they are shown to callers, e.g.
//! "name must be a string" or "email cannot be null".

use thiserror::Error;

use super::types::FieldType;

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Schema registry and validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Table name not registered
    #[error("table '{table}' is not available")]
    UnknownTable { table: String },

    /// Table name already registered
    #[error("table '{table}' already exists")]
    DuplicateTable { table: String },

    /// Schema structure is malformed
    #[error("invalid schema for table '{table}': {reason}")]
    InvalidSchema { table: String, reason: String },

    /// Row carries a field the schema does not declare
    #[error("{field} doesnt exists on schema")]
    UnknownField { field: String },

    /// Value does not match the declared field type
    #[error("{field} must be {}", .expected.expectation())]
    TypeMismatch { field: String, expected: FieldType },

    /// Required field absent or null
    #[error("{field} cannot be null")]
    MissingRequiredField { field: String },

    /// Caller supplied the store-assigned primary key
    #[error("{field} is assigned by the store and cannot be set")]
    PrimaryKeySupplied { field: String },
}

impl SchemaError {
    /// Create an unknown table error
    pub fn unknown_table(table: impl Into<String>) -> Self {
        SchemaError::UnknownTable {
            table: table.into(),
        }
    }

    /// Create a duplicate table error
    pub fn duplicate_table(table: impl Into<String>) -> Self {
        SchemaError::DuplicateTable {
            table: table.into(),
        }
    }

    /// Create an invalid schema error
    pub fn invalid_schema(table: impl Into<String>, reason: impl Into<String>) -> Self {
        SchemaError::InvalidSchema {
            table: table.into(),
            reason: reason.into(),
        }
    }

    /// Create an unknown field error
    pub fn unknown_field(field: impl Into<String>) -> Self {
        SchemaError::UnknownField {
            field: field.into(),
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch(field: impl Into<String>, expected: FieldType) -> Self {
        SchemaError::TypeMismatch {
            field: field.into(),
            expected,
        }
    }

    /// Create a missing required field error
    pub fn missing_required(field: impl Into<String>) -> Self {
        SchemaError::MissingRequiredField {
            field: field.into(),
        }
    }

    /// Create a primary key supplied error
    pub fn primary_key_supplied(field: impl Into<String>) -> Self {
        SchemaError::PrimaryKeySupplied {
            field: field.into(),
        }
    }

    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            SchemaError::UnknownTable { .. } => "TABULA_UNKNOWN_TABLE",
            SchemaError::DuplicateTable { .. } => "TABULA_DUPLICATE_TABLE",
            SchemaError::InvalidSchema { .. } => "TABULA_INVALID_SCHEMA",
            SchemaError::UnknownField { .. } => "TABULA_UNKNOWN_FIELD",
            SchemaError::TypeMismatch { .. } => "TABULA_TYPE_MISMATCH",
            SchemaError::MissingRequiredField { .. } => "TABULA_MISSING_REQUIRED_FIELD",
            SchemaError::PrimaryKeySupplied { .. } => "TABULA_PRIMARY_KEY_SUPPLIED",
        }
    }

    /// Returns the offending field for row validation errors
    pub fn field(&self) -> Option<&str> {
        match self {
            SchemaError::UnknownField { field }
            | SchemaError::TypeMismatch { field, .. }
            | SchemaError::MissingRequiredField { field }
            | SchemaError::PrimaryKeySupplied { field } => Some(field),
            _ => None,
        }
    }

    /// Whether this error came from validating a row
    pub fn is_validation(&self) -> bool {
        self.field().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_caller_wording() {
        assert_eq!(
            SchemaError::type_mismatch("name", FieldType::Text).to_string(),
            "name must be a string"
        );
        assert_eq!(
            SchemaError::type_mismatch("age", FieldType::Integer).to_string(),
            "age must be an integer"
        );
        assert_eq!(
            SchemaError::missing_required("email").to_string(),
            "email cannot be null"
        );
        assert_eq!(
            SchemaError::unknown_field("lastName").to_string(),
            "lastName doesnt exists on schema"
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(SchemaError::unknown_table("x").code(), "TABULA_UNKNOWN_TABLE");
        assert_eq!(SchemaError::duplicate_table("x").code(), "TABULA_DUPLICATE_TABLE");
        assert_eq!(SchemaError::invalid_schema("x", "y").code(), "TABULA_INVALID_SCHEMA");
        assert_eq!(SchemaError::primary_key_supplied("id").code(), "TABULA_PRIMARY_KEY_SUPPLIED");
    }

    #[test]
    fn test_validation_classification() {
        assert!(SchemaError::unknown_field("x").is_validation());
        assert_eq!(SchemaError::missing_required("title").field(), Some("title"));
        assert!(!SchemaError::unknown_table("users").is_validation());
        assert!(SchemaError::unknown_table("users").field().is_none());
    }
}
