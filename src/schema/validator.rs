//! Row validator
//!
//! Validation semantics:
//! - No undeclared fields exist
//! - The primary key is never supplied by the caller
//! - Required fields are present and non-null (insert)
//! - Supplied fields match their declared type exactly (no coercion)
//!
//! Checks run in that order and stop at the first violation. Declared
//! fields are visited in schema order, so the reported error is
//! deterministic for a given row.

use serde_json::{Map, Value};

use super::errors::{SchemaError, SchemaResult};
use super::types::{FieldSpec, FieldType, TableSchema};
use crate::record::FieldValue;

/// A candidate row as supplied by a caller
pub type Row = Map<String, Value>;

/// Which operation a row is validated for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Full row; required fields must be present
    Insert,
    /// Partial row; only supplied fields are checked
    Update,
}

/// A row that passed validation.
///
/// Holds typed values in schema order. `None` marks an optional field
/// explicitly set to null, which clears it on update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRow {
    changes: Vec<(String, Option<FieldValue>)>,
}

impl ValidatedRow {
    /// Returns the validated value for `field`
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.changes
            .iter()
            .find(|(name, _)| name == field)
            .and_then(|(_, value)| value.as_ref())
    }

    /// Names of the fields carried by this row, in schema order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.changes.iter().map(|(name, _)| name.as_str())
    }

    /// Number of fields carried
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Whether the row carries no fields
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub(crate) fn into_values(self) -> Vec<(String, FieldValue)> {
        self.changes
            .into_iter()
            .filter_map(|(name, value)| value.map(|v| (name, v)))
            .collect()
    }

    pub(crate) fn into_changes(self) -> Vec<(String, Option<FieldValue>)> {
        self.changes
    }
}

/// Validator that enforces a table schema on candidate rows.
///
/// Pure: it never mutates the row or any store state.
pub struct SchemaValidator<'a> {
    schema: &'a TableSchema,
}

impl<'a> SchemaValidator<'a> {
    /// Creates a validator for the given schema.
    pub fn new(schema: &'a TableSchema) -> Self {
        Self { schema }
    }

    /// Validates a row for insert.
    ///
    /// # Errors
    ///
    /// - `UnknownField` for an undeclared field
    /// - `PrimaryKeySupplied` if the primary key is present
    /// - `MissingRequiredField` for an absent or null `not_null` field
    /// - `TypeMismatch` for a wrongly typed value
    pub fn validate_insert(&self, row: &Row) -> SchemaResult<ValidatedRow> {
        self.validate(row, ValidationMode::Insert)
    }

    /// Validates a partial row for update.
    ///
    /// Only supplied fields are checked; omitted fields are left unchanged
    /// by the store.
    pub fn validate_update(&self, row: &Row) -> SchemaResult<ValidatedRow> {
        self.validate(row, ValidationMode::Update)
    }

    /// Validates a row in the given mode.
    pub fn validate(&self, row: &Row, mode: ValidationMode) -> SchemaResult<ValidatedRow> {
        // Check for extra fields (no undeclared fields allowed)
        for key in row.keys() {
            if self.schema.field(key).is_none() {
                return Err(SchemaError::unknown_field(key.as_str()));
            }
        }

        let mut changes = Vec::with_capacity(row.len());

        for field in &self.schema.fields {
            if field.primary_key {
                if row.contains_key(&field.name) {
                    return Err(SchemaError::primary_key_supplied(field.name.as_str()));
                }
                continue;
            }

            match row.get(&field.name) {
                Some(Value::Null) | None if field.not_null => {
                    // An omitted field on update keeps its stored value
                    if mode == ValidationMode::Insert || row.contains_key(&field.name) {
                        return Err(SchemaError::missing_required(field.name.as_str()));
                    }
                }
                Some(Value::Null) => changes.push((field.name.clone(), None)),
                Some(value) => {
                    let typed = validate_value(field, value)?;
                    changes.push((field.name.clone(), Some(typed)));
                }
                None => {}
            }
        }

        Ok(ValidatedRow { changes })
    }
}

/// Validates a single value against its field definition.
fn validate_value(field: &FieldSpec, value: &Value) -> SchemaResult<FieldValue> {
    let typed = match field.field_type {
        // Integral numbers only; floats and out-of-range values are rejected
        FieldType::Integer => value.as_i64().map(FieldValue::Integer),
        FieldType::Text => value.as_str().map(|s| FieldValue::Text(s.to_string())),
    };

    typed.ok_or_else(|| SchemaError::type_mismatch(field.name.as_str(), field.field_type))
}
