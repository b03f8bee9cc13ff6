//! Stored record types
//!
//! A `Record` is only ever built from a validated row, so every value it
//! holds has already been checked against the table's schema. Fields are
//! kept in schema declaration order and serialize in that order.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use crate::schema::{TableSchema, ValidatedRow};

/// A typed field value
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Integer field value
    Integer(i64),
    /// Text field value
    Text(String),
}

impl FieldValue {
    /// Returns the integer value, if this is an integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(v) => Some(*v),
            FieldValue::Text(_) => None,
        }
    }

    /// Returns the text value, if this is text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(v) => Some(v),
            FieldValue::Integer(_) => None,
        }
    }

    /// Converts to a JSON value
    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::Integer(v) => Value::from(*v),
            FieldValue::Text(v) => Value::from(v.as_str()),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(v) => write!(f, "{}", v),
            FieldValue::Text(v) => write!(f, "{:?}", v),
        }
    }
}

/// A stored row.
///
/// Optional fields that were never set are absent rather than null.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, FieldValue)>,
}

impl Record {
    /// Builds a freshly inserted record, placing the assigned primary key
    /// at its declared position.
    pub(crate) fn from_insert(schema: &TableSchema, id: i64, row: ValidatedRow) -> Self {
        let mut values = row.into_values();
        let mut fields = Vec::with_capacity(schema.fields.len());

        for spec in &schema.fields {
            if spec.primary_key {
                fields.push((spec.name.clone(), FieldValue::Integer(id)));
            } else if let Some(value) = take_value(&mut values, &spec.name) {
                fields.push((spec.name.clone(), value));
            }
        }

        Self { fields }
    }

    /// Returns a copy of this record with the validated changes applied.
    ///
    /// Fields absent from `changes` keep their current value; a change to
    /// `None` clears an optional field.
    pub(crate) fn merged(&self, schema: &TableSchema, changes: ValidatedRow) -> Self {
        let changes = changes.into_changes();
        let mut fields = Vec::with_capacity(schema.fields.len());

        for spec in &schema.fields {
            let value = match changes.iter().find(|(name, _)| *name == spec.name) {
                Some((_, change)) => change.clone(),
                None => self.get(&spec.name).cloned(),
            };
            if let Some(value) = value {
                fields.push((spec.name.clone(), value));
            }
        }

        Self { fields }
    }

    /// Returns a field value
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value)
    }

    /// Returns an integer field value
    pub fn get_integer(&self, field: &str) -> Option<i64> {
        self.get(field).and_then(FieldValue::as_integer)
    }

    /// Returns a text field value
    pub fn get_text(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(FieldValue::as_text)
    }

    /// Whether the record holds a value for `field`
    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Iterates fields in schema order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of fields present
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no fields are present
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Converts to a JSON object
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.fields
                .iter()
                .map(|(name, value)| (name.clone(), value.to_json()))
                .collect(),
        )
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ ")?;
        for (i, (name, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", name, value)?;
        }
        write!(f, " }}")
    }
}

fn take_value(values: &mut Vec<(String, FieldValue)>, field: &str) -> Option<FieldValue> {
    let pos = values.iter().position(|(name, _)| name == field)?;
    Some(values.remove(pos).1)
}
