//! Table schema definitions
//!
//! Supported field types:
//! - integer: 64-bit signed integer
//! - text: UTF-8 string
//!
//! Every table has exactly one primary key, an auto-increment integer
//! assigned by the store.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Supported field types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// 64-bit signed integer
    Integer,
    /// UTF-8 string
    Text,
}

impl FieldType {
    /// Returns the type name
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::Integer => "integer",
            FieldType::Text => "text",
        }
    }

    /// Returns the phrase used in validation messages ("must be a string")
    pub fn expectation(&self) -> &'static str {
        match self {
            FieldType::Integer => "an integer",
            FieldType::Text => "a string",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

/// A single field definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    /// Field name, unique within the table
    pub name: String,
    /// Declared value type
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Whether this field is the table's primary key
    #[serde(default)]
    pub primary_key: bool,
    /// Whether the store assigns this field's value
    #[serde(default)]
    pub auto_increment: bool,
    /// Whether the field must be present and non-null on insert
    #[serde(default)]
    pub not_null: bool,
}

impl FieldSpec {
    /// Create a nullable field of the given type
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            primary_key: false,
            auto_increment: false,
            not_null: false,
        }
    }

    /// Create a nullable integer field
    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Integer)
    }

    /// Create a nullable text field
    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Text)
    }

    /// Create the conventional `id` primary key
    pub fn id() -> Self {
        Self::integer("id").primary_key().auto_increment()
    }

    /// Mark as primary key
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Mark as auto-increment
    pub fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }

    /// Mark as required
    pub fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }
}

/// Complete table schema: the table name and its fields in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    /// Table name
    pub name: String,
    /// Field definitions in declaration order
    pub fields: Vec<FieldSpec>,
}

impl TableSchema {
    /// Create a new schema
    pub fn new(name: impl Into<String>, fields: Vec<FieldSpec>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Looks up a field by name
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Returns the primary key field.
    ///
    /// A schema that passed `validate_structure` always has one.
    pub fn primary_key(&self) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.primary_key)
    }

    /// Returns the primary key field name, `id` if none is declared
    pub fn primary_key_name(&self) -> &str {
        self.primary_key().map(|f| f.name.as_str()).unwrap_or("id")
    }

    /// Returns field names in declaration order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Validates the schema structure itself (not a row)
    pub fn validate_structure(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("table name must not be empty".into());
        }

        if self.fields.is_empty() {
            return Err("schema must declare at least one field".into());
        }

        let mut seen = HashSet::new();
        for field in &self.fields {
            if field.name.trim().is_empty() {
                return Err("field names must not be empty".into());
            }
            if !seen.insert(field.name.as_str()) {
                return Err(format!("duplicate field '{}'", field.name));
            }
        }

        let keys: Vec<&FieldSpec> = self.fields.iter().filter(|f| f.primary_key).collect();
        let key = match keys.as_slice() {
            [key] => *key,
            [] => return Err("schema must declare a primary key".into()),
            _ => return Err("schema must declare exactly one primary key".into()),
        };

        if key.field_type != FieldType::Integer {
            return Err(format!("primary key '{}' must be an integer", key.name));
        }
        if !key.auto_increment {
            return Err(format!("primary key '{}' must be auto-increment", key.name));
        }

        if let Some(field) = self.fields.iter().find(|f| f.auto_increment && !f.primary_key) {
            return Err(format!(
                "only the primary key may be auto-increment, found '{}'",
                field.name
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users_schema() -> TableSchema {
        TableSchema::new(
            "users",
            vec![
                FieldSpec::id(),
                FieldSpec::text("name").not_null(),
                FieldSpec::text("email").not_null(),
            ],
        )
    }

    #[test]
    fn test_schema_structure_valid() {
        assert!(users_schema().validate_structure().is_ok());
    }

    #[test]
    fn test_schema_missing_primary_key() {
        let schema = TableSchema::new("users", vec![FieldSpec::text("name")]);
        let err = schema.validate_structure().unwrap_err();
        assert!(err.contains("primary key"));
    }

    #[test]
    fn test_schema_two_primary_keys() {
        let schema = TableSchema::new(
            "users",
            vec![FieldSpec::id(), FieldSpec::integer("other").primary_key().auto_increment()],
        );
        assert!(schema.validate_structure().unwrap_err().contains("exactly one"));
    }

    #[test]
    fn test_primary_key_must_be_integer() {
        let schema = TableSchema::new(
            "users",
            vec![FieldSpec::text("id").primary_key().auto_increment()],
        );
        assert!(schema.validate_structure().unwrap_err().contains("integer"));
    }

    #[test]
    fn test_primary_key_must_auto_increment() {
        let schema = TableSchema::new("users", vec![FieldSpec::integer("id").primary_key()]);
        assert!(schema.validate_structure().unwrap_err().contains("auto-increment"));
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let schema = TableSchema::new(
            "users",
            vec![FieldSpec::id(), FieldSpec::text("name"), FieldSpec::integer("name")],
        );
        assert!(schema.validate_structure().unwrap_err().contains("name"));
    }

    #[test]
    fn test_empty_table_name_rejected() {
        let schema = TableSchema::new(" ", vec![FieldSpec::id()]);
        assert!(schema.validate_structure().is_err());
    }

    #[test]
    fn test_primary_key_lookup() {
        let schema = users_schema();
        assert_eq!(schema.primary_key_name(), "id");
        assert_eq!(schema.field("email").unwrap().field_type, FieldType::Text);
        assert!(schema.field("lastName").is_none());
        assert_eq!(schema.field_names().collect::<Vec<_>>(), ["id", "name", "email"]);
    }

    #[test]
    fn test_field_spec_from_json_options() {
        let spec: FieldSpec = serde_json::from_str(
            r#"{"name":"id","type":"integer","primaryKey":true,"autoIncrement":true}"#,
        )
        .unwrap();
        assert_eq!(spec, FieldSpec::id());

        let spec: FieldSpec = serde_json::from_str(r#"{"name":"bio","type":"text"}"#).unwrap();
        assert!(!spec.not_null);
        assert!(!spec.primary_key);
    }

    #[test]
    fn test_field_type_names() {
        assert_eq!(FieldType::Integer.type_name(), "integer");
        assert_eq!(FieldType::Text.type_name(), "text");
        assert_eq!(FieldType::Text.expectation(), "a string");
    }
}
