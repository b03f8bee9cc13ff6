//! In-memory schema registry
//!
//! Maps table name to its schema. Schemas are immutable once registered
//! and names are never reused.

use std::collections::HashMap;

use super::errors::{SchemaError, SchemaResult};
use super::types::TableSchema;

/// Registry of table schemas, in registration order.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    /// Schemas indexed by table name
    schemas: HashMap<String, TableSchema>,
    /// Table names in registration order
    order: Vec<String>,
}

impl SchemaRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a schema.
    ///
    /// Fails with `DuplicateTable` if the name is taken and with
    /// `InvalidSchema` if the schema structure is malformed.
    pub fn register(&mut self, schema: TableSchema) -> SchemaResult<&TableSchema> {
        if self.schemas.contains_key(&schema.name) {
            return Err(SchemaError::duplicate_table(schema.name.as_str()));
        }

        schema
            .validate_structure()
            .map_err(|reason| SchemaError::invalid_schema(schema.name.as_str(), reason))?;

        let name = schema.name.clone();
        self.order.push(name.clone());
        Ok(self.schemas.entry(name).or_insert(schema))
    }

    /// Gets a schema by table name.
    pub fn get(&self, table: &str) -> SchemaResult<&TableSchema> {
        self.schemas
            .get(table)
            .ok_or_else(|| SchemaError::unknown_table(table))
    }

    /// Checks if a table is registered.
    pub fn has_table(&self, table: &str) -> bool {
        self.schemas.contains_key(table)
    }

    /// Returns registered table names in registration order.
    pub fn table_names(&self) -> Vec<String> {
        self.order.clone()
    }

    /// Returns all schemas in registration order.
    pub fn schemas(&self) -> impl Iterator<Item = &TableSchema> {
        self.order.iter().filter_map(|name| self.schemas.get(name))
    }

    /// Returns the number of registered tables.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Whether no tables are registered.
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
