//! Record store: row state for every table

use std::collections::HashMap;

use super::errors::StoreResult;
use super::table::TableState;
use crate::record::Record;
use crate::schema::{Row, SchemaError, TableSchema};

/// Holds the rows of every table, keyed by table name.
///
/// Each table keeps its own copy of the schema it was created with, and
/// every insert and update is validated against that copy.
#[derive(Debug, Default)]
pub struct RecordStore {
    tables: HashMap<String, TableState>,
}

impl RecordStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Initializes empty state for a table, with its id counter at 1.
    pub fn create(&mut self, schema: &TableSchema) -> StoreResult<()> {
        if self.tables.contains_key(&schema.name) {
            return Err(SchemaError::duplicate_table(schema.name.as_str()).into());
        }
        self.tables
            .insert(schema.name.clone(), TableState::new(schema));
        Ok(())
    }

    /// Returns a table's state.
    pub fn table(&self, name: &str) -> StoreResult<&TableState> {
        self.tables
            .get(name)
            .ok_or_else(|| SchemaError::unknown_table(name).into())
    }

    pub(crate) fn table_mut(&mut self, name: &str) -> StoreResult<&mut TableState> {
        self.tables
            .get_mut(name)
            .ok_or_else(|| SchemaError::unknown_table(name).into())
    }

    /// Validates and inserts a row into table `name`.
    pub fn insert(&mut self, name: &str, row: &Row) -> StoreResult<Record> {
        self.table_mut(name)?.insert(row)
    }

    /// Returns a copy of a table's rows in insertion order.
    pub fn get_all(&self, name: &str) -> StoreResult<Vec<Record>> {
        Ok(self.table(name)?.get_all())
    }

    /// Returns one row by primary key.
    pub fn get_by_id(&self, name: &str, id: i64) -> StoreResult<Record> {
        self.table(name)?.get_by_id(id)
    }

    /// Validates a partial row and merges it into the row with `id`.
    pub fn update(&mut self, name: &str, id: i64, row: &Row) -> StoreResult<Record> {
        self.table_mut(name)?.update(id, row)
    }

    /// Removes and returns the row with `id`.
    pub fn delete_by_id(&mut self, name: &str, id: i64) -> StoreResult<Record> {
        self.table_mut(name)?.delete_by_id(id)
    }

    /// Number of rows in a table.
    pub fn len(&self, name: &str) -> StoreResult<usize> {
        Ok(self.table(name)?.len())
    }
}
