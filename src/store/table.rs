//! Per-table row state
//!
//! # Invariants
//!
//! - `next_id` starts at 1 and only grows; ids are never reused
//! - Primary keys are unique and immutable after insert
//! - Rows stay in insertion order
//! - Rows are validated before any mutation, against the schema the
//!   table was created with

use tracing::debug;

use super::errors::{StoreError, StoreResult};
use crate::observability::Event;
use crate::record::Record;
use crate::schema::{Row, SchemaError, SchemaValidator, TableSchema};

/// Schema, rows and primary key counter for one table
#[derive(Debug, Clone)]
pub struct TableState {
    schema: TableSchema,
    rows: Vec<Record>,
    next_id: i64,
}

impl TableState {
    /// Creates empty state for a registered schema.
    pub(crate) fn new(schema: &TableSchema) -> Self {
        Self {
            schema: schema.clone(),
            rows: Vec::new(),
            next_id: 1,
        }
    }

    /// Table name
    pub fn name(&self) -> &str {
        &self.schema.name
    }

    /// Schema every row is validated against
    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    /// Id the next insert will receive
    pub fn next_id(&self) -> i64 {
        self.next_id
    }

    /// Stored rows in insertion order
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    /// Number of stored rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Validates and appends a row, assigning the next id.
    pub(crate) fn insert(&mut self, row: &Row) -> StoreResult<Record> {
        let validated = SchemaValidator::new(&self.schema)
            .validate_insert(row)
            .map_err(|e| self.rejected(e))?;

        let id = self.next_id;
        self.next_id += 1;

        let record = Record::from_insert(&self.schema, id, validated);
        self.rows.push(record.clone());

        debug!(event = %Event::RecordInserted, table = %self.schema.name, id);
        Ok(record)
    }

    /// Returns an independent copy of every row.
    pub(crate) fn get_all(&self) -> Vec<Record> {
        self.rows.clone()
    }

    /// Returns the row with `id`.
    pub(crate) fn get_by_id(&self, id: i64) -> StoreResult<Record> {
        self.position(id)
            .map(|pos| self.rows[pos].clone())
            .ok_or_else(|| self.not_found(id))
    }

    /// Validates a partial row and merges it into the row with `id`.
    ///
    /// Validation runs first, so an invalid row is reported even when the
    /// id does not exist.
    pub(crate) fn update(&mut self, id: i64, row: &Row) -> StoreResult<Record> {
        let changes = SchemaValidator::new(&self.schema)
            .validate_update(row)
            .map_err(|e| self.rejected(e))?;

        let pos = self.position(id).ok_or_else(|| self.not_found(id))?;
        let updated = self.rows[pos].merged(&self.schema, changes);
        self.rows[pos] = updated.clone();

        debug!(event = %Event::RecordUpdated, table = %self.schema.name, id);
        Ok(updated)
    }

    /// Removes and returns the row with `id`. The id is not reissued.
    pub(crate) fn delete_by_id(&mut self, id: i64) -> StoreResult<Record> {
        let pos = self.position(id).ok_or_else(|| self.not_found(id))?;
        let record = self.rows.remove(pos);

        debug!(event = %Event::RecordDeleted, table = %self.schema.name, id);
        Ok(record)
    }

    fn position(&self, id: i64) -> Option<usize> {
        self.rows
            .iter()
            .position(|r| r.get_integer(self.schema.primary_key_name()) == Some(id))
    }

    fn rejected(&self, err: SchemaError) -> StoreError {
        debug!(
            event = %Event::ValidationRejected,
            table = %self.schema.name,
            code = err.code(),
            reason = %err
        );
        err.into()
    }

    fn not_found(&self, id: i64) -> StoreError {
        debug!(event = %Event::RecordNotFound, table = %self.schema.name, id);
        StoreError::record_not_found(self.schema.name.as_str(), id)
    }
}
