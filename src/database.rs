//! Database façade
//!
//! `Database` owns the schema registry and the record store. Rows are
//! reached through `Database::table`, which resolves the table once and
//! returns a `TableHandle` for a single operation:
//!
//! ```ignore
//! let mut db = Database::new();
//! db.create_table("users", vec![FieldSpec::id(), FieldSpec::text("name").not_null()])?;
//!
//! let row = json!({"name": "John Doe"});
//! let record = db.table("users")?.insert(row.as_object().unwrap())?;
//! let all = db.table("users")?.get_all();
//! ```
//!
//! Every handle operation takes `self`, so a handle cannot be reused and
//! there is no "current table" stored on the database.

use tracing::{info, warn};

use crate::config::Config;
use crate::observability::Event;
use crate::record::Record;
use crate::schema::{FieldSpec, Row, SchemaRegistry, TableSchema};
use crate::store::{RecordStore, StoreResult, TableState};

/// An in-memory, schema-validated record store
#[derive(Debug, Default)]
pub struct Database {
    registry: SchemaRegistry,
    store: RecordStore,
}

impl Database {
    /// Creates an empty database.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a database with every table declared in `config`.
    pub fn from_config(config: &Config) -> StoreResult<Self> {
        let mut db = Self::new();
        for schema in &config.tables {
            db.create_table_from_schema(schema.clone())?;
        }
        Ok(db)
    }

    /// Declares a table.
    ///
    /// Fails with `DuplicateTable` if `name` is taken and `InvalidSchema`
    /// if the fields do not form a valid schema.
    pub fn create_table(
        &mut self,
        name: impl Into<String>,
        fields: Vec<FieldSpec>,
    ) -> StoreResult<&TableSchema> {
        self.create_table_from_schema(TableSchema::new(name, fields))
    }

    /// Declares a table from a complete schema.
    pub fn create_table_from_schema(&mut self, schema: TableSchema) -> StoreResult<&TableSchema> {
        let name = schema.name.clone();
        let schema = match self.registry.register(schema) {
            Ok(schema) => schema,
            Err(e) => {
                warn!(event = %Event::TableRejected, table = %name, code = e.code(), reason = %e);
                return Err(e.into());
            }
        };

        self.store.create(schema)?;
        info!(event = %Event::TableCreated, table = %name, fields = schema.fields.len());
        Ok(schema)
    }

    /// Selects a table for exactly one operation.
    ///
    /// Fails with `UnknownTable` if the table was never created.
    pub fn table(&mut self, name: &str) -> StoreResult<TableHandle<'_>> {
        self.registry.get(name)?;
        let state = self.store.table_mut(name)?;
        Ok(TableHandle { state })
    }

    /// Table names in creation order.
    pub fn table_names(&self) -> Vec<String> {
        self.registry.table_names()
    }

    /// Whether a table exists.
    pub fn has_table(&self, name: &str) -> bool {
        self.registry.has_table(name)
    }

    /// Returns a table's schema.
    pub fn schema(&self, name: &str) -> StoreResult<&TableSchema> {
        Ok(self.registry.get(name)?)
    }

    /// Read access to a table's row state.
    pub fn state(&self, name: &str) -> StoreResult<&TableState> {
        self.store.table(name)
    }
}

/// A single-use binding to one table.
///
/// Obtained from `Database::table`; each operation consumes the handle.
#[derive(Debug)]
pub struct TableHandle<'a> {
    state: &'a mut TableState,
}

impl<'a> TableHandle<'a> {
    /// Table name
    pub fn name(&self) -> &str {
        self.state.name()
    }

    /// Table schema
    pub fn schema(&self) -> &TableSchema {
        self.state.schema()
    }

    /// Validates `row` and stores it with the next id.
    pub fn insert(self, row: &Row) -> StoreResult<Record> {
        self.state.insert(row)
    }

    /// Returns a copy of all rows in insertion order.
    pub fn get_all(self) -> Vec<Record> {
        self.state.get_all()
    }

    /// Returns the row with `id`.
    pub fn get_by_id(self, id: i64) -> StoreResult<Record> {
        self.state.get_by_id(id)
    }

    /// Validates `row` and merges it into the row with `id`.
    pub fn update(self, id: i64, row: &Row) -> StoreResult<Record> {
        self.state.update(id, row)
    }

    /// Removes and returns the row with `id`.
    pub fn delete_by_id(self, id: i64) -> StoreResult<Record> {
        self.state.delete_by_id(id)
    }

    /// Number of rows stored.
    pub fn count(self) -> usize {
        self.state.len()
    }
}
