//! tabula - a strict, schema-validated in-memory record store
//!
//! Tables are declared with typed field definitions. Every insert and
//! update is validated against the table's schema before any row is
//! touched, and primary keys come from a per-table counter that is never
//! rewound.

pub mod cli;
pub mod config;
pub mod database;
pub mod observability;
pub mod record;
pub mod schema;
pub mod store;

pub use config::Config;
pub use database::{Database, TableHandle};
pub use record::{FieldValue, Record};
pub use schema::{FieldSpec, FieldType, Row, SchemaError, TableSchema};
pub use store::{StoreError, StoreResult};
