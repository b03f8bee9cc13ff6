//! Schema subsystem for tabula
//!
//! Every table is declared with a schema, and every row written to it is
//! validated against that schema before the store is touched.
//!
//! # Design Principles
//!
//! - Schemas are immutable once registered
//! - Validation before mutation
//! - Violations abort writes, leaving state unchanged
//! - No coercion between types
//! - Deterministic, first-violation reporting

mod errors;
mod registry;
mod types;
mod validator;

pub use errors::{SchemaError, SchemaResult};
pub use registry::SchemaRegistry;
pub use types::{FieldSpec, FieldType, TableSchema};
pub use validator::{Row, SchemaValidator, ValidatedRow, ValidationMode};
