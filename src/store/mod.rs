//! Record store subsystem for tabula
//!
//! Holds every table's rows in memory. Nothing is persisted.
//!
//! # Design Principles
//!
//! - Validate, then mutate: a rejected row leaves the table untouched
//! - Primary keys come from a per-table counter that never goes back
//! - Reads return copies; callers never alias stored rows

mod errors;
mod store;
mod table;

pub use errors::{StoreError, StoreResult};
pub use store::RecordStore;
pub use table::TableState;
