//! Observable events
//!
//! Events are explicit and typed. Each one is emitted as a `tracing`
//! event carrying `event = <name>` plus structured fields.

use std::fmt;

/// Observable events in tabula
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    /// Configuration loaded
    ConfigLoaded,

    // Schema
    /// Table registered
    TableCreated,
    /// Table registration rejected
    TableRejected,

    // Records
    /// Record inserted
    RecordInserted,
    /// Record updated
    RecordUpdated,
    /// Record deleted
    RecordDeleted,
    /// Row failed validation
    ValidationRejected,
    /// Update or delete referenced a missing id
    RecordNotFound,

    // Request loop
    /// Request received
    RequestReceived,
    /// Request failed
    RequestFailed,
}

impl Event {
    /// Returns the event name
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::TableCreated => "TABLE_CREATED",
            Event::TableRejected => "TABLE_REJECTED",
            Event::RecordInserted => "RECORD_INSERTED",
            Event::RecordUpdated => "RECORD_UPDATED",
            Event::RecordDeleted => "RECORD_DELETED",
            Event::ValidationRejected => "VALIDATION_REJECTED",
            Event::RecordNotFound => "RECORD_NOT_FOUND",
            Event::RequestReceived => "REQUEST_RECEIVED",
            Event::RequestFailed => "REQUEST_FAILED",
        }
    }

    /// Whether the event reports a rejected operation
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Event::TableRejected
                | Event::ValidationRejected
                | Event::RecordNotFound
                | Event::RequestFailed
        )
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
