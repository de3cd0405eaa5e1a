//! Audit trail for Expense Tracker
//!
//! Every appended expense and every export is written to an append-only JSONL
//! file next to the settings. `expense history` reads it back.

mod entry;
mod logger;

pub use entry::{AuditEntry, AuditEvent};
pub use logger::AuditLogger;
