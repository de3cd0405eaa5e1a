//! Audit log entries
//!
//! An entry is a timestamp plus the event that happened: an expense was added
//! to the table, or the table was exported to a file.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{ExpenseRecord, Money};

/// Something worth keeping a trail of
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AuditEvent {
    /// A record was appended and the table persisted
    ExpenseAdded {
        /// 1-based position of the record in the table
        row: usize,
        expense: ExpenseRecord,
    },
    /// A (possibly filtered) view of the table was written to a file
    Exported {
        destination: String,
        format: String,
        filter: String,
        count: usize,
        total: Money,
    },
}

/// One line of the audit log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub event: AuditEvent,
}

impl AuditEntry {
    /// Stamp an event with the current time
    pub fn now(event: AuditEvent) -> Self {
        Self {
            timestamp: Utc::now(),
            event,
        }
    }
}

impl fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] ", self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"))?;
        match &self.event {
            AuditEvent::ExpenseAdded { row, expense } => {
                write!(f, "added row {}: {}", row, expense)
            }
            AuditEvent::Exported {
                destination,
                format,
                filter,
                count,
                total,
            } => write!(
                f,
                "exported {} expense(s) ({}, total {}) as {} to {}",
                count, filter, total, format, destination
            ),
        }
    }
}
