//! JSON Export functionality
//!
//! Exports the (optionally filtered) expense table to a versioned JSON document.

use std::collections::BTreeMap;
use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, CategoryFilter, ExpenseRecord, ExpenseTable, Money};
use crate::reports::totals_by_category;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Export document shared by the JSON and YAML formats
#[derive(Debug, Clone, Serialize)]
pub struct ExpenseExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Category filter the export was taken with
    pub filter: String,

    /// Exported records in append order
    pub expenses: Vec<ExpenseRecord>,

    /// Sum of all exported amounts
    pub grand_total: Money,

    /// Per-category sums of the exported records
    pub totals_by_category: BTreeMap<Category, Money>,
}

impl ExpenseExport {
    /// Build an export document from a table and the filter that produced it
    pub fn new(table: &ExpenseTable, filter: CategoryFilter) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            filter: filter.to_string(),
            expenses: table.records().to_vec(),
            grand_total: table.grand_total(),
            totals_by_category: totals_by_category(table),
        }
    }
}

/// Export to JSON format
pub fn export_expenses_json<W: Write>(
    table: &ExpenseTable,
    filter: CategoryFilter,
    writer: &mut W,
    pretty: bool,
) -> ExpenseResult<()> {
    let export = ExpenseExport::new(table, filter);

    let result = if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    };

    result.map_err(|e| ExpenseError::Export(e.to_string()))
}
