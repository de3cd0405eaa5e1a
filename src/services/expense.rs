//! Expense service
//!
//! Validation for new expenses and the record-then-persist flow used by the
//! front end. Tables are passed in and handed back; nothing here caches state
//! between calls.

use crate::audit::AuditEvent;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, ExpenseRecord, ExpenseTable, Money, MAX_AMOUNT};
use crate::storage::Storage;

/// Check that a record may be appended
///
/// The amount must be strictly positive and at most `MAX_AMOUNT`. Category
/// membership is guaranteed by the `Category` type itself.
pub fn validate(record: &ExpenseRecord) -> ExpenseResult<()> {
    if !record.amount.is_positive() {
        return Err(ExpenseError::Validation(format!(
            "Amount must be greater than zero, got {}",
            record.amount
        )));
    }
    if record.amount > MAX_AMOUNT {
        return Err(ExpenseError::Validation(format!(
            "Amount must be at most {}, got {}",
            MAX_AMOUNT, record.amount
        )));
    }
    Ok(())
}

/// Return a new table with `record` appended at the end
///
/// Fails with a validation error when the amount is zero or negative; the
/// input table is never modified.
pub fn append(record: ExpenseRecord, table: &ExpenseTable) -> ExpenseResult<ExpenseTable> {
    validate(&record)?;
    Ok(table.with_appended(record))
}

/// Parse user-entered amount text
pub fn parse_amount(input: &str) -> ExpenseResult<Money> {
    Money::parse(input).map_err(|e| ExpenseError::Validation(e.to_string()))
}

/// Service for logging new expenses
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Log a new expense dated today
    ///
    /// Appends to `table`, rewrites the stored table, and writes an audit
    /// entry. On any error the caller should keep using `table`.
    pub fn record(
        &self,
        table: &ExpenseTable,
        amount: Money,
        category: Category,
        description: &str,
    ) -> ExpenseResult<ExpenseTable> {
        let record = ExpenseRecord::new(amount, category, description.trim());
        self.submit(table, record)
    }

    /// Append an already-built record, persist, and audit it
    ///
    /// Once the table is on disk the expense counts as added; a failed audit
    /// write is reported on stderr and does not fail the call.
    pub fn submit(&self, table: &ExpenseTable, record: ExpenseRecord) -> ExpenseResult<ExpenseTable> {
        let updated = append(record.clone(), table)?;

        self.storage.expenses.persist(&updated)?;

        let event = AuditEvent::ExpenseAdded {
            row: updated.len(),
            expense: record,
        };
        if let Err(e) = self.storage.log(event) {
            eprintln!("Warning: expense saved but not written to the audit log: {}", e);
        }

        Ok(updated)
    }
}
