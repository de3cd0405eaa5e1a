//! Expense record and table models
//!
//! An `ExpenseRecord` is one logged expenditure. An `ExpenseTable` is the
//! ordered collection of all of them, where position equals append order.
//! Tables are plain values: operations take a table and return a new one, and
//! whoever drives the session holds the current value between renders.

use chrono::{Local, NaiveDate};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;

use super::category::{Category, CategoryFilter};
use super::money::Money;

/// Largest amount a single record may carry
///
/// Keeps every table sum far inside `i64` cents, even for tables with tens of
/// millions of rows.
pub const MAX_AMOUNT: Money = Money::from_cents(100_000_000_000);

/// Check that an amount is usable in a stored record (0 up to `MAX_AMOUNT`)
pub fn check_stored_amount(amount: Money) -> Result<Money, String> {
    if amount.is_negative() {
        Err(format!("amount {} is negative", amount))
    } else if amount > MAX_AMOUNT {
        Err(format!("amount {} is larger than {}", amount, MAX_AMOUNT))
    } else {
        Ok(amount)
    }
}

fn deserialize_stored_amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
    check_stored_amount(Money::deserialize(deserializer)?).map_err(de::Error::custom)
}

/// A single logged expenditure
///
/// Field names are renamed to the column headers of the CSV table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Day the expense was logged
    #[serde(rename = "Date")]
    pub date: NaiveDate,

    /// Amount spent
    #[serde(rename = "Amount", deserialize_with = "deserialize_stored_amount")]
    pub amount: Money,

    /// Spending category
    #[serde(rename = "Category")]
    pub category: Category,

    /// Free-text description, empty when none was given
    #[serde(rename = "Description", default)]
    pub description: String,
}

impl ExpenseRecord {
    /// Create a new record dated today (local calendar day)
    pub fn new(amount: Money, category: Category, description: impl Into<String>) -> Self {
        Self::with_date(Local::now().date_naive(), amount, category, description)
    }

    /// Create a record with an explicit date, as when reading stored rows
    pub fn with_date(
        date: NaiveDate,
        amount: Money,
        category: Category,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            amount,
            category,
            description: description.into(),
        }
    }

    /// Check if a description was given
    pub fn has_description(&self) -> bool {
        !self.description.is_empty()
    }
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.date, self.amount, self.category)?;
        if self.has_description() {
            write!(f, " ({})", self.description)?;
        }
        Ok(())
    }
}

/// Ordered sequence of expense records
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseTable {
    records: Vec<ExpenseRecord>,
}

impl ExpenseTable {
    /// Column headers of the stored table, in order
    pub const COLUMNS: [&'static str; 4] = ["Date", "Amount", "Category", "Description"];

    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in append order
    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExpenseRecord> {
        self.records.iter()
    }

    /// Most recently appended record
    pub fn last(&self) -> Option<&ExpenseRecord> {
        self.records.last()
    }

    /// Return a new table with `record` added at the end
    ///
    /// No validation happens here; see `services::expense::append`.
    pub(crate) fn with_appended(&self, record: ExpenseRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// Records matching the filter, in their original order
    pub fn filter_by_category(&self, filter: CategoryFilter) -> Self {
        match filter {
            CategoryFilter::All => self.clone(),
            CategoryFilter::Only(_) => self
                .records
                .iter()
                .filter(|r| filter.matches(r.category))
                .cloned()
                .collect(),
        }
    }

    /// Sum of all amounts; zero for an empty table
    pub fn grand_total(&self) -> Money {
        self.records.iter().map(|r| r.amount).sum()
    }
}

impl From<Vec<ExpenseRecord>> for ExpenseTable {
    fn from(records: Vec<ExpenseRecord>) -> Self {
        Self { records }
    }
}

impl FromIterator<ExpenseRecord> for ExpenseTable {
    fn from_iter<I: IntoIterator<Item = ExpenseRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ExpenseTable {
    type Item = ExpenseRecord;
    type IntoIter = std::vec::IntoIter<ExpenseRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a ExpenseTable {
    type Item = &'a ExpenseRecord;
    type IntoIter = std::slice::Iter<'a, ExpenseRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
