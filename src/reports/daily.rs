//! Spending over time
//!
//! Groups the expense table by calendar day, oldest first.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{ExpenseTable, Money};

/// Sum of amounts per date, sorted by date ascending
pub fn totals_by_date(table: &ExpenseTable) -> Vec<(NaiveDate, Money)> {
    let mut totals: BTreeMap<NaiveDate, Money> = BTreeMap::new();
    for record in table {
        *totals.entry(record.date).or_default() += record.amount;
    }
    totals.into_iter().collect()
}

/// Daily totals used by the time chart
#[derive(Debug, Clone, PartialEq)]
pub struct DailyReport {
    /// (date, total) pairs, oldest first
    pub days: Vec<(NaiveDate, Money)>,
}

impl DailyReport {
    pub fn generate(table: &ExpenseTable) -> Self {
        Self {
            days: totals_by_date(table),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.days.first().map(|(d, _)| *d)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.days.last().map(|(d, _)| *d)
    }

    /// Largest single-day total, used to scale bars
    pub fn max_total(&self) -> Money {
        self.days.iter().map(|(_, m)| *m).max().unwrap_or_default()
    }

    /// Mean spend over the days that have records
    pub fn average(&self) -> Money {
        if self.days.is_empty() {
            return Money::zero();
        }
        let total: Money = self.days.iter().map(|(_, m)| *m).sum();
        Money::from_cents(total.cents() / self.days.len() as i64)
    }
}
