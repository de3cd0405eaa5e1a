//! Spending by category
//!
//! Groups the expense table by category. Categories with no records are left
//! out rather than reported as zero.

use std::collections::BTreeMap;

use crate::models::{Category, ExpenseTable, Money};

/// Sum of amounts per category, for categories that have at least one record
pub fn totals_by_category(table: &ExpenseTable) -> BTreeMap<Category, Money> {
    let mut totals = BTreeMap::new();
    for record in table {
        *totals.entry(record.category).or_insert_with(Money::zero) += record.amount;
    }
    totals
}

/// Distinct categories present in the table, in order of first appearance
///
/// An empty table yields no options; callers add the "All" sentinel themselves.
pub fn category_options(table: &ExpenseTable) -> Vec<Category> {
    let mut options = Vec::new();
    for record in table {
        if !options.contains(&record.category) {
            options.push(record.category);
        }
    }
    options
}

/// One row of the category breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpending {
    pub category: Category,
    pub total: Money,
    /// Number of records in this category
    pub count: usize,
    /// Share of the grand total, 0-100
    pub percentage: f64,
}

/// Category breakdown used by the category chart
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryReport {
    /// Rows in category order
    pub rows: Vec<CategorySpending>,
    pub grand_total: Money,
}

impl CategoryReport {
    /// Build the breakdown for a table
    pub fn generate(table: &ExpenseTable) -> Self {
        let grand_total = table.grand_total();

        let mut counts: BTreeMap<Category, usize> = BTreeMap::new();
        for record in table {
            *counts.entry(record.category).or_default() += 1;
        }

        let rows = totals_by_category(table)
            .into_iter()
            .map(|(category, total)| {
                let percentage = if grand_total.is_positive() {
                    total.cents() as f64 / grand_total.cents() as f64 * 100.0
                } else {
                    0.0
                };
                CategorySpending {
                    category,
                    total,
                    count: counts.get(&category).copied().unwrap_or(0),
                    percentage,
                }
            })
            .collect();

        Self { rows, grand_total }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Largest single category total, used to scale bars
    pub fn max_total(&self) -> Money {
        self.rows.iter().map(|r| r.total).max().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseRecord;
    use chrono::NaiveDate;

    fn record(day: u32, cents: i64, category: Category) -> ExpenseRecord {
        ExpenseRecord::with_date(
            NaiveDate::from_ymd_opt(2025, 4, day).unwrap(),
            Money::from_cents(cents),
            category,
            "",
        )
    }

    fn sample_table() -> ExpenseTable {
        ExpenseTable::from(vec![
            record(1, 1250, Category::Transport),
            record(1, 750, Category::Food),
            record(2, 1000, Category::Transport),
            record(3, 1000, Category::Others),
        ])
    }

    #[test]
    fn test_totals_by_category() {
        let totals = totals_by_category(&sample_table());

        assert_eq!(totals.len(), 3);
        assert_eq!(totals[&Category::Transport], Money::from_cents(2250));
        assert_eq!(totals[&Category::Food], Money::from_cents(750));
        assert_eq!(totals[&Category::Others], Money::from_cents(1000));
        assert!(!totals.contains_key(&Category::Utilities));
        assert!(!totals.contains_key(&Category::Entertainment));
    }

    #[test]
    fn test_totals_sum_to_grand_total() {
        let tables = [
            ExpenseTable::new(),
            sample_table(),
            ExpenseTable::from(vec![record(9, 1, Category::Entertainment)]),
        ];
        for table in &tables {
            let sum: Money = totals_by_category(table).values().sum();
            assert_eq!(sum, table.grand_total());
        }
    }

    #[test]
    fn test_empty_table_has_no_totals() {
        assert!(totals_by_category(&ExpenseTable::new()).is_empty());
    }

    #[test]
    fn test_category_options_first_appearance_order() {
        assert_eq!(
            category_options(&sample_table()),
            vec![Category::Transport, Category::Food, Category::Others]
        );
    }

    #[test]
    fn test_category_options_empty_table() {
        assert!(category_options(&ExpenseTable::new()).is_empty());
    }

    #[test]
    fn test_report_rows() {
        let report = CategoryReport::generate(&sample_table());

        assert_eq!(report.grand_total, Money::from_cents(4000));
        assert_eq!(report.rows.len(), 3);

        let food = &report.rows[0];
        assert_eq!(food.category, Category::Food);
        assert_eq!(food.count, 1);
        assert!((food.percentage - 18.75).abs() < 1e-9);

        let transport = &report.rows[1];
        assert_eq!(transport.count, 2);
        assert_eq!(report.max_total(), Money::from_cents(2250));
    }

    #[test]
    fn test_report_empty() {
        let report = CategoryReport::generate(&ExpenseTable::new());
        assert!(report.is_empty());
        assert_eq!(report.max_total(), Money::zero());
    }
}
