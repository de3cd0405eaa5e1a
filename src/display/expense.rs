//! Expense table display formatting
//!
//! Renders the expense table for the terminal using `tabled`.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{ExpenseRecord, ExpenseTable};

/// One display row of the expense table
#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl ExpenseRow {
    fn from_record(index: usize, record: &ExpenseRecord, symbol: &str, date_format: &str) -> Self {
        Self {
            index,
            date: record.date.format(date_format).to_string(),
            amount: record.amount.format_with_symbol(symbol),
            category: record.category.to_string(),
            description: record.description.clone(),
        }
    }
}

/// Format the expense table, numbering rows from 1
pub fn format_expense_table(table: &ExpenseTable, symbol: &str, date_format: &str) -> String {
    if table.is_empty() {
        return "No expenses added yet.\n".to_string();
    }

    let rows: Vec<ExpenseRow> = table
        .iter()
        .enumerate()
        .map(|(i, r)| ExpenseRow::from_record(i + 1, r, symbol, date_format))
        .collect();

    let mut output = Table::new(rows).with(Style::rounded()).to_string();
    output.push('\n');
    output
}

/// Format the grand total line
pub fn format_total(table: &ExpenseTable, symbol: &str) -> String {
    if table.is_empty() {
        "No expenses to calculate.".to_string()
    } else {
        format!("Total: {}", table.grand_total().format_with_symbol(symbol))
    }
}
