//! Expense CLI commands
//!
//! Adding expenses and viewing the table, its total and the filter options.

use crate::config::settings::Settings;
use crate::display::{format_expense_table, format_total};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, CategoryFilter};
use crate::reports::category_options;
use crate::services::{parse_amount, ExpenseService};
use crate::storage::Storage;

fn invalid_amount() -> ExpenseError {
    ExpenseError::Validation("Please enter a valid amount".into())
}

/// Handle `expense add`
///
/// Uses the strict loader so that a table which fails to parse is reported
/// instead of being replaced by a one-row table.
pub fn handle_add(
    storage: &Storage,
    settings: &Settings,
    amount: &str,
    category: Category,
    description: Option<String>,
) -> ExpenseResult<()> {
    let amount = parse_amount(amount).map_err(|_| invalid_amount())?;

    let table = storage.expenses.try_load()?;
    let service = ExpenseService::new(storage);
    service
        .record(&table, amount, category, description.as_deref().unwrap_or(""))
        .map_err(|e| if e.is_validation() { invalid_amount() } else { e })?;

    println!(
        "Expense added: {} to {}",
        amount.format_with_symbol(&settings.currency_symbol),
        category
    );
    Ok(())
}

/// Handle `expense list`
pub fn handle_list(
    storage: &Storage,
    settings: &Settings,
    filter: CategoryFilter,
) -> ExpenseResult<()> {
    let table = storage.expenses.load();

    if table.is_empty() {
        print!("{}", format_expense_table(&table, &settings.currency_symbol, &settings.date_format));
        return Ok(());
    }

    let filtered = table.filter_by_category(filter);
    if filter != CategoryFilter::All {
        println!("Expenses in '{}' category:", filter);
    }
    print!(
        "{}",
        format_expense_table(&filtered, &settings.currency_symbol, &settings.date_format)
    );
    Ok(())
}

/// Handle `expense total`
pub fn handle_total(storage: &Storage, settings: &Settings) -> ExpenseResult<()> {
    let table = storage.expenses.load();
    println!("{}", format_total(&table, &settings.currency_symbol));
    Ok(())
}

/// Handle `expense categories`: the options a category selector offers
pub fn handle_categories(storage: &Storage) -> ExpenseResult<()> {
    let table = storage.expenses.load();

    println!("{}", CategoryFilter::ALL_LABEL);
    for category in category_options(&table) {
        println!("{}", category);
    }
    Ok(())
}
