//! Display formatting for terminal output

pub mod expense;
pub mod report;

pub use expense::{format_expense_table, format_total};
pub use report::{format_bar, format_category_chart, format_daily_chart, format_percentage};
