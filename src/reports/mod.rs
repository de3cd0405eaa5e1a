//! Reports module
//!
//! Aggregations over the expense table:
//! - Totals by category (and the category filter options)
//! - Totals by date

mod category;
mod daily;

pub use category::{category_options, totals_by_category, CategoryReport, CategorySpending};
pub use daily::{totals_by_date, DailyReport};
