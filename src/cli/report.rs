//! CLI commands for reports
//!
//! Prints the category and daily spending charts.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_category_chart, format_daily_chart};
use crate::error::ExpenseResult;
use crate::models::CategoryFilter;
use crate::reports::{CategoryReport, DailyReport};
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Expense distribution by category
    #[command(alias = "categories")]
    Category,

    /// Daily expenses over time
    #[command(alias = "time")]
    Daily {
        /// Only include one category ("All" for everything)
        #[arg(short, long, default_value = "All")]
        category: CategoryFilter,
    },
}

/// Handle report commands
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> ExpenseResult<()> {
    let table = storage.expenses.load();

    match cmd {
        ReportCommands::Category => {
            let report = CategoryReport::generate(&table);
            print!(
                "{}",
                format_category_chart(&report, &settings.currency_symbol, settings.chart_width)
            );
        }
        ReportCommands::Daily { category } => {
            let report = DailyReport::generate(&table.filter_by_category(category));
            print!(
                "{}",
                format_daily_chart(
                    &report,
                    &settings.currency_symbol,
                    &settings.date_format,
                    settings.chart_width
                )
            );
        }
    }

    Ok(())
}
