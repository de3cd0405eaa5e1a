//! CLI command for viewing and changing settings

use clap::Args;

use crate::config::paths::ExpensePaths;
use crate::config::settings::{Settings, SettingsUpdate};
use crate::error::ExpenseResult;
use crate::storage::Storage;

/// Options for `expense config`; with none given the current setup is shown
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Currency symbol shown before amounts
    #[arg(long)]
    pub currency: Option<String>,
    /// strftime pattern for dates (e.g. "%d/%m/%Y")
    #[arg(long)]
    pub date_format: Option<String>,
    /// Width of the longest chart bar
    #[arg(long)]
    pub chart_width: Option<usize>,
    /// Turn the audit log on or off
    #[arg(long)]
    pub audit: Option<bool>,
}

impl From<ConfigArgs> for SettingsUpdate {
    fn from(args: ConfigArgs) -> Self {
        Self {
            currency_symbol: args.currency,
            date_format: args.date_format,
            chart_width: args.chart_width,
            audit_enabled: args.audit,
        }
    }
}

/// Handle `expense config`
pub fn handle_config(
    paths: &ExpensePaths,
    storage: &Storage,
    mut settings: Settings,
    args: ConfigArgs,
) -> ExpenseResult<()> {
    let update = SettingsUpdate::from(args);
    if !update.is_empty() {
        settings.apply(update)?;
        settings.save(paths)?;
        println!("Settings saved.");
        println!();
    }

    println!("Expense Tracker Configuration");
    println!("=============================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Expense table:  {}", storage.expenses.path().display());
    println!("Audit log:      {}", storage.audit().path().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol: {}", settings.currency_symbol);
    println!("  Date format:     {}", settings.date_format);
    println!("  Chart width:     {}", settings.chart_width);
    println!("  Audit enabled:   {}", settings.audit_enabled);
    Ok(())
}
