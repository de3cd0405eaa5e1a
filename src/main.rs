use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_add, handle_categories, handle_config, handle_export, handle_history, handle_list,
    handle_report_command, handle_total, ConfigArgs, ExportFormat, ReportCommands,
};
use expense_tracker::config::{paths::ExpensePaths, settings::Settings};
use expense_tracker::models::{Category, CategoryFilter};
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Personal expense tracker",
    long_about = "Log expenses by category, keep them in a CSV table, and view \
                  totals and spending charts by category and by day."
)]
struct Cli {
    /// Use this CSV file for the expense table instead of the default location
    #[arg(long, global = true, env = "EXPENSE_TRACKER_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new expense dated today
    Add {
        /// Amount (e.g. "12.50")
        amount: String,
        /// Category: Food, Transport, Entertainment, Utilities or Others
        category: Category,
        /// Optional description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Show all expenses, optionally for one category
    #[command(alias = "ls")]
    List {
        /// Category to view ("All" for everything)
        #[arg(short, long, default_value = "All")]
        category: CategoryFilter,
    },

    /// Show the total amount spent
    Total,

    /// List the category filter options for the current table
    Categories,

    /// Spending charts
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export expenses to a file
    Export {
        /// Output file path
        output: PathBuf,
        /// Export format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,
        /// Category to export ("All" for everything)
        #[arg(short, long, default_value = "All")]
        category: CategoryFilter,
        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Show recent audit log entries
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },

    /// Show or change configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = match cli.file {
        Some(file) => Storage::with_expenses_file(&paths, file)?,
        None => Storage::new(&paths)?,
    };
    storage.set_audit_enabled(settings.audit_enabled);

    match cli.command {
        Some(Commands::Add {
            amount,
            category,
            description,
        }) => handle_add(&storage, &settings, &amount, category, description)?,
        Some(Commands::List { category }) => handle_list(&storage, &settings, category)?,
        Some(Commands::Total) => handle_total(&storage, &settings)?,
        Some(Commands::Categories) => handle_categories(&storage)?,
        Some(Commands::Report(cmd)) => handle_report_command(&storage, &settings, cmd)?,
        Some(Commands::Export {
            output,
            format,
            category,
            pretty,
        }) => handle_export(&storage, output, format, category, pretty)?,
        Some(Commands::History { limit }) => handle_history(&storage, limit)?,
        Some(Commands::Config(args)) => handle_config(&paths, &storage, settings, args)?,
        None => {
            println!("Expense Tracker - personal expense log");
            println!();
            println!("Run 'expense --help' for usage information.");
            println!("Run 'expense add 12.50 Food -d lunch' to log your first expense.");
        }
    }

    Ok(())
}
