//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod config;
pub mod expense;
pub mod export;
pub mod history;
pub mod report;

pub use config::{handle_config, ConfigArgs};
pub use expense::{handle_add, handle_categories, handle_list, handle_total};
pub use export::{handle_export, ExportFormat};
pub use history::handle_history;
pub use report::{handle_report_command, ReportCommands};
