//! Export module
//!
//! Exports the expense table to CSV, JSON and YAML.

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_expenses_csv;
pub use json::{export_expenses_json, ExpenseExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_expenses_yaml;
