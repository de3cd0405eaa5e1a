//! Expense Tracker - personal expense log backed by a CSV table
//!
//! This library provides the record store and query surface behind the
//! `expense` command-line tool. Expenses are appended to a flat CSV table that
//! is rewritten in full after every append, and the table can be summarised by
//! category or by date for display and charting.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, categories, records, the table)
//! - `storage`: CSV file storage layer
//! - `services`: Append validation and the record-then-persist flow
//! - `reports`: Aggregations over the table (by category, by date)
//! - `audit`: Audit logging system
//! - `display`: Terminal formatting and text charts
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers for the `expense` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::models::{Category, ExpenseRecord, Money};
//! use expense_tracker::services::expense::append;
//! use expense_tracker::storage::ExpenseStore;
//!
//! let store = ExpenseStore::new(path);
//! let table = store.load();
//! let record = ExpenseRecord::new(Money::from_cents(1250), Category::Food, "lunch");
//! let table = append(record, &table)?;
//! store.persist(&table)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
