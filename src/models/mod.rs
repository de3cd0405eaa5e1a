//! Core data models for Expense Tracker
//!
//! This module contains the data structures of the expense domain: amounts,
//! the fixed category set, individual records and the record table.

pub mod category;
pub mod expense;
pub mod money;

pub use category::{Category, CategoryFilter};
pub use expense::{check_stored_amount, ExpenseRecord, ExpenseTable, MAX_AMOUNT};
pub use money::{Money, MoneyParseError};
