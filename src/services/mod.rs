//! Service layer for Expense Tracker
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation and the append-then-persist flow.

pub mod expense;

pub use expense::{append, parse_amount, validate, ExpenseService};
