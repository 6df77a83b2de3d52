//! Transaction records consumed by budgets and analytics.
//!
//! Transactions are owned and written by an external store; this crate only
//! reads them.

pub mod error;
pub mod types;

pub use error::TransactionError;
pub use types::{Category, Transaction, TransactionKind};
