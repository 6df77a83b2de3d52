//! Toy banking simulator: accounts with guarded deposits and withdrawals.

pub mod error;
pub mod simulator;
pub mod types;

pub use error::BankingError;
pub use simulator::SimulatedBank;
pub use types::{BankAccount, BankOperation, BankTransaction};
