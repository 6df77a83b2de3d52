//! Banking simulator error types.

use blinkbank_shared::AppError;
use blinkbank_shared::types::BankAccountId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Banking simulator errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BankingError {
    /// Account not found.
    #[error("Bank account not found: {0}")]
    AccountNotFound(BankAccountId),

    /// PIN does not match the account's.
    #[error("Incorrect PIN")]
    InvalidPin,

    /// PIN is not exactly four digits.
    #[error("PIN must be a 4-digit number")]
    InvalidPinFormat,

    /// Deposit or withdrawal amount is zero or negative.
    #[error("Amount must be greater than zero, got {0}")]
    NonPositiveAmount(Decimal),

    /// Withdrawal would take the balance below zero.
    #[error("Insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Balance before the withdrawal.
        balance: Decimal,
        /// Amount requested.
        requested: Decimal,
    },

    /// Deposit would exceed the representable balance.
    #[error("Balance overflow")]
    BalanceOverflow,
}

impl From<BankingError> for AppError {
    fn from(err: BankingError) -> Self {
        match err {
            BankingError::AccountNotFound(_) => Self::NotFound(err.to_string()),
            BankingError::InvalidPin
            | BankingError::InvalidPinFormat
            | BankingError::NonPositiveAmount(_) => Self::Validation(err.to_string()),
            BankingError::InsufficientFunds { .. } | BankingError::BalanceOverflow => {
                Self::BusinessRule(err.to_string())
            }
        }
    }
}
