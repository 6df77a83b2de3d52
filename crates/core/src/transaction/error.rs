//! Transaction error types.

use blinkbank_shared::AppError;
use thiserror::Error;

/// Transaction-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransactionError {
    /// Category label outside the fixed category set.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

impl From<TransactionError> for AppError {
    fn from(err: TransactionError) -> Self {
        Self::Validation(err.to_string())
    }
}
