//! Budget error types.

use blinkbank_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Budget-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BudgetError {
    /// Budget limit is zero or negative, so progress cannot be computed.
    #[error("Degenerate budget: limit {limit} must be greater than zero")]
    DegenerateBudget {
        /// Offending limit.
        limit: Decimal,
    },

    /// Period name outside daily/weekly/monthly/yearly.
    #[error("Invalid period kind: {0}")]
    InvalidPeriodKind(String),

    /// Limit supplied at creation is zero or negative.
    #[error("Budget limit must be greater than zero, got {0}")]
    NonPositiveLimit(Decimal),

    /// Budgets constrain expenses only.
    #[error("Budgets cannot target the Income category")]
    IncomeCategory,
}

impl From<BudgetError> for AppError {
    fn from(err: BudgetError) -> Self {
        match err {
            BudgetError::DegenerateBudget { .. } => Self::BusinessRule(err.to_string()),
            BudgetError::InvalidPeriodKind(_)
            | BudgetError::NonPositiveLimit(_)
            | BudgetError::IncomeCategory => Self::Validation(err.to_string()),
        }
    }
}
