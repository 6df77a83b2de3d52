//! Transaction analytics: balances, totals, category breakdowns, savings rate.

pub mod summary;


pub use summary::{
    FinancialSummary, calculate_balance, group_expenses_by_category, savings_rate, total_by_kind,
};
