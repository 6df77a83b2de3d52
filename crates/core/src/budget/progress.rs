//! Reduction of matching transactions into spend-vs-limit figures.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::error::BudgetError;

/// Aggregated spend figures for one window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Sum of the amounts.
    pub spent: Decimal,
    /// `max(limit - spent, 0)`.
    pub remaining: Decimal,
    /// `round_half_up(min(spent / limit * 100, 100))`, never below zero.
    pub progress_percent: u8,
    /// `spent > limit`.
    pub is_over_budget: bool,
}

/// Sums `amounts` and derives progress against `limit`.
///
/// # Errors
///
/// Returns `BudgetError::DegenerateBudget` if `limit` is zero or negative.
pub fn aggregate<I>(limit: Decimal, amounts: I) -> Result<Progress, BudgetError>
where
    I: IntoIterator<Item = Decimal>,
{
    if limit <= Decimal::ZERO {
        return Err(BudgetError::DegenerateBudget { limit });
    }

    let spent = amounts
        .into_iter()
        .fold(Decimal::ZERO, Decimal::saturating_add);

    Ok(Progress {
        spent,
        remaining: limit.saturating_sub(spent).max(Decimal::ZERO),
        progress_percent: percent_of(spent, limit),
        is_over_budget: spent > limit,
    })
}

fn percent_of(spent: Decimal, limit: Decimal) -> u8 {
    // Overflow only happens for ratios far outside 0..=100, so the sign decides the clamp.
    let ratio = spent
        .checked_div(limit)
        .and_then(|r| r.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(if spent.is_sign_negative() {
            Decimal::ZERO
        } else {
            Decimal::ONE_HUNDRED
        });

    ratio
        .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u8()
        .unwrap_or(0)
}
