//! Budget service: progress computation and creation rules.

use blinkbank_shared::types::BudgetId;
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use rust_decimal::Decimal;

use super::error::BudgetError;
use super::filter::filter_transactions;
use super::progress::aggregate;
use super::types::{Budget, BudgetProgressOutcome, CreateBudgetInput, ProgressReport};
use super::window::resolve_window;
use crate::transaction::{Category, Transaction};

/// Budget service for business logic.
pub struct BudgetService;

impl BudgetService {
    /// Computes spend-vs-limit progress for `budget` as of `now`.
    ///
    /// `transactions` may contain records of other owners, other categories
    /// and income; only the owner's expenses in the budget's category inside
    /// the resolved window are counted. Tenant isolation is still the
    /// caller's job: pass one owner's snapshot when serving a user.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::DegenerateBudget` if the budget's limit is not
    /// positive.
    pub fn compute_progress(
        budget: &Budget,
        now: DateTime<Utc>,
        transactions: &[Transaction],
    ) -> Result<ProgressReport, BudgetError> {
        let window = resolve_window(budget.anchor_start, budget.period, now);
        let matching = filter_transactions(transactions, budget.owner_id, budget.category, window);
        let progress = aggregate(budget.limit_amount, matching.iter().map(|t| t.amount))?;

        Ok(ProgressReport {
            budget_id: budget.id,
            window,
            spent: progress.spent,
            remaining: progress.remaining,
            progress_percent: progress.progress_percent,
            is_over_budget: progress.is_over_budget,
        })
    }

    /// Computes progress for many budgets against one snapshot in parallel.
    ///
    /// Output order matches `budgets`; a failing budget does not affect the
    /// others.
    #[must_use]
    pub fn compute_progress_batch(
        budgets: &[Budget],
        now: DateTime<Utc>,
        transactions: &[Transaction],
    ) -> Vec<BudgetProgressOutcome> {
        budgets
            .par_iter()
            .map(|budget| BudgetProgressOutcome {
                budget_id: budget.id,
                result: Self::compute_progress(budget, now, transactions),
            })
            .collect()
    }

    /// Validates `input` and builds a new budget with a fresh ID.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::NonPositiveLimit` if the limit is not positive.
    /// Returns `BudgetError::IncomeCategory` if the category is `Income`.
    pub fn create_budget(
        input: CreateBudgetInput,
        created_at: DateTime<Utc>,
    ) -> Result<Budget, BudgetError> {
        if input.limit_amount <= Decimal::ZERO {
            return Err(BudgetError::NonPositiveLimit(input.limit_amount));
        }

        if input.category == Category::Income {
            return Err(BudgetError::IncomeCategory);
        }

        Ok(Budget {
            id: BudgetId::new(),
            owner_id: input.owner_id,
            category: input.category,
            limit_amount: input.limit_amount,
            period: input.period,
            anchor_start: input.anchor_start,
            created_at,
        })
    }
}
