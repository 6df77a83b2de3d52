//! Aggregations over a user's transactions.

use std::collections::BTreeMap;

use blinkbank_shared::types::UserId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::transaction::{Category, Transaction, TransactionKind};

/// Income minus expenses. Saturates at the `Decimal` bounds.
#[must_use]
pub fn calculate_balance(transactions: &[Transaction]) -> Decimal {
    transactions.iter().fold(Decimal::ZERO, |total, t| match t.kind {
        TransactionKind::Income => total.saturating_add(t.amount),
        TransactionKind::Expense => total.saturating_sub(t.amount),
    })
}

/// Sum of the amounts of one kind.
#[must_use]
pub fn total_by_kind(transactions: &[Transaction], kind: TransactionKind) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.amount)
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Expense totals per category, in category listing order.
#[must_use]
pub fn group_expenses_by_category(transactions: &[Transaction]) -> BTreeMap<Category, Decimal> {
    let mut groups = BTreeMap::new();
    for t in transactions.iter().filter(|t| t.is_expense()) {
        let total = groups.entry(t.category).or_insert(Decimal::ZERO);
        *total = total.saturating_add(t.amount);
    }
    groups
}

/// Share of income not spent, as a percentage rounded to 2 dp with trailing
/// zeros dropped.
///
/// Zero when there is no income. Negative when expenses exceed income.
/// Saturates at the `Decimal` bounds when the ratio is not representable.
#[must_use]
pub fn savings_rate(income: Decimal, expenses: Decimal) -> Decimal {
    if income.is_zero() {
        return Decimal::ZERO;
    }
    let kept = income.saturating_sub(expenses);
    kept.checked_div(income)
        .and_then(|r| r.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(if kept.is_sign_negative() == income.is_sign_negative() {
            Decimal::MAX
        } else {
            Decimal::MIN
        })
        .round_dp(2)
        .normalize()
}

/// Running totals for one user, updated as transactions arrive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialSummary {
    /// Owning user.
    pub owner_id: UserId,
    /// Sum of income.
    pub total_income: Decimal,
    /// Sum of expenses.
    pub total_expenses: Decimal,
    /// `total_income - total_expenses`.
    pub balance: Decimal,
    /// When the summary last changed.
    pub last_updated: Option<DateTime<Utc>>,
}

impl FinancialSummary {
    /// Creates an empty summary.
    #[must_use]
    pub fn new(owner_id: UserId) -> Self {
        Self {
            owner_id,
            total_income: Decimal::ZERO,
            total_expenses: Decimal::ZERO,
            balance: Decimal::ZERO,
            last_updated: None,
        }
    }

    /// Folds one new transaction into the totals.
    ///
    /// Transactions of other owners are ignored and leave `last_updated`
    /// untouched.
    pub fn apply(&mut self, transaction: &Transaction, at: DateTime<Utc>) {
        if transaction.owner_id != self.owner_id {
            return;
        }

        match transaction.kind {
            TransactionKind::Income => {
                self.total_income = self.total_income.saturating_add(transaction.amount);
                self.balance = self.balance.saturating_add(transaction.amount);
            }
            TransactionKind::Expense => {
                self.total_expenses = self.total_expenses.saturating_add(transaction.amount);
                self.balance = self.balance.saturating_sub(transaction.amount);
            }
        }
        self.last_updated = Some(at);
    }

    /// Builds a summary from scratch over `transactions`.
    #[must_use]
    pub fn from_transactions(
        owner_id: UserId,
        transactions: &[Transaction],
        at: DateTime<Utc>,
    ) -> Self {
        let mut summary = Self::new(owner_id);
        for t in transactions {
            summary.apply(t, at);
        }
        summary
    }

    /// Savings rate implied by the totals.
    #[must_use]
    pub fn savings_rate(&self) -> Decimal {
        savings_rate(self.total_income, self.total_expenses)
    }
}
