//! Deterministic rule-based insight generation.

use blinkbank_shared::types::{Currency, Money};
use rust_decimal::Decimal;

use super::types::{Insight, InsightGenerator, InsightKind};
use crate::analytics::{group_expenses_by_category, savings_rate, total_by_kind};
use crate::transaction::{Transaction, TransactionKind};

/// An expense this many times the average expense is flagged.
const ANOMALY_FACTOR: Decimal = Decimal::from_parts(3, 0, 0, false, 0);

/// Fewer expenses than this are too few to call one of them unusual.
const ANOMALY_MIN_EXPENSES: usize = 3;

/// Insight rules over totals, category breakdown and savings rate.
#[derive(Debug, Clone)]
pub struct RuleBasedInsights {
    savings_target: Decimal,
    currency: Currency,
}

impl RuleBasedInsights {
    /// Creates a generator that recommends saving when the savings rate is
    /// below `savings_target` percent. Amounts are formatted in `currency`.
    #[must_use]
    pub const fn new(savings_target: Decimal, currency: Currency) -> Self {
        Self {
            savings_target,
            currency,
        }
    }

    fn money(&self, amount: Decimal) -> Money {
        Money::new(amount, self.currency)
    }

    fn top_spending_category(&self, transactions: &[Transaction]) -> Option<Insight> {
        let mut top = None;
        for (category, total) in group_expenses_by_category(transactions) {
            if top.is_none_or(|(_, best)| total > best) {
                top = Some((category, total));
            }
        }

        top.map(|(category, total)| Insight {
            kind: InsightKind::Spending,
            title: "Top Spending Category".to_string(),
            description: format!(
                "Your highest spending category is {category} at {}.",
                self.money(total)
            ),
        })
    }

    fn unusual_expense(&self, transactions: &[Transaction]) -> Option<Insight> {
        let expenses: Vec<&Transaction> = transactions.iter().filter(|t| t.is_expense()).collect();
        if expenses.len() < ANOMALY_MIN_EXPENSES {
            return None;
        }

        let total = expenses
            .iter()
            .map(|t| t.amount)
            .fold(Decimal::ZERO, Decimal::saturating_add);
        let average = total.checked_div(Decimal::from(expenses.len()))?;
        let largest = expenses.iter().max_by_key(|t| t.amount)?;
        // No representable amount exceeds an overflowing threshold.
        let threshold = average.checked_mul(ANOMALY_FACTOR)?;

        (largest.amount > threshold).then(|| Insight {
            kind: InsightKind::Anomaly,
            title: "Unusual Expense".to_string(),
            description: format!(
                "A {} {} expense on {} is more than three times your average expense of {}.",
                self.money(largest.amount),
                largest.category,
                largest.occurred_on,
                self.money(average)
            ),
        })
    }

    fn savings(&self, transactions: &[Transaction]) -> Option<Insight> {
        let income = total_by_kind(transactions, TransactionKind::Income);
        let expenses = total_by_kind(transactions, TransactionKind::Expense);

        if income.is_zero() {
            return (expenses > Decimal::ZERO).then(|| Insight {
                kind: InsightKind::Income,
                title: "No Income Recorded".to_string(),
                description: format!(
                    "No income was recorded against {} of expenses.",
                    self.money(expenses)
                ),
            });
        }

        let rate = savings_rate(income, expenses);
        let insight = if rate < self.savings_target {
            Insight {
                kind: InsightKind::Recommendation,
                title: "Savings Opportunity".to_string(),
                description: format!(
                    "You kept {rate}% of your income. Consider setting aside {}% for long-term savings goals.",
                    self.savings_target
                ),
            }
        } else {
            Insight {
                kind: InsightKind::Saving,
                title: "On Track".to_string(),
                description: format!(
                    "You kept {rate}% of your income, meeting your {}% savings target.",
                    self.savings_target
                ),
            }
        };
        Some(insight)
    }
}

impl InsightGenerator for RuleBasedInsights {
    fn generate(&self, transactions: &[Transaction]) -> Vec<Insight> {
        [
            self.top_spending_category(transactions),
            self.unusual_expense(transactions),
            self.savings(transactions),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}
