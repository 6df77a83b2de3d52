//! Selection of the transactions that count toward a budget window.

use blinkbank_shared::types::UserId;

use super::types::BudgetWindow;
use crate::transaction::{Category, Transaction, TransactionKind};

/// Returns true if `transaction` counts toward a budget for `owner_id` and
/// `category` over `window`.
#[must_use]
pub fn counts_toward(
    transaction: &Transaction,
    owner_id: UserId,
    category: Category,
    window: BudgetWindow,
) -> bool {
    transaction.owner_id == owner_id
        && transaction.kind == TransactionKind::Expense
        && transaction.category == category
        && window.contains(transaction.occurred_on)
}

/// Selects matching transactions, preserving input order and duplicates.
///
/// An inverted window selects nothing.
#[must_use]
pub fn filter_transactions(
    transactions: &[Transaction],
    owner_id: UserId,
    category: Category,
    window: BudgetWindow,
) -> Vec<&Transaction> {
    transactions
        .iter()
        .filter(|t| counts_toward(t, owner_id, category, window))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use blinkbank_shared::types::TransactionId;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(owner_id: UserId, amount: Decimal, occurred_on: NaiveDate) -> Transaction {
        Transaction {
            id: TransactionId::new(),
            owner_id,
            amount,
            description: String::new(),
            category: Category::FoodAndDining,
            kind: TransactionKind::Expense,
            occurred_on,
        }
    }

    fn january() -> BudgetWindow {
        BudgetWindow {
            start: date(2024, 1, 1),
            end: date(2024, 1, 31),
        }
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        let owner = UserId::new();
        let txs = vec![
            expense(owner, dec!(1), date(2023, 12, 31)),
            expense(owner, dec!(2), date(2024, 1, 1)),
            expense(owner, dec!(3), date(2024, 1, 31)),
            expense(owner, dec!(4), date(2024, 2, 1)),
        ];

        let matched = filter_transactions(&txs, owner, Category::FoodAndDining, january());
        let amounts: Vec<Decimal> = matched.iter().map(|t| t.amount).collect();

        assert_eq!(amounts, vec![dec!(2), dec!(3)]);
    }

    #[test]
    fn test_excludes_other_owner_category_and_income() {
        let owner = UserId::new();
        let mut other_owner = expense(UserId::new(), dec!(10), date(2024, 1, 5));
        other_owner.description = "someone else".into();
        let mut other_category = expense(owner, dec!(20), date(2024, 1, 5));
        other_category.category = Category::Travel;
        let mut income = expense(owner, dec!(30), date(2024, 1, 5));
        income.kind = TransactionKind::Income;
        let keep = expense(owner, dec!(40), date(2024, 1, 5));

        let txs = vec![other_owner, other_category, income, keep.clone()];
        let matched = filter_transactions(&txs, owner, Category::FoodAndDining, january());

        assert_eq!(matched, vec![&keep]);
    }

    #[test]
    fn test_duplicates_preserved() {
        let owner = UserId::new();
        let tx = expense(owner, dec!(5), date(2024, 1, 10));
        let txs = vec![tx.clone(), tx];

        let matched = filter_transactions(&txs, owner, Category::FoodAndDining, january());

        assert_eq!(matched.len(), 2);
    }

    #[test]
    fn test_inverted_window_matches_nothing() {
        let owner = UserId::new();
        let txs = vec![
            expense(owner, dec!(5), date(2024, 1, 1)),
            expense(owner, dec!(5), date(2023, 12, 20)),
        ];
        let inverted = BudgetWindow {
            start: date(2024, 1, 1),
            end: date(2023, 12, 20),
        };

        assert!(filter_transactions(&txs, owner, Category::FoodAndDining, inverted).is_empty());
    }
}
