//! Transaction data types.

use blinkbank_shared::types::{TransactionId, UserId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::TransactionError;

/// Direction of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in.
    Income,
    /// Money going out. Only expenses count toward budgets.
    Expense,
}

/// Spending category.
///
/// Serialized with its display label (e.g. `"Food & Dining"`). Variant order
/// is the canonical listing order and drives `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Category {
    /// Rent, mortgage, and home costs.
    Housing,
    /// Commuting, fuel, and vehicles.
    Transportation,
    /// Groceries and restaurants.
    FoodAndDining,
    /// Power, water, internet.
    Utilities,
    /// Insurance premiums.
    Insurance,
    /// Medical costs.
    Healthcare,
    /// Transfers to savings and investment accounts.
    SavingsAndInvestments,
    /// Discretionary personal purchases.
    PersonalSpending,
    /// Leisure.
    Entertainment,
    /// Tuition, courses, books.
    Education,
    /// Gifts and charitable donations.
    GiftsAndDonations,
    /// Trips and lodging.
    Travel,
    /// Business expenses.
    Business,
    /// Earnings. Budgets never target this category.
    Income,
    /// Anything else.
    Other,
}

impl Category {
    /// Every category in listing order.
    pub const ALL: [Self; 15] = [
        Self::Housing,
        Self::Transportation,
        Self::FoodAndDining,
        Self::Utilities,
        Self::Insurance,
        Self::Healthcare,
        Self::SavingsAndInvestments,
        Self::PersonalSpending,
        Self::Entertainment,
        Self::Education,
        Self::GiftsAndDonations,
        Self::Travel,
        Self::Business,
        Self::Income,
        Self::Other,
    ];

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Housing => "Housing",
            Self::Transportation => "Transportation",
            Self::FoodAndDining => "Food & Dining",
            Self::Utilities => "Utilities",
            Self::Insurance => "Insurance",
            Self::Healthcare => "Healthcare",
            Self::SavingsAndInvestments => "Savings & Investments",
            Self::PersonalSpending => "Personal Spending",
            Self::Entertainment => "Entertainment",
            Self::Education => "Education",
            Self::GiftsAndDonations => "Gifts & Donations",
            Self::Travel => "Travel",
            Self::Business => "Business",
            Self::Income => "Income",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = TransactionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| TransactionError::UnknownCategory(s.to_string()))
    }
}

impl TryFrom<String> for Category {
    type Error = TransactionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Category> for &'static str {
    fn from(category: Category) -> Self {
        category.label()
    }
}

/// A transaction record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction ID.
    pub id: TransactionId,
    /// Owning user.
    pub owner_id: UserId,
    /// Positive amount.
    pub amount: Decimal,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Spending category.
    pub category: Category,
    /// Income or expense.
    pub kind: TransactionKind,
    /// Calendar date the transaction occurred on.
    pub occurred_on: NaiveDate,
}

impl Transaction {
    /// Returns true for expense transactions.
    #[must_use]
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    #[test]
    fn test_category_labels_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_str(category.label()).unwrap(), category);
        }
    }

    #[test]
    fn test_category_parse_is_case_insensitive() {
        assert_eq!(
            Category::from_str("food & dining").unwrap(),
            Category::FoodAndDining
        );
        assert_eq!(Category::from_str(" TRAVEL ").unwrap(), Category::Travel);
    }

    #[test]
    fn test_unknown_category_rejected() {
        assert_eq!(
            Category::from_str("Groceries"),
            Err(TransactionError::UnknownCategory("Groceries".to_string()))
        );
    }

    #[test]
    fn test_transaction_json_uses_labels() {
        let json = r#"{
            "id": "0190a5f2-0000-7000-8000-000000000001",
            "owner_id": "0190a5f2-0000-7000-8000-000000000002",
            "amount": "12.50",
            "category": "Food & Dining",
            "kind": "expense",
            "occurred_on": "2024-01-05"
        }"#;

        let transaction: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(transaction.amount, dec!(12.50));
        assert_eq!(transaction.category, Category::FoodAndDining);
        assert!(transaction.is_expense());
        assert!(transaction.description.is_empty());

        let back = serde_json::to_value(&transaction).unwrap();
        assert_eq!(back["category"], "Food & Dining");
        assert_eq!(back["kind"], "expense");
    }

    #[test]
    fn test_transaction_json_rejects_unknown_category() {
        let json = r#"{
            "id": "0190a5f2-0000-7000-8000-000000000001",
            "owner_id": "0190a5f2-0000-7000-8000-000000000002",
            "amount": "1",
            "category": "Snacks",
            "kind": "expense",
            "occurred_on": "2024-01-05"
        }"#;

        let err = serde_json::from_str::<Transaction>(json).unwrap_err();
        assert!(err.to_string().contains("Unknown category: Snacks"));
    }
}
