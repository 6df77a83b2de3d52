//! Banking simulator data types.

use blinkbank_shared::types::{BankAccountId, UserId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A simulated bank account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccount {
    /// Account ID.
    pub id: BankAccountId,
    /// Owning user.
    pub owner_id: UserId,
    /// Account holder display name.
    pub name: String,
    /// Current balance, never negative.
    pub balance: Decimal,
    /// When the account was opened.
    pub opened_at: DateTime<Utc>,
}

/// Direction of a balance change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BankOperation {
    /// Adds to the balance.
    Deposit,
    /// Subtracts from the balance.
    Withdrawal,
}

/// A completed balance change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankTransaction {
    /// Account changed.
    pub account_id: BankAccountId,
    /// Deposit or withdrawal.
    pub operation: BankOperation,
    /// Positive amount moved.
    pub amount: Decimal,
    /// Balance after the change.
    pub balance_after: Decimal,
    /// Free-text note supplied with the operation.
    #[serde(default)]
    pub description: String,
    /// When the change was applied.
    pub at: DateTime<Utc>,
}
