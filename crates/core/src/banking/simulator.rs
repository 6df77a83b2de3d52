//! In-memory bank with atomic per-account balance updates.

use blinkbank_shared::types::{BankAccountId, UserId};
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use rust_decimal::Decimal;

use super::error::BankingError;
use super::types::{BankAccount, BankOperation, BankTransaction};

const PIN_LEN: usize = 4;

#[derive(Debug)]
struct AccountState {
    account: BankAccount,
    pin: String,
    history: Vec<BankTransaction>,
}

/// Simulated bank.
///
/// Each balance change is a read-modify-write performed while holding the
/// account's map entry, so concurrent operations on one account serialize.
#[derive(Debug, Default)]
pub struct SimulatedBank {
    accounts: DashMap<BankAccountId, AccountState>,
}

impl SimulatedBank {
    /// Creates an empty bank.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a zero-balance account protected by `pin` and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns `BankingError::InvalidPinFormat` unless `pin` is exactly four
    /// ASCII digits.
    pub fn open_account(
        &self,
        owner_id: UserId,
        name: impl Into<String>,
        pin: &str,
        at: DateTime<Utc>,
    ) -> Result<BankAccountId, BankingError> {
        if pin.len() != PIN_LEN || !pin.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BankingError::InvalidPinFormat);
        }

        let id = BankAccountId::new();
        self.accounts.insert(
            id,
            AccountState {
                account: BankAccount {
                    id,
                    owner_id,
                    name: name.into(),
                    balance: Decimal::ZERO,
                    opened_at: at,
                },
                pin: pin.to_string(),
                history: Vec::new(),
            },
        );
        Ok(id)
    }

    /// Adds `amount` to the account.
    ///
    /// # Errors
    ///
    /// Returns `BankingError::NonPositiveAmount` for a zero or negative
    /// amount, `AccountNotFound` for an unknown account, `InvalidPin` when
    /// `pin` does not match and `BalanceOverflow` if the balance cannot
    /// hold the sum.
    pub fn deposit(
        &self,
        id: BankAccountId,
        pin: &str,
        amount: Decimal,
        description: &str,
        at: DateTime<Utc>,
    ) -> Result<BankTransaction, BankingError> {
        self.apply(id, pin, BankOperation::Deposit, amount, description, at)
    }

    /// Removes `amount` from the account.
    ///
    /// # Errors
    ///
    /// Same as [`Self::deposit`], plus `BankingError::InsufficientFunds` if
    /// the balance would go negative; the balance is left unchanged.
    pub fn withdraw(
        &self,
        id: BankAccountId,
        pin: &str,
        amount: Decimal,
        description: &str,
        at: DateTime<Utc>,
    ) -> Result<BankTransaction, BankingError> {
        self.apply(id, pin, BankOperation::Withdrawal, amount, description, at)
    }

    fn apply(
        &self,
        id: BankAccountId,
        pin: &str,
        operation: BankOperation,
        amount: Decimal,
        description: &str,
        at: DateTime<Utc>,
    ) -> Result<BankTransaction, BankingError> {
        if amount <= Decimal::ZERO {
            return Err(BankingError::NonPositiveAmount(amount));
        }

        let mut state = self
            .accounts
            .get_mut(&id)
            .ok_or(BankingError::AccountNotFound(id))?;
        if state.pin != pin {
            return Err(BankingError::InvalidPin);
        }

        let balance = state.account.balance;
        let balance_after = match operation {
            BankOperation::Deposit => balance
                .checked_add(amount)
                .ok_or(BankingError::BalanceOverflow)?,
            BankOperation::Withdrawal => {
                if amount > balance {
                    return Err(BankingError::InsufficientFunds {
                        balance,
                        requested: amount,
                    });
                }
                balance - amount
            }
        };

        let entry = BankTransaction {
            account_id: id,
            operation,
            amount,
            balance_after,
            description: description.to_string(),
            at,
        };
        state.account.balance = balance_after;
        state.history.push(entry.clone());
        Ok(entry)
    }

    /// Returns a copy of the account.
    #[must_use]
    pub fn account(&self, id: BankAccountId) -> Option<BankAccount> {
        self.accounts.get(&id).map(|state| state.account.clone())
    }

    /// Current balance.
    pub fn balance(&self, id: BankAccountId) -> Result<Decimal, BankingError> {
        self.accounts
            .get(&id)
            .map(|state| state.account.balance)
            .ok_or(BankingError::AccountNotFound(id))
    }

    /// Applied changes, oldest first.
    pub fn history(&self, id: BankAccountId) -> Result<Vec<BankTransaction>, BankingError> {
        self.accounts
            .get(&id)
            .map(|state| state.history.clone())
            .ok_or(BankingError::AccountNotFound(id))
    }

    /// Accounts belonging to `owner_id`, oldest first.
    #[must_use]
    pub fn accounts_for(&self, owner_id: UserId) -> Vec<BankAccount> {
        let mut accounts: Vec<BankAccount> = self
            .accounts
            .iter()
            .filter(|state| state.account.owner_id == owner_id)
            .map(|state| state.account.clone())
            .collect();
        accounts.sort_by_key(|a| (a.opened_at, a.id));
        accounts
    }
}
