//! Snapshot file loading.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use tracing::info;

use blinkbank_core::budget::Budget;
use blinkbank_core::transaction::Transaction;
use blinkbank_shared::types::UserId;

/// Budgets and transactions exported from the document store.
#[derive(Debug, Default, Deserialize)]
pub struct Snapshot {
    /// Budget records.
    #[serde(default)]
    pub budgets: Vec<Budget>,
    /// Transaction records, any owner.
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl Snapshot {
    /// Reads and parses a snapshot file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot: {}", path.display()))?;
        let snapshot = Self::parse(&raw)
            .with_context(|| format!("Invalid snapshot: {}", path.display()))?;

        info!(
            path = %path.display(),
            budgets = snapshot.budgets.len(),
            transactions = snapshot.transactions.len(),
            "Snapshot loaded"
        );
        Ok(snapshot)
    }

    /// Parses snapshot JSON.
    pub fn parse(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    /// One owner's transactions. Everything handed to the engine goes
    /// through here so no other tenant's records reach it.
    pub fn transactions_for(&self, owner_id: UserId) -> Vec<Transaction> {
        self.transactions
            .iter()
            .filter(|t| t.owner_id == owner_id)
            .cloned()
            .collect()
    }
}
