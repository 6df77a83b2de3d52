//! Insight data types.

use serde::{Deserialize, Serialize};

use crate::transaction::Transaction;

/// What an insight is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    /// Where money goes.
    Spending,
    /// How much is being kept.
    Saving,
    /// Money coming in.
    Income,
    /// Something out of the ordinary.
    Anomaly,
    /// Suggested action.
    Recommendation,
}

/// A single human-readable insight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    /// Insight kind.
    #[serde(rename = "type")]
    pub kind: InsightKind,
    /// Short headline.
    pub title: String,
    /// One-sentence explanation.
    pub description: String,
}

/// Produces insights from one user's transactions.
pub trait InsightGenerator: Send + Sync {
    /// Generates insights; an empty snapshot yields no insights.
    fn generate(&self, transactions: &[Transaction]) -> Vec<Insight>;
}
