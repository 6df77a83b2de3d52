//! Budget data types.

use blinkbank_shared::types::{BudgetId, UserId};
use chrono::{DateTime, Days, Months, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::BudgetError;
use crate::transaction::Category;

/// Length of one budget cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum BudgetPeriod {
    /// One calendar day.
    Daily,
    /// Seven days.
    Weekly,
    /// One calendar month.
    Monthly,
    /// One calendar year.
    Yearly,
}

impl BudgetPeriod {
    /// Lowercase name used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    /// Advances `date` by exactly one period.
    ///
    /// Month and year steps keep the day of month, clamping to the last day
    /// of a shorter target month (Jan 31 + 1 month = Feb 29/28, Feb 29 + 1
    /// year = Feb 28). Saturates at `NaiveDate::MAX`.
    #[must_use]
    pub fn advance(self, date: NaiveDate) -> NaiveDate {
        let next = match self {
            Self::Daily => date.checked_add_days(Days::new(1)),
            Self::Weekly => date.checked_add_days(Days::new(7)),
            Self::Monthly => date.checked_add_months(Months::new(1)),
            Self::Yearly => date.checked_add_months(Months::new(12)),
        };
        next.unwrap_or(NaiveDate::MAX)
    }
}

impl std::fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BudgetPeriod {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            _ => Err(BudgetError::InvalidPeriodKind(s.to_string())),
        }
    }
}

impl TryFrom<String> for BudgetPeriod {
    type Error = BudgetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BudgetPeriod> for &'static str {
    fn from(period: BudgetPeriod) -> Self {
        period.as_str()
    }
}

/// A budget record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    /// Budget ID.
    pub id: BudgetId,
    /// Owning user.
    pub owner_id: UserId,
    /// Category the limit applies to. Never `Income`.
    pub category: Category,
    /// Spending ceiling for one period.
    pub limit_amount: Decimal,
    /// Cycle length.
    pub period: BudgetPeriod,
    /// First day of the first cycle.
    pub anchor_start: NaiveDate,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Inclusive date range `[start, end]` a budget is currently measured over.
///
/// `end < start` means the budget has not started yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetWindow {
    /// First day of the window.
    pub start: NaiveDate,
    /// Last day of the window.
    pub end: NaiveDate,
}

impl BudgetWindow {
    /// Returns true if the window ends before it starts.
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.end < self.start
    }

    /// Returns true if `date` falls inside the window, both ends included.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Spend-vs-limit status for one budget window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressReport {
    /// Budget the report was computed for.
    pub budget_id: BudgetId,
    /// Window the spend was measured over.
    pub window: BudgetWindow,
    /// Sum of matching expenses.
    pub spent: Decimal,
    /// Amount left before the limit, floored at zero.
    pub remaining: Decimal,
    /// Spent as a percentage of the limit, rounded and capped to 0..=100.
    pub progress_percent: u8,
    /// True only when spent strictly exceeds the limit.
    pub is_over_budget: bool,
}

/// Result of evaluating one budget in a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetProgressOutcome {
    /// Budget evaluated.
    pub budget_id: BudgetId,
    /// Report, or why it could not be produced.
    pub result: Result<ProgressReport, BudgetError>,
}

/// Input for creating a new budget.
#[derive(Debug, Clone)]
pub struct CreateBudgetInput {
    /// Owning user.
    pub owner_id: UserId,
    /// Category to constrain.
    pub category: Category,
    /// Spending ceiling.
    pub limit_amount: Decimal,
    /// Cycle length.
    pub period: BudgetPeriod,
    /// First day of the first cycle.
    pub anchor_start: NaiveDate,
}
