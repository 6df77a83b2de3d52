//! Subcommand implementations. Each returns a serializable report.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};

use blinkbank_core::analytics::{FinancialSummary, group_expenses_by_category};
use blinkbank_core::budget::{
    Budget, BudgetError, BudgetPeriod, BudgetProgressOutcome, BudgetService, ProgressReport,
};
use blinkbank_core::insights::{Insight, InsightGenerator, RuleBasedInsights};
use blinkbank_core::transaction::Category;
use blinkbank_shared::AppError;
use blinkbank_shared::config::ReportConfig;
use blinkbank_shared::types::{BudgetId, Money, UserId};

use crate::snapshot::Snapshot;

/// Machine-readable failure attached to a budget entry.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Stable error code.
    pub code: &'static str,
    /// Human-readable message.
    pub message: String,
}

impl From<AppError> for ErrorBody {
    fn from(err: AppError) -> Self {
        Self {
            code: err.error_code(),
            message: err.to_string(),
        }
    }
}

/// Progress output for one budget.
#[derive(Debug, Serialize)]
pub struct ProgressEntry {
    /// Budget evaluated.
    pub budget_id: BudgetId,
    /// Owning user.
    pub owner_id: UserId,
    /// Budget category.
    pub category: Category,
    /// Budget period.
    pub period: BudgetPeriod,
    /// Budget limit.
    pub limit_amount: Decimal,
    /// Report, when it could be computed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ProgressReport>,
    /// Failure, when it could not.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

/// Evaluates every budget (optionally one owner's) as of `now`.
///
/// Budgets are evaluated per owner against that owner's transactions only.
/// Output follows snapshot order.
pub fn progress(
    snapshot: &Snapshot,
    now: DateTime<Utc>,
    user: Option<UserId>,
) -> Vec<ProgressEntry> {
    let selected: Vec<&Budget> = snapshot
        .budgets
        .iter()
        .filter(|b| user.is_none_or(|u| b.owner_id == u))
        .collect();

    let mut by_owner: BTreeMap<UserId, Vec<Budget>> = BTreeMap::new();
    for budget in &selected {
        by_owner
            .entry(budget.owner_id)
            .or_default()
            .push((*budget).clone());
    }

    let mut outcomes: HashMap<BudgetId, BudgetProgressOutcome> = HashMap::new();
    for (owner_id, budgets) in &by_owner {
        let transactions = snapshot.transactions_for(*owner_id);
        for outcome in BudgetService::compute_progress_batch(budgets, now, &transactions) {
            // Batch output keeps input order, so the first duplicate wins.
            outcomes.entry(outcome.budget_id).or_insert(outcome);
        }
    }

    selected
        .into_iter()
        .map(|budget| {
            let result = outcomes.remove(&budget.id).map(|outcome| outcome.result);
            to_entry(budget, result)
        })
        .collect()
}

fn to_entry(
    budget: &Budget,
    result: Option<Result<ProgressReport, BudgetError>>,
) -> ProgressEntry {
    let (report, error) = match result {
        Some(Ok(report)) => {
            info!(
                budget_id = %budget.id,
                owner_id = %budget.owner_id,
                spent = %report.spent,
                progress_percent = report.progress_percent,
                is_over_budget = report.is_over_budget,
                "Budget progress computed"
            );
            (Some(report), None)
        }
        Some(Err(err)) => {
            warn!(budget_id = %budget.id, error = %err, "Budget progress failed");
            (None, Some(ErrorBody::from(AppError::from(err))))
        }
        // Duplicate budget IDs in the snapshot collapse to one outcome.
        None => {
            let err = AppError::Conflict(format!("Duplicate budget id: {}", budget.id));
            warn!(budget_id = %budget.id, "Duplicate budget in snapshot");
            (None, Some(ErrorBody::from(err)))
        }
    };

    ProgressEntry {
        budget_id: budget.id,
        owner_id: budget.owner_id,
        category: budget.category,
        period: budget.period,
        limit_amount: budget.limit_amount,
        report,
        error,
    }
}

/// Summary output for one user.
#[derive(Debug, Serialize)]
pub struct SummaryOutput {
    /// Running totals.
    pub summary: FinancialSummary,
    /// Percent of income kept.
    pub savings_rate: Decimal,
    /// Expense totals per category.
    pub expenses_by_category: BTreeMap<Category, Decimal>,
    /// Totals formatted in the configured currency.
    pub formatted: FormattedTotals,
}

/// Display strings for the summary totals.
#[derive(Debug, Serialize)]
pub struct FormattedTotals {
    /// Income.
    pub income: String,
    /// Expenses.
    pub expenses: String,
    /// Balance.
    pub balance: String,
}

/// Builds a user's financial summary.
pub fn summary(
    snapshot: &Snapshot,
    user: UserId,
    now: DateTime<Utc>,
    report: &ReportConfig,
) -> SummaryOutput {
    let transactions = snapshot.transactions_for(user);
    let summary = FinancialSummary::from_transactions(user, &transactions, now);
    info!(
        owner_id = %user,
        transactions = transactions.len(),
        balance = %summary.balance,
        "Summary computed"
    );

    let money = |amount| Money::new(amount, report.currency).to_string();
    SummaryOutput {
        savings_rate: summary.savings_rate(),
        expenses_by_category: group_expenses_by_category(&transactions),
        formatted: FormattedTotals {
            income: money(summary.total_income),
            expenses: money(summary.total_expenses),
            balance: money(summary.balance),
        },
        summary,
    }
}

/// Generates insights for one user.
pub fn insights(snapshot: &Snapshot, user: UserId, report: &ReportConfig) -> Vec<Insight> {
    let generator =
        RuleBasedInsights::new(Decimal::from(report.insight_savings_target), report.currency);
    let transactions = snapshot.transactions_for(user);
    let insights = generator.generate(&transactions);
    info!(owner_id = %user, insights = insights.len(), "Insights generated");
    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    const ALICE: &str = "0190a5f2-0000-7000-8000-0000000000a1";
    const BOB: &str = "0190a5f2-0000-7000-8000-0000000000b2";

    fn snapshot() -> Snapshot {
        let raw = format!(
            r#"{{
                "budgets": [
                    {{"id": "0190a5f2-0000-7000-8000-000000000001", "owner_id": "{ALICE}",
                      "category": "Food & Dining", "limit_amount": "200", "period": "monthly",
                      "anchor_start": "2024-01-01", "created_at": "2024-01-01T00:00:00Z"}},
                    {{"id": "0190a5f2-0000-7000-8000-000000000002", "owner_id": "{BOB}",
                      "category": "Food & Dining", "limit_amount": "0", "period": "weekly",
                      "anchor_start": "2024-01-01", "created_at": "2024-01-01T00:00:00Z"}}
                ],
                "transactions": [
                    {{"id": "0190a5f2-0000-7000-8000-000000000101", "owner_id": "{ALICE}",
                      "amount": "2500", "category": "Income", "kind": "income",
                      "occurred_on": "2024-01-01"}},
                    {{"id": "0190a5f2-0000-7000-8000-000000000102", "owner_id": "{ALICE}",
                      "amount": "50", "category": "Food & Dining", "kind": "expense",
                      "occurred_on": "2024-01-05"}},
                    {{"id": "0190a5f2-0000-7000-8000-000000000103", "owner_id": "{ALICE}",
                      "amount": "30", "category": "Food & Dining", "kind": "expense",
                      "occurred_on": "2024-01-10"}},
                    {{"id": "0190a5f2-0000-7000-8000-000000000104", "owner_id": "{BOB}",
                      "amount": "999", "category": "Food & Dining", "kind": "expense",
                      "occurred_on": "2024-01-06"}}
                ]
            }}"#
        );
        Snapshot::parse(&raw).unwrap()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_progress_reports_every_budget_in_order() {
        let entries = progress(&snapshot(), now(), None);

        assert_eq!(entries.len(), 2);
        let report = entries[0].report.as_ref().unwrap();
        assert_eq!(report.spent, dec!(80));
        assert_eq!(report.remaining, dec!(120));
        assert_eq!(report.progress_percent, 40);
        assert!(entries[0].error.is_none());

        let error = entries[1].error.as_ref().unwrap();
        assert_eq!(error.code, "BUSINESS_RULE_VIOLATION");
        assert!(entries[1].report.is_none());
    }

    #[test]
    fn test_progress_filters_by_user() {
        let alice: UserId = ALICE.parse().unwrap();
        let entries = progress(&snapshot(), now(), Some(alice));

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].owner_id, alice);
    }

    #[test]
    fn test_duplicate_budget_id_reported_as_conflict() {
        let mut snap = snapshot();
        let copy = snap.budgets[0].clone();
        snap.budgets.push(copy);

        let entries = progress(&snap, now(), None);

        assert!(entries[0].report.is_some());
        assert_eq!(entries[2].error.as_ref().unwrap().code, "CONFLICT");
    }

    #[test]
    fn test_duplicate_budget_id_keeps_first_budget_figures() {
        let mut snap = snapshot();
        let mut copy = snap.budgets[0].clone();
        copy.limit_amount = dec!(1000);
        snap.budgets.push(copy);

        let entries = progress(&snap, now(), None);

        assert_eq!(entries[0].limit_amount, dec!(200));
        let report = entries[0].report.as_ref().unwrap();
        assert_eq!(report.remaining, dec!(120));
        assert_eq!(report.progress_percent, 40);
        assert_eq!(entries[2].limit_amount, dec!(1000));
        assert!(entries[2].report.is_none());
        assert_eq!(entries[2].error.as_ref().unwrap().code, "CONFLICT");
    }

    #[test]
    fn test_summary_uses_owner_transactions_only() {
        let alice: UserId = ALICE.parse().unwrap();
        let output = summary(&snapshot(), alice, now(), &ReportConfig::default());

        assert_eq!(output.summary.total_income, dec!(2500));
        assert_eq!(output.summary.total_expenses, dec!(80));
        assert_eq!(output.savings_rate, dec!(96.8));
        assert_eq!(output.expenses_by_category[&Category::FoodAndDining], dec!(80));
        assert_eq!(output.formatted.balance, "$2,420.00");
    }

    #[test]
    fn test_insights_for_user() {
        let alice: UserId = ALICE.parse().unwrap();
        let insights = insights(&snapshot(), alice, &ReportConfig::default());

        assert_eq!(insights.len(), 2);
        assert_eq!(
            insights[0].description,
            "Your highest spending category is Food & Dining at $80.00."
        );
    }

    #[test]
    fn test_progress_entry_json_shape() {
        let entries = progress(&snapshot(), now(), None);
        let json = serde_json::to_value(&entries).unwrap();

        assert_eq!(json[0]["report"]["progress_percent"], 40);
        assert!(json[0].get("error").is_none());
        assert_eq!(json[1]["error"]["code"], "BUSINESS_RULE_VIOLATION");
        assert!(json[1].get("report").is_none());
    }
}
