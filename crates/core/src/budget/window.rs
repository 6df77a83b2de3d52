//! Period window resolution.

use chrono::{DateTime, NaiveDate, Utc};

use super::types::{BudgetPeriod, BudgetWindow};

/// Resolves the window a budget is currently tracking.
///
/// The window always starts at `anchor_start`; it is never rolled forward
/// across elapsed cycles. It ends at the first cycle boundary or at the UTC
/// date of `now`, whichever is earlier. When `now` precedes the anchor the
/// window comes back inverted.
#[must_use]
pub fn resolve_window(
    anchor_start: NaiveDate,
    period: BudgetPeriod,
    now: DateTime<Utc>,
) -> BudgetWindow {
    let cycle_end = period.advance(anchor_start);
    BudgetWindow {
        start: anchor_start,
        end: cycle_end.min(now.date_naive()),
    }
}
