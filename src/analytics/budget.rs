use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::models::PeriodKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DailyBudget {
    /// No income recorded this month, so there is nothing to budget
    /// against. Rendered as a zero allowance.
    NoBasis,
    /// Spending already met or passed income. An alert state, not an
    /// allowance of zero.
    OverBudget { deficit: i64 },
    /// Suggested spend per remaining day of the month, today included.
    Allowance(Decimal),
}

/// Project a daily allowance for the rest of `today`'s month from the
/// month's totals. Assumes the income recurs monthly; this is a
/// heuristic for pacing, not an accounting statement.
pub(crate) fn project_daily_budget(income: i64, expense: i64, today: NaiveDate) -> DailyBudget {
    if income == 0 {
        return DailyBudget::NoBasis;
    }

    let remaining = income - expense;
    if remaining <= 0 {
        return DailyBudget::OverBudget {
            deficit: -remaining,
        };
    }

    let remaining_days = i64::from(days_in_month(today)) - i64::from(today.day()) + 1;
    if remaining_days <= 0 {
        // Past the divisor guard the whole remainder is today's to spend.
        return DailyBudget::Allowance(Decimal::from(remaining));
    }

    DailyBudget::Allowance(Decimal::from(remaining) / Decimal::from(remaining_days))
}

/// Projection scoped to the month in view. The allowance is only
/// defined for the month `today` falls in; any other view, the
/// all-time one included, gets `None`.
pub(crate) fn project_for_view(
    viewed: Option<PeriodKey>,
    income: i64,
    expense: i64,
    today: NaiveDate,
) -> Option<DailyBudget> {
    if viewed != Some(PeriodKey::for_date(today)) {
        return None;
    }
    Some(project_daily_budget(income, expense, today))
}

pub(crate) fn days_in_month(date: NaiveDate) -> u32 {
    // Day before the first of the following month.
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(30)
}
