use std::collections::BTreeMap;

use chrono::Datelike;

use crate::models::{Entry, ExpenseCategory};

use super::totals::expense_totals;

#[derive(Debug, Clone, Default)]
pub(crate) struct ChartSeries {
    /// Expense totals per category, largest first.
    pub(crate) category_distribution: Vec<(ExpenseCategory, i64)>,
    /// `(day-of-month, income - expense)` for each day that has at least
    /// one entry, ascending by day. Days without entries are absent, not
    /// zero. When the input spans several months the day keys alias
    /// across them; callers chart one month at a time.
    pub(crate) daily_net_flow: Vec<(u32, i64)>,
}

pub(crate) fn build_chart_series(entries: &[Entry]) -> ChartSeries {
    let mut distribution: Vec<(ExpenseCategory, i64)> =
        expense_totals(entries).into_iter().collect();
    distribution.sort_by(|a, b| b.1.cmp(&a.1));

    let mut by_day: BTreeMap<u32, i64> = BTreeMap::new();
    for entry in entries {
        *by_day.entry(entry.date.day()).or_insert(0) += entry.signed_amount();
    }

    ChartSeries {
        category_distribution: distribution,
        daily_net_flow: by_day.into_iter().collect(),
    }
}
