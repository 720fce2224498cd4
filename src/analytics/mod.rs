mod budget;
mod chart;
mod filter;
mod insight;
mod totals;

pub(crate) use budget::{days_in_month, project_daily_budget, project_for_view, DailyBudget};
pub(crate) use chart::{build_chart_series, ChartSeries};
pub(crate) use filter::{filter_by_period, sort_for_display};
pub(crate) use insight::{select_insight, Insight};
pub(crate) use totals::{aggregate, expense_totals, Totals};
