use std::collections::BTreeMap;

use crate::models::{Category, Entry, ExpenseCategory};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Totals {
    pub(crate) income: i64,
    pub(crate) expense: i64,
    /// `income - expense`; negative when the month overspent.
    pub(crate) balance: i64,
}

/// Sum a snapshot into monthly totals. Empty input is a valid month and
/// yields all zeros.
pub(crate) fn aggregate(entries: &[Entry]) -> Totals {
    let mut totals = Totals::default();
    for entry in entries {
        match entry.category {
            Category::Income(_) => totals.income += entry.amount,
            Category::Expense(_) => totals.expense += entry.amount,
        }
    }
    totals.balance = totals.income - totals.expense;
    totals
}

/// Per-category sums over expense entries only; income entries do not
/// contribute. Categories with no spending are absent from the map.
pub(crate) fn expense_totals(entries: &[Entry]) -> BTreeMap<ExpenseCategory, i64> {
    let mut totals = BTreeMap::new();
    for entry in entries {
        if let Category::Expense(category) = entry.category {
            *totals.entry(category).or_insert(0) += entry.amount;
        }
    }
    totals
}
