use chrono::NaiveDate;

use super::{Category, EntryKind};

/// One ledger record. `amount` is a strictly positive whole number of
/// currency units; the sign in aggregations comes from the category's
/// kind, never from the stored value.
#[derive(Debug, Clone)]
pub struct Entry {
    pub id: Option<i64>,
    pub text: String,
    pub amount: i64,
    pub category: Category,
    pub date: NaiveDate,
    pub created_at: String,
}

impl Entry {
    pub fn new(text: String, amount: i64, category: Category, date: NaiveDate) -> Self {
        Self {
            id: None,
            text,
            amount,
            category,
            date,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn kind(&self) -> EntryKind {
        self.category.kind()
    }

    pub fn is_income(&self) -> bool {
        matches!(self.category, Category::Income(_))
    }

    pub fn is_expense(&self) -> bool {
        matches!(self.category, Category::Expense(_))
    }

    /// Amount with the sign its kind contributes to a balance.
    pub fn signed_amount(&self) -> i64 {
        if self.is_income() {
            self.amount
        } else {
            -self.amount
        }
    }
}
