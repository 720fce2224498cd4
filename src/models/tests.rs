#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;

use super::*;

// ── Entry ─────────────────────────────────────────────────────

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn make_expense(amount: i64, category: ExpenseCategory) -> Entry {
    Entry::new(
        "Test".into(),
        amount,
        Category::Expense(category),
        date("2024-05-15"),
    )
}

fn make_income(amount: i64, category: IncomeCategory) -> Entry {
    Entry::new(
        "Test".into(),
        amount,
        Category::Income(category),
        date("2024-05-01"),
    )
}

#[test]
fn test_entry_kind_follows_category() {
    let spent = make_expense(100, ExpenseCategory::Food);
    assert_eq!(spent.kind(), EntryKind::Expense);
    assert!(spent.is_expense());
    assert!(!spent.is_income());

    let earned = make_income(100, IncomeCategory::Salary);
    assert_eq!(earned.kind(), EntryKind::Income);
    assert!(earned.is_income());
    assert!(!earned.is_expense());
}

#[test]
fn test_signed_amount() {
    assert_eq!(make_income(250, IncomeCategory::Bonus).signed_amount(), 250);
    assert_eq!(
        make_expense(250, ExpenseCategory::Bills).signed_amount(),
        -250
    );
}

#[test]
fn test_entry_new_defaults() {
    let entry = make_expense(75, ExpenseCategory::Shopping);
    assert!(entry.id.is_none());
    assert_eq!(entry.amount, 75);
    assert!(!entry.created_at.is_empty());
}

// ── EntryKind ─────────────────────────────────────────────────

#[test]
fn test_entry_kind_parse() {
    assert_eq!(EntryKind::parse("income"), Some(EntryKind::Income));
    assert_eq!(EntryKind::parse("INCOME"), Some(EntryKind::Income));
    assert_eq!(EntryKind::parse("expense"), Some(EntryKind::Expense));
    assert_eq!(EntryKind::parse("out"), Some(EntryKind::Expense));
    assert_eq!(EntryKind::parse("transfer"), None);
}

#[test]
fn test_entry_kind_display() {
    assert_eq!(format!("{}", EntryKind::Income), "Income");
    assert_eq!(format!("{}", EntryKind::Expense), "Expense");
}

// ── ExpenseCategory ───────────────────────────────────────────

#[test]
fn test_expense_category_parse() {
    assert_eq!(ExpenseCategory::parse("food"), ExpenseCategory::Food);
    assert_eq!(ExpenseCategory::parse("FOOD"), ExpenseCategory::Food);
    assert_eq!(ExpenseCategory::parse("groceries"), ExpenseCategory::Food);
    assert_eq!(
        ExpenseCategory::parse("transportation"),
        ExpenseCategory::Transport
    );
    assert_eq!(ExpenseCategory::parse("utilities"), ExpenseCategory::Bills);
    assert_eq!(ExpenseCategory::parse("medical"), ExpenseCategory::Health);
    assert_eq!(
        ExpenseCategory::parse("donation"),
        ExpenseCategory::Charity
    );
    assert_eq!(ExpenseCategory::parse("widgets"), ExpenseCategory::Other);
}

#[test]
fn test_expense_category_roundtrip() {
    for c in ExpenseCategory::all() {
        assert_eq!(ExpenseCategory::parse(c.as_str()), *c);
    }
}

#[test]
fn test_expense_category_all() {
    let all = ExpenseCategory::all();
    assert_eq!(all.len(), 10);
    assert!(all.contains(&ExpenseCategory::Food));
    assert!(all.contains(&ExpenseCategory::Investment));
    assert!(all.contains(&ExpenseCategory::Other));
}

// ── IncomeCategory ────────────────────────────────────────────

#[test]
fn test_income_category_parse() {
    assert_eq!(IncomeCategory::parse("salary"), IncomeCategory::Salary);
    assert_eq!(IncomeCategory::parse("paycheck"), IncomeCategory::Salary);
    assert_eq!(IncomeCategory::parse("dividend"), IncomeCategory::Interest);
    assert_eq!(IncomeCategory::parse("lottery"), IncomeCategory::Other);
}

#[test]
fn test_income_category_roundtrip() {
    for c in IncomeCategory::all() {
        assert_eq!(IncomeCategory::parse(c.as_str()), *c);
    }
}

// ── Category ──────────────────────────────────────────────────

#[test]
fn test_category_vocabularies_are_disjoint() {
    for e in ExpenseCategory::all() {
        if *e == ExpenseCategory::Other {
            continue;
        }
        assert_eq!(
            IncomeCategory::parse(e.as_str()),
            IncomeCategory::Other,
            "{} must not name an income category",
            e.as_str()
        );
    }
    for i in IncomeCategory::all() {
        if *i == IncomeCategory::Other {
            continue;
        }
        assert_eq!(
            ExpenseCategory::parse(i.as_str()),
            ExpenseCategory::Other,
            "{} must not name an expense category",
            i.as_str()
        );
    }
}

#[test]
fn test_category_parse_respects_kind() {
    let c = Category::parse(EntryKind::Expense, "salary");
    assert_eq!(c, Category::Expense(ExpenseCategory::Other));
    assert_eq!(c.kind(), EntryKind::Expense);

    let c = Category::parse(EntryKind::Income, "salary");
    assert_eq!(c, Category::Income(IncomeCategory::Salary));
    assert_eq!(c.kind(), EntryKind::Income);
}

#[test]
fn test_category_infer() {
    assert_eq!(
        Category::infer("food"),
        Some(Category::Expense(ExpenseCategory::Food))
    );
    assert_eq!(
        Category::infer("Salary"),
        Some(Category::Income(IncomeCategory::Salary))
    );
    // Ambiguous or unknown names need an explicit kind.
    assert_eq!(Category::infer("other"), None);
    assert_eq!(Category::infer("widgets"), None);
}

#[test]
fn test_category_resolve() {
    assert_eq!(
        Category::resolve("transit"),
        Some(Category::Expense(ExpenseCategory::Transport))
    );
    assert_eq!(
        Category::resolve("income:other"),
        Some(Category::Income(IncomeCategory::Other))
    );
    assert_eq!(
        Category::resolve("expense:other"),
        Some(Category::Expense(ExpenseCategory::Other))
    );
    // A qualified name still folds within that kind's vocabulary.
    assert_eq!(
        Category::resolve("expense:salary"),
        Some(Category::Expense(ExpenseCategory::Other))
    );
    assert_eq!(Category::resolve("other"), None);
    assert_eq!(Category::resolve("stuff:food"), None);
}

#[test]
fn test_category_display() {
    assert_eq!(
        format!("{}", Category::Expense(ExpenseCategory::Food)),
        "Food"
    );
    assert_eq!(
        format!("{}", Category::Income(IncomeCategory::Gift)),
        "Gift"
    );
}

// ── PeriodKey ─────────────────────────────────────────────────

#[test]
fn test_period_key_parse() {
    let key = PeriodKey::parse("2024-05").unwrap();
    assert_eq!(key.year, 2024);
    assert_eq!(key.month, 5);
    assert_eq!(key.to_string(), "2024-05");
}

#[test]
fn test_period_key_parse_rejects_garbage() {
    assert!(PeriodKey::parse("2024-13").is_none());
    assert!(PeriodKey::parse("2024-00").is_none());
    assert!(PeriodKey::parse("202405").is_none());
    assert!(PeriodKey::parse("May 2024").is_none());
    assert!(PeriodKey::parse("").is_none());
}

#[test]
fn test_period_key_contains() {
    let key = PeriodKey::parse("2024-05").unwrap();
    assert!(key.contains(date("2024-05-01")));
    assert!(key.contains(date("2024-05-31")));
    assert!(!key.contains(date("2024-04-30")));
    assert!(!key.contains(date("2023-05-15")));
}

#[test]
fn test_period_key_prev_next_across_year() {
    let jan = PeriodKey::parse("2024-01").unwrap();
    assert_eq!(jan.prev().to_string(), "2023-12");
    let dec = PeriodKey::parse("2024-12").unwrap();
    assert_eq!(dec.next().to_string(), "2025-01");
    assert_eq!(jan.next().to_string(), "2024-02");
}

#[test]
fn test_period_key_for_date() {
    let key = PeriodKey::for_date(date("2024-02-29"));
    assert_eq!(key.to_string(), "2024-02");
}
