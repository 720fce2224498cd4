#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;

use crate::models::{Category, Entry, ExpenseCategory, IncomeCategory};

use super::*;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn saved_entry(id: i64, text: &str, amount: i64, category: Category, day: &str) -> Entry {
    let mut entry = Entry::new(text.into(), amount, category, date(day));
    entry.id = Some(id);
    entry
}

#[test]
fn test_export_header_and_rows() {
    let entries = vec![
        saved_entry(
            7,
            "Paycheck",
            3000,
            Category::Income(IncomeCategory::Salary),
            "2024-05-01",
        ),
        saved_entry(
            8,
            "Groceries",
            120,
            Category::Expense(ExpenseCategory::Food),
            "2024-05-03",
        ),
    ];

    let mut buf = Vec::new();
    let written = write_csv(&mut buf, &entries).unwrap();
    assert_eq!(written, 2);

    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "ID,Date,Description,Category,Type,Amount");
    assert_eq!(lines[1], "7,2024-05-01,Paycheck,Salary,Income,3000");
    assert_eq!(lines[2], "8,2024-05-03,Groceries,Food,Expense,120");
}

#[test]
fn test_export_preserves_given_order() {
    let entries = vec![
        saved_entry(
            2,
            "Later",
            10,
            Category::Expense(ExpenseCategory::Other),
            "2024-05-20",
        ),
        saved_entry(
            1,
            "Earlier",
            20,
            Category::Expense(ExpenseCategory::Other),
            "2024-05-02",
        ),
    ];

    let mut buf = Vec::new();
    write_csv(&mut buf, &entries).unwrap();

    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines[1].starts_with("2,"));
    assert!(lines[2].starts_with("1,"));
}

#[test]
fn test_export_quotes_descriptions_with_commas() {
    let entries = vec![saved_entry(
        1,
        "Dinner, drinks, and a movie",
        95,
        Category::Expense(ExpenseCategory::Entertainment),
        "2024-05-11",
    )];

    let mut buf = Vec::new();
    write_csv(&mut buf, &entries).unwrap();

    let text = String::from_utf8(buf).unwrap();
    assert!(text.contains("\"Dinner, drinks, and a movie\""));
}

#[test]
fn test_export_unsaved_entry_has_blank_id() {
    let entry = Entry::new(
        "Draft".into(),
        5,
        Category::Expense(ExpenseCategory::Other),
        date("2024-05-01"),
    );

    let mut buf = Vec::new();
    write_csv(&mut buf, &[entry]).unwrap();

    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines[1].starts_with(",2024-05-01,"));
}

#[test]
fn test_export_empty_ledger_writes_header_only() {
    let mut buf = Vec::new();
    let written = write_csv(&mut buf, &[]).unwrap();
    assert_eq!(written, 0);

    let text = String::from_utf8(buf).unwrap();
    assert_eq!(text.trim_end(), "ID,Date,Description,Category,Type,Amount");
}

#[test]
fn test_export_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.csv");
    let entries = vec![saved_entry(
        1,
        "Bus fare",
        3,
        Category::Expense(ExpenseCategory::Transport),
        "2024-05-06",
    )];

    export_to_file(&path, &entries).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("ID,Date,Description,Category,Type,Amount"));
    assert!(text.contains("Bus fare"));
}
