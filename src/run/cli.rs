use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::Path;

use crate::analytics::{aggregate, expense_totals, project_for_view, select_insight, DailyBudget};
use crate::db::Database;
use crate::models::{Category, Entry, PeriodKey};
use crate::ui::util::{format_allowance, format_amount, parse_amount};

pub(crate) fn as_cli(args: &[String], db: &mut Database) -> Result<()> {
    match args[1].as_str() {
        "summary" | "s" => cli_summary(&args[2..], db),
        "list" | "ls" => cli_list(&args[2..], db),
        "add" => cli_add(&args[2..], db),
        "export" => cli_export(&args[2..], db),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("tally {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("Tally — terminal ledger with monthly budgets and insights");
    println!();
    println!("Usage: tally [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  summary [YYYY-MM|all]         Print totals, budget and insight for a month");
    println!("  list [YYYY-MM|all]            List entries for a month");
    println!("  add <date> <amount> <category> <description...>");
    println!("                                Record an entry (date is YYYY-MM-DD)");
    println!("  export [path]                 Export entries to CSV");
    println!("    --month <YYYY-MM|all>       Month to export (default: current)");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
}

/// Positional month argument shared by `summary` and `list`. Absent
/// means the current month; the literal `all` lifts the filter.
fn parse_period_arg(args: &[String]) -> Result<Option<PeriodKey>> {
    match args.first().filter(|a| !a.starts_with('-')) {
        None => Ok(Some(PeriodKey::current())),
        Some(s) if s == "all" => Ok(None),
        Some(s) => PeriodKey::parse(s)
            .map(Some)
            .ok_or_else(|| anyhow::anyhow!("Invalid month: {s} (use YYYY-MM or all)")),
    }
}

fn period_label(period: Option<PeriodKey>) -> String {
    match period {
        Some(key) => key.to_string(),
        None => "all time".to_string(),
    }
}

fn cli_summary(args: &[String], db: &mut Database) -> Result<()> {
    let period = parse_period_arg(args)?;
    let entries = db.get_entries(period)?;
    let totals = aggregate(&entries);

    println!("Tally — {}", period_label(period));
    println!("{}", "─".repeat(40));
    println!("  Income:   {}", format_amount(totals.income));
    println!("  Expenses: {}", format_amount(totals.expense));
    println!("  Balance:  {}", format_amount(totals.balance));
    println!("  Entries:  {}", entries.len());

    let today = chrono::Local::now().date_naive();
    match project_for_view(period, totals.income, totals.expense, today) {
        None => println!("  Daily:    n/a (not the current month)"),
        Some(DailyBudget::NoBasis) => println!("  Daily:    $0.00 (no income recorded)"),
        Some(DailyBudget::OverBudget { deficit }) => {
            println!("  Daily:    over budget by {}", format_amount(deficit));
        }
        Some(DailyBudget::Allowance(per_day)) => {
            println!("  Daily:    {} left per day", format_allowance(per_day));
        }
    }

    let spending = expense_totals(&entries);
    if !spending.is_empty() {
        println!();
        println!("Spending by category:");
        for (category, amount) in &spending {
            println!("  {:<14} {}", category.as_str(), format_amount(*amount));
        }
    }

    let insight = select_insight(totals.income, totals.expense, &entries, &mut rand::thread_rng());
    println!();
    println!("{} {}", insight.icon, insight.message);

    Ok(())
}

fn cli_list(args: &[String], db: &mut Database) -> Result<()> {
    let period = parse_period_arg(args)?;
    let entries = db.get_entries(period)?;
    if entries.is_empty() {
        println!("No entries for {}", period_label(period));
        return Ok(());
    }

    println!("Tally — {} ({} entries)", period_label(period), entries.len());
    println!(
        "{:<5} {:<12} {:<28} {:<14} {:>10}",
        "ID", "Date", "Description", "Category", "Amount"
    );
    println!("{}", "─".repeat(72));
    for entry in &entries {
        let amount = if entry.is_income() {
            format!("+{}", format_amount(entry.amount))
        } else {
            format_amount(entry.amount)
        };
        println!(
            "{:<5} {:<12} {:<28.26} {:<14} {:>10}",
            entry.id.unwrap_or(0),
            entry.date.to_string(),
            entry.text,
            entry.category.as_str(),
            amount,
        );
    }
    Ok(())
}

fn cli_add(args: &[String], db: &mut Database) -> Result<()> {
    if args.len() < 4 {
        anyhow::bail!("Usage: tally add <YYYY-MM-DD> <amount> <category> <description...>");
    }

    let date = NaiveDate::parse_from_str(&args[0], "%Y-%m-%d")
        .with_context(|| format!("Invalid date: {} (use YYYY-MM-DD)", args[0]))?;
    let amount = parse_amount(&args[1]).ok_or_else(|| {
        anyhow::anyhow!("Invalid amount: {} (use a positive whole number)", args[1])
    })?;
    let category = Category::resolve(&args[2]).ok_or_else(|| {
        anyhow::anyhow!(
            "Can't tell if '{0}' is income or expense. Use income:{0} or expense:{0}",
            args[2]
        )
    })?;
    let text = args[3..].join(" ").trim().to_string();
    if text.is_empty() {
        anyhow::bail!("Description cannot be empty");
    }

    let entry = Entry::new(text, amount, category, date);
    let id = db.insert_entry(&entry)?;
    println!(
        "Added entry #{id}: {} ({} {} on {})",
        entry.text,
        entry.kind().as_str(),
        format_amount(entry.amount),
        entry.date
    );
    Ok(())
}

fn cli_export(args: &[String], db: &mut Database) -> Result<()> {
    let month_flag = args
        .windows(2)
        .find(|w| w[0] == "--month")
        .map(|w| w[1].clone());
    let period = match month_flag.as_deref() {
        None => Some(PeriodKey::current()),
        Some("all") => None,
        Some(s) => Some(
            PeriodKey::parse(s)
                .ok_or_else(|| anyhow::anyhow!("Invalid month: {s} (use YYYY-MM or all)"))?,
        ),
    };
    let suffix = match period {
        Some(key) => key.to_string(),
        None => "all".to_string(),
    };

    // Output path is the first non-flag argument
    let output_path = args
        .first()
        .filter(|a| !a.starts_with('-'))
        .map(|a| expand_home(a))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            format!("{home}/tally-export-{suffix}.csv")
        });

    let entries = db.get_entries(period)?;
    let count = crate::export::export_to_file(Path::new(&output_path), &entries)?;
    if count == 0 {
        println!("No entries for {}", period_label(period));
    } else {
        println!("Exported {count} entries to {output_path}");
    }
    Ok(())
}

pub(crate) fn expand_home(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}
