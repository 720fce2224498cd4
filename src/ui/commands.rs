use std::collections::HashMap;
use std::sync::LazyLock;

use chrono::NaiveDate;

use super::app::{App, InputMode, PendingAction, Screen};
use super::util;
use crate::db::Database;
use crate::models::{Category, Entry, PeriodKey};

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &mut Database) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit Tally", cmd_quit, r);
    register_command!("quit", "Quit Tally", cmd_quit, r);
    register_command!("d", "Go to Dashboard", cmd_dashboard, r);
    register_command!("dashboard", "Go to Dashboard", cmd_dashboard, r);
    register_command!("e", "Go to Entries", cmd_entries, r);
    register_command!("entries", "Go to Entries", cmd_entries, r);
    register_command!(
        "add",
        "Add entry (e.g. :add 2024-05-12 42 food Lunch out)",
        cmd_add,
        r
    );
    register_command!(
        "edit",
        "Edit selected entry (e.g. :edit amount 55)",
        cmd_edit,
        r
    );
    register_command!("delete", "Delete selected entry", cmd_delete, r);
    register_command!(
        "month",
        "Set month (e.g. :month 2024-05, :month all)",
        cmd_month,
        r
    );
    register_command!("m", "Set month (e.g. :m 2024-05)", cmd_month, r);
    register_command!("next-month", "Go to next month", cmd_next_month, r);
    register_command!("prev-month", "Go to previous month", cmd_prev_month, r);
    register_command!(
        "export",
        "Export the view to CSV (e.g. :export ~/ledger.csv)",
        cmd_export,
        r
    );
    register_command!("reset", "Erase every entry in the ledger", cmd_reset, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app, db)?;
    } else {
        // Try fuzzy match
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| levenshtein(input, k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App, _db: &mut Database) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_dashboard(_args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    app.screen = Screen::Dashboard;
    app.refresh_dashboard(db)?;
    Ok(())
}

fn cmd_entries(_args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    app.screen = Screen::Entries;
    app.refresh_entries(db)?;
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App, _db: &mut Database) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_add(args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    const USAGE: &str = "Usage: :add <date> <amount> <category> <text>";
    if args.is_empty() {
        app.set_status(format!("{USAGE}. Example: :add 2024-05-12 42 food Lunch out"));
        return Ok(());
    }

    let parts: Vec<&str> = args.splitn(4, ' ').collect();
    if parts.len() < 4 {
        app.set_status(USAGE);
        return Ok(());
    }

    let date = match NaiveDate::parse_from_str(parts[0], "%Y-%m-%d") {
        Ok(d) => d,
        Err(_) => {
            app.set_status(format!("Invalid date: {} (use YYYY-MM-DD)", parts[0]));
            return Ok(());
        }
    };
    let amount = match util::parse_amount(parts[1]) {
        Some(a) => a,
        None => {
            app.set_status(format!(
                "Invalid amount: {} (whole units, greater than zero)",
                parts[1]
            ));
            return Ok(());
        }
    };
    let category = match Category::resolve(parts[2]) {
        Some(c) => c,
        None => {
            app.set_status(format!(
                "Can't tell if '{0}' is income or expense. Use income:{0} or expense:{0}",
                parts[2]
            ));
            return Ok(());
        }
    };
    let text = parts[3].trim().to_string();
    if text.is_empty() {
        app.set_status(USAGE);
        return Ok(());
    }

    let entry = Entry::new(text.clone(), amount, category, date);
    db.insert_entry(&entry)?;
    app.refresh_dashboard(db)?;
    app.set_status(format!(
        "Added: {text} ({} {} on {date})",
        category.kind(),
        util::format_amount(amount)
    ));
    Ok(())
}

fn cmd_edit(args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    if app.screen != Screen::Entries || app.entries.is_empty() {
        app.set_status("Go to Entries and select one first");
        return Ok(());
    }

    if args.is_empty() {
        // Prefill a text edit of the selection for quick renames.
        if let Some(entry) = app.entries.get(app.entry_index) {
            app.command_input = format!("edit text {}", entry.text);
            app.input_mode = InputMode::Command;
            app.set_status("Adjust and press Enter");
        }
        return Ok(());
    }

    let Some((field, value)) = args.split_once(' ') else {
        app.set_status("Usage: :edit <text|amount|category|date> <value>");
        return Ok(());
    };
    let value = value.trim();

    let Some(mut updated) = app.entries.get(app.entry_index).cloned() else {
        return Ok(());
    };

    match field {
        "text" => {
            if value.is_empty() {
                app.set_status("Description cannot be empty");
                return Ok(());
            }
            updated.text = value.to_string();
        }
        "amount" => match util::parse_amount(value) {
            Some(a) => updated.amount = a,
            None => {
                app.set_status(format!(
                    "Invalid amount: {value} (whole units, greater than zero)"
                ));
                return Ok(());
            }
        },
        "category" => match Category::resolve(value) {
            Some(c) => updated.category = c,
            None => {
                app.set_status(format!(
                    "Can't tell if '{value}' is income or expense. Use income:{value} or expense:{value}"
                ));
                return Ok(());
            }
        },
        "date" => match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
            Ok(d) => updated.date = d,
            Err(_) => {
                app.set_status(format!("Invalid date: {value} (use YYYY-MM-DD)"));
                return Ok(());
            }
        },
        other => {
            app.set_status(format!(
                "Unknown field: {other}. Use text, amount, category or date"
            ));
            return Ok(());
        }
    }

    db.replace_entry(&updated)?;
    app.refresh_dashboard(db)?;
    app.set_status(format!("Updated {field} for: {}", updated.text));
    Ok(())
}

fn cmd_delete(_args: &str, app: &mut App, _db: &mut Database) -> anyhow::Result<()> {
    if app.screen != Screen::Entries || app.entries.is_empty() {
        app.set_status("Go to Entries and select one first");
        return Ok(());
    }

    if let Some(entry) = app.entries.get(app.entry_index) {
        if let Some(id) = entry.id {
            let text = entry.text.clone();
            app.confirm_message = format!("Delete '{text}'?");
            app.pending_action = Some(PendingAction::DeleteEntry { id, text });
            app.input_mode = InputMode::Confirm;
        }
    }

    Ok(())
}

fn cmd_month(args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    if args.is_empty() || args == "all" {
        app.period = None;
        app.refresh_dashboard(db)?;
        app.set_status("Showing all time");
        return Ok(());
    }

    if args == "now" {
        return set_period(app, db, PeriodKey::current());
    }

    // "5" and "05" pick that month within the year in view.
    let candidate = if args.len() <= 2 {
        let year = app.period.map_or_else(|| PeriodKey::current().year, |p| p.year);
        format!("{year}-{args:0>2}")
    } else {
        args.to_string()
    };

    match PeriodKey::parse(&candidate) {
        Some(key) => set_period(app, db, key)?,
        None => app.set_status("Invalid month. Use YYYY-MM (e.g. 2024-05)"),
    }

    Ok(())
}

fn cmd_next_month(_args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    let base = app.period.unwrap_or_else(PeriodKey::current);
    set_period(app, db, base.next())
}

fn cmd_prev_month(_args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    let base = app.period.unwrap_or_else(PeriodKey::current);
    set_period(app, db, base.prev())
}

fn set_period(app: &mut App, db: &mut Database, key: PeriodKey) -> anyhow::Result<()> {
    app.period = Some(key);
    app.entry_index = 0;
    app.entry_scroll = 0;
    app.refresh_dashboard(db)?;
    app.set_status(format!("Month: {key}"));
    Ok(())
}

fn cmd_export(args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    let path = if args.is_empty() {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        let suffix = app
            .period
            .map_or_else(|| "all".to_string(), |p| p.to_string());
        format!("{home}/tally-export-{suffix}.csv")
    } else {
        crate::run::expand_home(args)
    };

    let entries = db.get_entries(app.period)?;
    let count = crate::export::export_to_file(std::path::Path::new(&path), &entries)?;
    if count == 0 {
        app.set_status("Nothing to export");
    } else {
        app.set_status(format!("Exported {count} entries to {path}"));
    }
    Ok(())
}

fn cmd_reset(_args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    let count = db.count_entries()?;
    if count == 0 {
        app.set_status("The ledger is already empty");
        return Ok(());
    }

    app.confirm_message = format!(
        "Erase all {count} entr{}? This cannot be undone",
        if count == 1 { "y" } else { "ies" }
    );
    app.pending_action = Some(PendingAction::ResetLedger);
    app.input_mode = InputMode::Confirm;
    Ok(())
}
