use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::Entry;

const HEADER: [&str; 6] = ["ID", "Date", "Description", "Category", "Type", "Amount"];

/// Write entries as CSV in the order given; callers pass the
/// display-sorted visible list. Amounts are raw whole units so the file
/// round-trips through spreadsheets without locale surprises.
pub(crate) fn write_csv<W: Write>(writer: W, entries: &[Entry]) -> Result<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record(HEADER)
        .context("Failed to write CSV header")?;

    for entry in entries {
        let id = entry.id.map(|i| i.to_string()).unwrap_or_default();
        let date = entry.date.format("%Y-%m-%d").to_string();
        let amount = entry.amount.to_string();
        csv_writer.write_record([
            id.as_str(),
            date.as_str(),
            entry.text.as_str(),
            entry.category.as_str(),
            entry.kind().as_str(),
            amount.as_str(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(entries.len())
}

pub(crate) fn export_to_file(path: &Path, entries: &[Entry]) -> Result<usize> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create export file: {}", path.display()))?;
    write_csv(file, entries)
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
