mod schema;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use rusqlite::{params, Connection};
use std::path::Path;

use crate::models::{Category, Entry, EntryKind, PeriodKey};

pub(crate) struct Database {
    conn: Connection,
}

impl Database {
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database: {}", path.display()))?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")
            .context("Failed to set database pragmas")?;
        let mut db = Self { conn };
        db.migrate().context("Database migration failed")?;
        Ok(db)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        let mut db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&mut self) -> Result<()> {
        // Check if schema_version table exists
        let has_version_table: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
            [],
            |row| row.get(0),
        )?;

        if !has_version_table {
            // Fresh database - apply full schema
            self.conn.execute_batch(schema::SCHEMA_V1)?;
            self.conn.execute(
                "INSERT INTO schema_version (version) VALUES (?1)",
                params![schema::CURRENT_VERSION],
            )?;
            return Ok(());
        }

        // Existing database - check version and apply migrations
        let current: i32 = self
            .conn
            .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
                row.get(0)
            })
            .unwrap_or(0);

        for &(from_version, sql) in schema::MIGRATIONS {
            if current <= from_version {
                self.conn.execute_batch(sql)?;
            }
        }

        if current < schema::CURRENT_VERSION {
            self.conn.execute(
                "UPDATE schema_version SET version = ?1",
                params![schema::CURRENT_VERSION],
            )?;
        }

        Ok(())
    }

    // ── Entries ───────────────────────────────────────────────

    pub(crate) fn insert_entry(&self, entry: &Entry) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO entries (text, amount, kind, category, date, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                entry.text,
                entry.amount,
                entry.kind().as_str(),
                entry.category.as_str(),
                entry.date.format("%Y-%m-%d").to_string(),
                entry.created_at,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub(crate) fn get_entry(&self, id: i64) -> Result<Option<Entry>> {
        let result = self.conn.query_row(
            "SELECT id, text, amount, kind, category, date, created_at
             FROM entries WHERE id = ?1",
            params![id],
            entry_from_row,
        );
        match result {
            Ok(e) => Ok(Some(e)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Newest date first; entries sharing a date stay in insertion
    /// order, matching the in-memory display sort.
    pub(crate) fn get_entries(&self, period: Option<PeriodKey>) -> Result<Vec<Entry>> {
        let mut sql = String::from(
            "SELECT id, text, amount, kind, category, date, created_at FROM entries WHERE 1=1",
        );
        let mut param_values: Vec<Box<dyn rusqlite::types::ToSql>> = Vec::new();

        if let Some(key) = period {
            sql.push_str(&format!(" AND date LIKE ?{}", param_values.len() + 1));
            param_values.push(Box::new(format!("{key}%")));
        }

        sql.push_str(" ORDER BY date DESC, id ASC");

        let params_ref: Vec<&dyn rusqlite::types::ToSql> =
            param_values.iter().map(|p| p.as_ref()).collect();

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params_ref.as_slice(), entry_from_row)?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    /// Replace every field of a saved entry in place; the id is the one
    /// thing an edit can never change. `created_at` keeps the original
    /// creation time.
    pub(crate) fn replace_entry(&self, entry: &Entry) -> Result<()> {
        let id = entry
            .id
            .context("Cannot replace an entry that was never saved")?;
        let changed = self.conn.execute(
            "UPDATE entries SET text = ?1, amount = ?2, kind = ?3, category = ?4, date = ?5
             WHERE id = ?6",
            params![
                entry.text,
                entry.amount,
                entry.kind().as_str(),
                entry.category.as_str(),
                entry.date.format("%Y-%m-%d").to_string(),
                id,
            ],
        )?;
        if changed == 0 {
            bail!("No entry with id {id}");
        }
        Ok(())
    }

    pub(crate) fn delete_entry(&self, id: i64) -> Result<()> {
        self.conn
            .execute("DELETE FROM entries WHERE id = ?1", params![id])?;
        Ok(())
    }

    /// Wipe the ledger. Irreversible; callers confirm first.
    pub(crate) fn delete_all(&self) -> Result<()> {
        self.conn.execute("DELETE FROM entries", [])?;
        Ok(())
    }

    pub(crate) fn count_entries(&self) -> Result<i64> {
        Ok(self
            .conn
            .query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))?)
    }
}

fn entry_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Entry> {
    let kind_str: String = row.get(3)?;
    let category_str: String = row.get(4)?;
    let date_str: String = row.get(5)?;

    // kind is CHECK-constrained in the schema; the default only catches
    // hand-edited rows.
    let kind = EntryKind::parse(&kind_str).unwrap_or(EntryKind::Expense);
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(5, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(Entry {
        id: Some(row.get(0)?),
        text: row.get(1)?,
        amount: row.get(2)?,
        category: Category::parse(kind, &category_str),
        date,
        created_at: row.get(6)?,
    })
}

#[cfg(test)]
mod tests;
