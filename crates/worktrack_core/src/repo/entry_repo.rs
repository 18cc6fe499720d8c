//! Entry repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide create/read APIs over `entries` storage.
//! - Resolve the owning directory by absolute path on every add.
//!
//! # Invariants
//! - Entries are immutable once recorded; there is no update or delete.
//! - Timestamps are persisted as RFC 3339 UTC text; read paths reject
//!   undecodable values instead of masking them.

use crate::model::Entry;
use crate::repo::directory_repo::find_directory;
use crate::repo::project_repo::parse_project_row;
use crate::repo::{ensure_schema_ready, RepoError, RepoResult};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};

const ENTRY_SELECT_SQL: &str = "SELECT
    p.project_id,
    p.project_name,
    o.organisation_id,
    o.organisation_name,
    e.entry_id,
    e.entry_name,
    e.recorded_at
FROM entries e
INNER JOIN directories d ON d.directory_id = e.directory_id
INNER JOIN projects p ON p.project_id = d.project_id
INNER JOIN organisations o ON o.organisation_id = p.organisation_id";

/// Repository interface for entry operations.
pub trait EntryRepository {
    /// Records an entry for the directory registered at `path`.
    fn add(&self, path: &str, recorded_at: DateTime<Utc>) -> RepoResult<Entry>;
    /// Lists all entries with resolved parents.
    fn list(&self) -> RepoResult<Vec<Entry>>;
}

/// SQLite-backed entry repository.
pub struct SqliteEntryRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEntryRepository<'conn> {
    /// Creates a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_schema_ready(conn)?;
        Ok(Self { conn })
    }
}

impl EntryRepository for SqliteEntryRepository<'_> {
    fn add(&self, path: &str, recorded_at: DateTime<Utc>) -> RepoResult<Entry> {
        let directory = find_directory(self.conn, path)?.ok_or_else(|| RepoError::NotFound {
            entity: "directory",
            name: path.to_string(),
        })?;

        self.conn.execute(
            "INSERT INTO entries (directory_id, entry_name, recorded_at)
             VALUES (?1, ?2, ?3);",
            params![directory.id, directory.path, recorded_at.to_rfc3339()],
        )?;

        Ok(Entry {
            id: self.conn.last_insert_rowid(),
            name: directory.path,
            recorded_at,
            project: directory.project,
        })
    }

    fn list(&self) -> RepoResult<Vec<Entry>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ENTRY_SELECT_SQL} ORDER BY e.entry_id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut entries = Vec::new();
        while let Some(row) = rows.next()? {
            entries.push(parse_entry_row(row)?);
        }

        Ok(entries)
    }
}

fn parse_entry_row(row: &Row<'_>) -> RepoResult<Entry> {
    let recorded_at_text: String = row.get(6)?;
    let recorded_at = DateTime::parse_from_rfc3339(&recorded_at_text)
        .map_err(|_| {
            RepoError::InvalidData(format!(
                "invalid timestamp `{recorded_at_text}` in entries.recorded_at"
            ))
        })?
        .with_timezone(&Utc);

    Ok(Entry {
        project: parse_project_row(row)?,
        id: row.get(4)?,
        name: row.get(5)?,
        recorded_at,
    })
}
