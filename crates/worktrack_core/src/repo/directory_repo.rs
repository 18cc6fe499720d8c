//! Directory repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide create/read/delete APIs over `directories` storage.
//! - Resolve the parent project transitively via its organisation.
//!
//! # Invariants
//! - Paths are unique globally and must be filesystem-absolute.
//! - `info`/`list` always return the full resolved parent chain.

use crate::model::Directory;
use crate::repo::project_repo::{parse_project_row, resolve_project};
use crate::repo::{ensure_schema_ready, map_delete_error, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};
use std::path::Path;

const DIRECTORY_SELECT_SQL: &str = "SELECT
    p.project_id,
    p.project_name,
    o.organisation_id,
    o.organisation_name,
    d.directory_id,
    d.directory_path
FROM directories d
INNER JOIN projects p ON p.project_id = d.project_id
INNER JOIN organisations o ON o.organisation_id = p.organisation_id";

/// Repository interface for directory operations.
pub trait DirectoryRepository {
    /// Registers an absolute path under the named organisation/project.
    fn add(&self, organisation: &str, project: &str, path: &str) -> RepoResult<Directory>;
    /// Removes one directory by absolute path.
    fn delete(&self, path: &str) -> RepoResult<()>;
    /// Loads one directory with its resolved project and organisation.
    fn info(&self, path: &str) -> RepoResult<Directory>;
    /// Lists all directories with resolved parents.
    fn list(&self) -> RepoResult<Vec<Directory>>;
}

/// SQLite-backed directory repository.
pub struct SqliteDirectoryRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDirectoryRepository<'conn> {
    /// Creates a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_schema_ready(conn)?;
        Ok(Self { conn })
    }
}

impl DirectoryRepository for SqliteDirectoryRepository<'_> {
    fn add(&self, organisation: &str, project: &str, path: &str) -> RepoResult<Directory> {
        if !Path::new(path).is_absolute() {
            return Err(RepoError::RelativePath(path.to_string()));
        }

        let project = resolve_project(self.conn, organisation, project)?;

        if find_directory(self.conn, path)?.is_some() {
            return Err(RepoError::Duplicate {
                entity: "directory",
                name: path.to_string(),
            });
        }

        self.conn.execute(
            "INSERT INTO directories (project_id, directory_path) VALUES (?1, ?2);",
            params![project.id, path],
        )?;

        Ok(Directory {
            id: self.conn.last_insert_rowid(),
            path: path.to_string(),
            project,
        })
    }

    fn delete(&self, path: &str) -> RepoResult<()> {
        let changed = self
            .conn
            .execute(
                "DELETE FROM directories WHERE directory_path = ?1;",
                [path],
            )
            .map_err(|err| map_delete_error(err, "directory", path))?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "directory",
                name: path.to_string(),
            });
        }

        Ok(())
    }

    fn info(&self, path: &str) -> RepoResult<Directory> {
        find_directory(self.conn, path)?.ok_or_else(|| RepoError::NotFound {
            entity: "directory",
            name: path.to_string(),
        })
    }

    fn list(&self) -> RepoResult<Vec<Directory>> {
        let mut stmt = self.conn.prepare(&format!(
            "{DIRECTORY_SELECT_SQL} ORDER BY d.directory_id ASC;"
        ))?;

        let mut rows = stmt.query([])?;
        let mut directories = Vec::new();
        while let Some(row) = rows.next()? {
            directories.push(parse_directory_row(row)?);
        }

        Ok(directories)
    }
}

fn parse_directory_row(row: &Row<'_>) -> RepoResult<Directory> {
    Ok(Directory {
        project: parse_project_row(row)?,
        id: row.get(4)?,
        path: row.get(5)?,
    })
}

/// Looks up one directory by absolute path, with its parent chain
/// resolved. Shared with the entry repository.
pub(crate) fn find_directory(conn: &Connection, path: &str) -> RepoResult<Option<Directory>> {
    let mut stmt = conn.prepare(&format!("{DIRECTORY_SELECT_SQL} WHERE d.directory_path = ?1;"))?;
    let mut rows = stmt.query([path])?;
    if let Some(row) = rows.next()? {
        return Ok(Some(parse_directory_row(row)?));
    }
    Ok(None)
}
