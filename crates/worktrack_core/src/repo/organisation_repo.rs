//! Organisation repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide create/read/delete APIs over `organisations` storage.
//! - Enforce global uniqueness of organisation names.
//!
//! # Invariants
//! - `list()` order is stable: insertion (id) order.
//! - Deletes never cascade; child projects block removal.

use crate::model::Organisation;
use crate::repo::{ensure_schema_ready, map_delete_error, RepoError, RepoResult};
use rusqlite::{Connection, OptionalExtension};

/// Repository interface for organisation operations.
pub trait OrganisationRepository {
    /// Inserts a new organisation with a unique name.
    fn add(&self, name: &str) -> RepoResult<Organisation>;
    /// Removes one organisation by name.
    fn delete(&self, name: &str) -> RepoResult<()>;
    /// Lists all organisations in insertion order.
    fn list(&self) -> RepoResult<Vec<Organisation>>;
}

/// SQLite-backed organisation repository.
pub struct SqliteOrganisationRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteOrganisationRepository<'conn> {
    /// Creates a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_schema_ready(conn)?;
        Ok(Self { conn })
    }
}

impl OrganisationRepository for SqliteOrganisationRepository<'_> {
    fn add(&self, name: &str) -> RepoResult<Organisation> {
        if find_organisation(self.conn, name)?.is_some() {
            return Err(RepoError::Duplicate {
                entity: "organisation",
                name: name.to_string(),
            });
        }

        self.conn.execute(
            "INSERT INTO organisations (organisation_name) VALUES (?1);",
            [name],
        )?;

        Ok(Organisation {
            id: self.conn.last_insert_rowid(),
            name: name.to_string(),
        })
    }

    fn delete(&self, name: &str) -> RepoResult<()> {
        let changed = self
            .conn
            .execute(
                "DELETE FROM organisations WHERE organisation_name = ?1;",
                [name],
            )
            .map_err(|err| map_delete_error(err, "organisation", name))?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "organisation",
                name: name.to_string(),
            });
        }

        Ok(())
    }

    fn list(&self) -> RepoResult<Vec<Organisation>> {
        let mut stmt = self.conn.prepare(
            "SELECT organisation_id, organisation_name
             FROM organisations
             ORDER BY organisation_id ASC;",
        )?;

        let mut rows = stmt.query([])?;
        let mut organisations = Vec::new();
        while let Some(row) = rows.next()? {
            organisations.push(Organisation {
                id: row.get(0)?,
                name: row.get(1)?,
            });
        }

        Ok(organisations)
    }
}

/// Looks up one organisation by name. Shared with child repositories for
/// parent resolution.
pub(crate) fn find_organisation(
    conn: &Connection,
    name: &str,
) -> RepoResult<Option<Organisation>> {
    let organisation = conn
        .query_row(
            "SELECT organisation_id, organisation_name
             FROM organisations
             WHERE organisation_name = ?1;",
            [name],
            |row| {
                Ok(Organisation {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            },
        )
        .optional()?;

    Ok(organisation)
}

/// Resolves one organisation by name or fails with `NotFound`.
pub(crate) fn resolve_organisation(conn: &Connection, name: &str) -> RepoResult<Organisation> {
    find_organisation(conn, name)?.ok_or_else(|| RepoError::NotFound {
        entity: "organisation",
        name: name.to_string(),
    })
}
