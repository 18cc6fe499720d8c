//! Project repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide create/read/delete APIs over `projects` storage.
//! - Resolve the parent organisation by name on every write path.
//!
//! # Invariants
//! - `(organisation, name)` pairs are unique; the same project name may
//!   exist under different organisations.
//! - A missing organisation fails the whole operation; nothing is inserted.

use crate::model::{Organisation, Project};
use crate::repo::organisation_repo::resolve_organisation;
use crate::repo::{ensure_schema_ready, map_delete_error, RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension, Row};

const PROJECT_SELECT_SQL: &str = "SELECT
    p.project_id,
    p.project_name,
    o.organisation_id,
    o.organisation_name
FROM projects p
INNER JOIN organisations o ON o.organisation_id = p.organisation_id";

/// Repository interface for project operations.
pub trait ProjectRepository {
    /// Inserts a new project under the named organisation.
    fn add(&self, organisation: &str, name: &str) -> RepoResult<Project>;
    /// Removes one project resolved by organisation and project name.
    fn delete(&self, organisation: &str, name: &str) -> RepoResult<()>;
    /// Lists all projects with their resolved organisations.
    fn list(&self) -> RepoResult<Vec<Project>>;
    /// Lists all projects under one organisation.
    fn list_by_organisation(&self, organisation: &str) -> RepoResult<Vec<Project>>;
}

/// SQLite-backed project repository.
pub struct SqliteProjectRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProjectRepository<'conn> {
    /// Creates a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_schema_ready(conn)?;
        Ok(Self { conn })
    }
}

impl ProjectRepository for SqliteProjectRepository<'_> {
    fn add(&self, organisation: &str, name: &str) -> RepoResult<Project> {
        let organisation = resolve_organisation(self.conn, organisation)?;

        if find_project(self.conn, &organisation, name)?.is_some() {
            return Err(RepoError::Duplicate {
                entity: "project",
                name: name.to_string(),
            });
        }

        self.conn.execute(
            "INSERT INTO projects (organisation_id, project_name) VALUES (?1, ?2);",
            params![organisation.id, name],
        )?;

        Ok(Project {
            id: self.conn.last_insert_rowid(),
            name: name.to_string(),
            organisation,
        })
    }

    fn delete(&self, organisation: &str, name: &str) -> RepoResult<()> {
        let organisation = resolve_organisation(self.conn, organisation)?;

        let changed = self
            .conn
            .execute(
                "DELETE FROM projects
                 WHERE organisation_id = ?1 AND project_name = ?2;",
                params![organisation.id, name],
            )
            .map_err(|err| map_delete_error(err, "project", name))?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "project",
                name: name.to_string(),
            });
        }

        Ok(())
    }

    fn list(&self) -> RepoResult<Vec<Project>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PROJECT_SELECT_SQL} ORDER BY p.project_id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut projects = Vec::new();
        while let Some(row) = rows.next()? {
            projects.push(parse_project_row(row)?);
        }

        Ok(projects)
    }

    fn list_by_organisation(&self, organisation: &str) -> RepoResult<Vec<Project>> {
        let organisation = resolve_organisation(self.conn, organisation)?;

        let mut stmt = self.conn.prepare(&format!(
            "{PROJECT_SELECT_SQL}
             WHERE p.organisation_id = ?1
             ORDER BY p.project_id ASC;"
        ))?;

        let mut rows = stmt.query([organisation.id])?;
        let mut projects = Vec::new();
        while let Some(row) = rows.next()? {
            projects.push(parse_project_row(row)?);
        }

        Ok(projects)
    }
}

pub(crate) fn parse_project_row(row: &Row<'_>) -> RepoResult<Project> {
    Ok(Project {
        id: row.get(0)?,
        name: row.get(1)?,
        organisation: Organisation {
            id: row.get(2)?,
            name: row.get(3)?,
        },
    })
}

/// Looks up one project under an already-resolved organisation. Shared
/// with the directory repository for parent resolution.
pub(crate) fn find_project(
    conn: &Connection,
    organisation: &Organisation,
    name: &str,
) -> RepoResult<Option<Project>> {
    let project = conn
        .query_row(
            "SELECT project_id, project_name
             FROM projects
             WHERE organisation_id = ?1 AND project_name = ?2;",
            params![organisation.id, name],
            |row| Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?)),
        )
        .optional()?;

    Ok(project.map(|(id, name)| Project {
        id,
        name,
        organisation: organisation.clone(),
    }))
}

/// Resolves one project by organisation and name or fails with `NotFound`.
pub(crate) fn resolve_project(
    conn: &Connection,
    organisation: &str,
    name: &str,
) -> RepoResult<Project> {
    let organisation = resolve_organisation(conn, organisation)?;
    find_project(conn, &organisation, name)?.ok_or_else(|| RepoError::NotFound {
        entity: "project",
        name: name.to_string(),
    })
}
