//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define create/read/delete contracts per hierarchy level.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Parent references are resolved by name lookup; a missing parent is a
//!   semantic `NotFound`, never a silent partial insert.
//! - Repository APIs return semantic errors (`NotFound`, `Duplicate`) in
//!   addition to store transport errors.

use crate::db::migrations::latest_version;
use crate::db::StoreError;
use rusqlite::{Connection, ErrorCode};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod directory_repo;
pub mod entry_repo;
pub mod organisation_repo;
pub mod project_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Errors shared by all hierarchy repositories.
#[derive(Debug)]
pub enum RepoError {
    /// Underlying SQLite/bootstrap error.
    Store(StoreError),
    /// Referenced parent or target row is absent.
    NotFound { entity: &'static str, name: String },
    /// A uniqueness invariant would be violated by the insert.
    Duplicate { entity: &'static str, name: String },
    /// Target row still has child rows; deletes do not cascade.
    DependentRows { entity: &'static str, name: String },
    /// Directory paths must be filesystem-absolute.
    RelativePath(String),
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Persisted data cannot be converted to a valid read model.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::NotFound { entity, name } => write!(f, "{entity} not found: {name}"),
            Self::Duplicate { entity, name } => write!(f, "{entity} already exists: {name}"),
            Self::DependentRows { entity, name } => {
                write!(f, "{entity} still has dependent rows: {name}")
            }
            Self::RelativePath(path) => {
                write!(f, "directory path must be absolute, got `{path}`")
            }
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "repository requires schema version {expected_version}, got {actual_version}"
            ),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Store(StoreError::Sqlite(value))
    }
}

/// Verifies that the connection has been migrated to the version this
/// binary expects. Repositories call this from `try_new`.
pub(crate) fn ensure_schema_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }
    Ok(())
}

/// Maps a foreign-key constraint failure on a delete to the semantic
/// dependent-rows error; everything else stays a store error.
pub(crate) fn map_delete_error(
    err: rusqlite::Error,
    entity: &'static str,
    name: &str,
) -> RepoError {
    match err {
        rusqlite::Error::SqliteFailure(code, _)
            if code.code == ErrorCode::ConstraintViolation =>
        {
            RepoError::DependentRows {
                entity,
                name: name.to_string(),
            }
        }
        other => RepoError::Store(StoreError::Sqlite(other)),
    }
}
