//! Domain model for the organisation → project → directory → entry
//! hierarchy.
//!
//! # Responsibility
//! - Define the canonical read models returned by repositories.
//! - Keep parent resolution explicit: every child embeds its resolved
//!   parent chain.
//!
//! # Invariants
//! - Ids are store-assigned rowids and never reused within one store.
//! - `Directory::path` is always a filesystem-absolute path.

use chrono::{DateTime, Utc};

/// Stable identifier for an organisation row.
pub type OrganisationId = i64;
/// Stable identifier for a project row.
pub type ProjectId = i64;
/// Stable identifier for a directory row.
pub type DirectoryId = i64;
/// Stable identifier for an entry row.
pub type EntryId = i64;

/// Top-level grouping entity. Names are unique across the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Organisation {
    pub id: OrganisationId,
    pub name: String,
}

/// Project scoped to exactly one organisation. `(organisation, name)`
/// pairs are unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    /// Resolved parent organisation.
    pub organisation: Organisation,
}

/// Filesystem path registered under exactly one project. Paths are
/// unique globally, not per project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directory {
    pub id: DirectoryId,
    /// Absolute path as registered at add time.
    pub path: String,
    /// Resolved parent project (with its organisation).
    pub project: Project,
}

/// Timestamped record registered under one directory. The project is
/// derived transitively through the directory at add time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: EntryId,
    /// Directory path captured when the entry was recorded.
    pub name: String,
    /// Call-time timestamp, stored as RFC 3339 UTC text.
    pub recorded_at: DateTime<Utc>,
    /// Resolved parent project (with its organisation).
    pub project: Project,
}
