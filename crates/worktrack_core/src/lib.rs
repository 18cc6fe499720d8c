//! Core domain logic for worktrack.
//! This crate is the single source of truth for the organisation → project
//! → directory → entry hierarchy and its persistence invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{open_db, open_db_in_memory, StoreError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::{Directory, Entry, Organisation, Project};
pub use repo::directory_repo::{DirectoryRepository, SqliteDirectoryRepository};
pub use repo::entry_repo::{EntryRepository, SqliteEntryRepository};
pub use repo::organisation_repo::{OrganisationRepository, SqliteOrganisationRepository};
pub use repo::project_repo::{ProjectRepository, SqliteProjectRepository};
pub use repo::{RepoError, RepoResult};
pub use service::directory_service::{DirectoryService, RegisterDirectoryRequest};
pub use service::entry_service::EntryService;
pub use service::organisation_service::OrganisationService;
pub use service::project_service::{ProjectRequest, ProjectService};
pub use service::CommandContext;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
