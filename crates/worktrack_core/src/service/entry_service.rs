//! Entry use-case service.
//!
//! # Responsibility
//! - Provide stable add/list entry points for dispatchers.
//! - Inject the call-time timestamp so the repository stays clock-free.

use crate::model::Entry;
use crate::repo::entry_repo::EntryRepository;
use crate::repo::RepoResult;
use crate::service::CommandContext;
use chrono::Utc;
use log::info;

/// Use-case service wrapper for entry commands.
pub struct EntryService<R: EntryRepository> {
    repo: R,
}

impl<R: EntryRepository> EntryService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Records an entry for the directory registered at `path`,
    /// timestamped at call time.
    pub fn add(&self, context: &CommandContext, path: &str) -> RepoResult<Entry> {
        let entry = self.repo.add(path, Utc::now())?;
        info!(
            "event=entry_add module=service status=ok interface={} user={} path={path}",
            context.interface, context.username
        );
        Ok(entry)
    }

    /// Lists all entries with resolved parents.
    pub fn list(&self, context: &CommandContext) -> RepoResult<Vec<Entry>> {
        let entries = self.repo.list()?;
        info!(
            "event=entry_list module=service status=ok interface={} user={} rows={}",
            context.interface,
            context.username,
            entries.len()
        );
        Ok(entries)
    }
}
