//! Organisation use-case service.
//!
//! # Responsibility
//! - Provide stable add/delete/list entry points for dispatchers.
//! - Delegate persistence to the organisation repository.

use crate::model::Organisation;
use crate::repo::organisation_repo::OrganisationRepository;
use crate::repo::RepoResult;
use crate::service::CommandContext;
use log::info;

/// Use-case service wrapper for organisation commands.
pub struct OrganisationService<R: OrganisationRepository> {
    repo: R,
}

impl<R: OrganisationRepository> OrganisationService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Inserts a new organisation.
    pub fn add(&self, context: &CommandContext, name: &str) -> RepoResult<Organisation> {
        let organisation = self.repo.add(name)?;
        info!(
            "event=organisation_add module=service status=ok interface={} user={} name={name}",
            context.interface, context.username
        );
        Ok(organisation)
    }

    /// Removes one organisation by name.
    pub fn delete(&self, context: &CommandContext, name: &str) -> RepoResult<()> {
        self.repo.delete(name)?;
        info!(
            "event=organisation_delete module=service status=ok interface={} user={} name={name}",
            context.interface, context.username
        );
        Ok(())
    }

    /// Lists all organisations in insertion order.
    pub fn list(&self, context: &CommandContext) -> RepoResult<Vec<Organisation>> {
        let organisations = self.repo.list()?;
        info!(
            "event=organisation_list module=service status=ok interface={} user={} rows={}",
            context.interface,
            context.username,
            organisations.len()
        );
        Ok(organisations)
    }
}
