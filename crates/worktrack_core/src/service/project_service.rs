//! Project use-case service.
//!
//! # Responsibility
//! - Provide stable add/delete/list entry points for dispatchers.
//! - Delegate persistence and parent resolution to the project repository.

use crate::model::Project;
use crate::repo::project_repo::ProjectRepository;
use crate::repo::RepoResult;
use crate::service::CommandContext;
use log::info;

/// Request model addressing one project by its parent organisation and
/// name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRequest {
    /// Parent organisation name.
    pub organisation: String,
    /// Project name, unique within the organisation.
    pub name: String,
}

/// Use-case service wrapper for project commands.
pub struct ProjectService<R: ProjectRepository> {
    repo: R,
}

impl<R: ProjectRepository> ProjectService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Inserts a new project under the requested organisation.
    pub fn add(&self, context: &CommandContext, request: &ProjectRequest) -> RepoResult<Project> {
        let project = self.repo.add(&request.organisation, &request.name)?;
        info!(
            "event=project_add module=service status=ok interface={} user={} organisation={} name={}",
            context.interface, context.username, request.organisation, request.name
        );
        Ok(project)
    }

    /// Removes one project resolved by organisation and name.
    pub fn delete(&self, context: &CommandContext, request: &ProjectRequest) -> RepoResult<()> {
        self.repo.delete(&request.organisation, &request.name)?;
        info!(
            "event=project_delete module=service status=ok interface={} user={} organisation={} name={}",
            context.interface, context.username, request.organisation, request.name
        );
        Ok(())
    }

    /// Lists all projects with their resolved organisations.
    pub fn list(&self, context: &CommandContext) -> RepoResult<Vec<Project>> {
        let projects = self.repo.list()?;
        info!(
            "event=project_list module=service status=ok interface={} user={} rows={}",
            context.interface,
            context.username,
            projects.len()
        );
        Ok(projects)
    }

    /// Lists all projects under one organisation.
    pub fn list_by_organisation(
        &self,
        context: &CommandContext,
        organisation: &str,
    ) -> RepoResult<Vec<Project>> {
        let projects = self.repo.list_by_organisation(organisation)?;
        info!(
            "event=project_list module=service status=ok interface={} user={} organisation={organisation} rows={}",
            context.interface,
            context.username,
            projects.len()
        );
        Ok(projects)
    }
}
