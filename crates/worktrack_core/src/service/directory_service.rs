//! Directory use-case service.
//!
//! # Responsibility
//! - Provide stable add/delete/info/list entry points for dispatchers.
//! - Delegate persistence and parent resolution to the directory
//!   repository.

use crate::model::Directory;
use crate::repo::directory_repo::DirectoryRepository;
use crate::repo::RepoResult;
use crate::service::CommandContext;
use log::info;

/// Request model for registering one absolute path under a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterDirectoryRequest {
    /// Parent organisation name.
    pub organisation: String,
    /// Parent project name within the organisation.
    pub project: String,
    /// Filesystem-absolute path to register.
    pub path: String,
}

/// Use-case service wrapper for directory commands.
pub struct DirectoryService<R: DirectoryRepository> {
    repo: R,
}

impl<R: DirectoryRepository> DirectoryService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers a directory under the requested organisation/project.
    pub fn add(
        &self,
        context: &CommandContext,
        request: &RegisterDirectoryRequest,
    ) -> RepoResult<Directory> {
        let directory = self
            .repo
            .add(&request.organisation, &request.project, &request.path)?;
        info!(
            "event=directory_add module=service status=ok interface={} user={} organisation={} project={} path={}",
            context.interface,
            context.username,
            request.organisation,
            request.project,
            request.path
        );
        Ok(directory)
    }

    /// Removes one directory by absolute path.
    pub fn delete(&self, context: &CommandContext, path: &str) -> RepoResult<()> {
        self.repo.delete(path)?;
        info!(
            "event=directory_delete module=service status=ok interface={} user={} path={path}",
            context.interface, context.username
        );
        Ok(())
    }

    /// Loads one directory with its resolved project and organisation.
    pub fn info(&self, context: &CommandContext, path: &str) -> RepoResult<Directory> {
        let directory = self.repo.info(path)?;
        info!(
            "event=directory_info module=service status=ok interface={} user={} path={path}",
            context.interface, context.username
        );
        Ok(directory)
    }

    /// Lists all directories with resolved parents.
    pub fn list(&self, context: &CommandContext) -> RepoResult<Vec<Directory>> {
        let directories = self.repo.list()?;
        info!(
            "event=directory_list module=service status=ok interface={} user={} rows={}",
            context.interface,
            context.username,
            directories.len()
        );
        Ok(directories)
    }
}
