//! Command dispatch: one executed service call per invocation.
//!
//! # Responsibility
//! - Capture ambient process state (cwd, user) once and pass it on
//!   explicitly.
//! - Open the store for the duration of one command; the connection is
//!   released on drop regardless of outcome.
//! - Render successful results; let errors propagate to `main`.

use crate::commands::{
    Cli, Commands, DatabaseCommands, DirectoryCommands, EntryCommands, OrganisationCommands,
    ProjectCommands,
};
use crate::render;
use std::env;
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use worktrack_core::{
    default_log_level, init_logging, open_db, CommandContext, DirectoryService, EntryService,
    OrganisationService, ProjectRequest, ProjectService, RegisterDirectoryRequest,
    SqliteDirectoryRepository, SqliteEntryRepository, SqliteOrganisationRepository,
    SqliteProjectRepository,
};

pub fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let db_path = database_path(cli.database)?;
    if let Some(parent) = db_path.parent() {
        fs::create_dir_all(parent)?;
    }

    // Logging problems degrade to a warning; they never block the command.
    let log_level = cli.log_level.as_deref().unwrap_or(default_log_level());
    if let Err(message) = init_logging(log_level, &db_path.parent().unwrap_or(&db_path).join("logs"))
    {
        eprintln!("Warning: file logging disabled: {message}");
    }

    let context = CommandContext::new("cli", current_username());
    let conn = open_db(&db_path)?;

    match cli.command {
        Commands::Database { command } => match command {
            // Schema creation is idempotent and already happened in
            // `open_db`; this command only makes it explicit.
            DatabaseCommands::Create => {}
        },

        Commands::Organisation { command } => {
            let service = OrganisationService::new(SqliteOrganisationRepository::try_new(&conn)?);
            match command {
                OrganisationCommands::Add { name } => {
                    service.add(&context, &name)?;
                }
                OrganisationCommands::Delete { name } => {
                    service.delete(&context, &name)?;
                }
                OrganisationCommands::List => {
                    let organisations = service.list(&context)?;
                    println!("{}", render::organisation_table(&organisations));
                }
            }
        }

        Commands::Project { command } => {
            let service = ProjectService::new(SqliteProjectRepository::try_new(&conn)?);
            match command {
                ProjectCommands::Add { organisation, name } => {
                    service.add(&context, &ProjectRequest { organisation, name })?;
                }
                ProjectCommands::Delete { organisation, name } => {
                    service.delete(&context, &ProjectRequest { organisation, name })?;
                }
                ProjectCommands::List { organisation } => {
                    let projects = match organisation {
                        Some(name) => service.list_by_organisation(&context, &name)?,
                        None => service.list(&context)?,
                    };
                    println!("{}", render::project_table(&projects));
                }
            }
        }

        Commands::Directory { command } => {
            let service = DirectoryService::new(SqliteDirectoryRepository::try_new(&conn)?);
            match command {
                DirectoryCommands::Add {
                    organisation,
                    project,
                    path,
                } => {
                    let request = RegisterDirectoryRequest {
                        organisation,
                        project,
                        path: resolve_path(path)?,
                    };
                    service.add(&context, &request)?;
                }
                DirectoryCommands::Delete { path } => {
                    service.delete(&context, &resolve_path(path)?)?;
                }
                DirectoryCommands::Info { path } => {
                    let directory = service.info(&context, &resolve_path(path)?)?;
                    println!("{}", render::directory_details(&directory));
                }
                DirectoryCommands::List => {
                    let directories = service.list(&context)?;
                    println!("{}", render::directory_table(&directories));
                }
            }
        }

        Commands::Entry { command } => {
            let service = EntryService::new(SqliteEntryRepository::try_new(&conn)?);
            match command {
                EntryCommands::Add { path } => {
                    service.add(&context, &resolve_path(path)?)?;
                }
                EntryCommands::List => {
                    let entries = service.list(&context)?;
                    println!("{}", render::entry_table(&entries));
                }
            }
        }
    }

    Ok(())
}

/// Picks the store location: explicit flag/env first, then the home
/// default, then a per-process temp fallback.
fn database_path(database: Option<PathBuf>) -> std::io::Result<PathBuf> {
    let path = database.unwrap_or_else(|| {
        if let Some(home) = dirs::home_dir() {
            home.join(".worktrack").join("worktrack.db")
        } else {
            env::temp_dir().join(format!("worktrack_{}.db", std::process::id()))
        }
    });
    std::path::absolute(path)
}

/// Resolves an optional path argument to an absolute path, defaulting to
/// the current working directory. The path does not have to exist.
fn resolve_path(path: Option<PathBuf>) -> std::io::Result<String> {
    let path = match path {
        Some(path) => path,
        None => env::current_dir()?,
    };
    Ok(std::path::absolute(path)?.to_string_lossy().into_owned())
}

fn current_username() -> String {
    env::var("USER")
        .or_else(|_| env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string())
}
