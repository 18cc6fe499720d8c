//! Command-line surface definition.
//!
//! # Responsibility
//! - Declare the full subcommand tree and shared global options.
//! - Keep argument parsing declarative; behavior lives in `handlers`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "worktrack")]
#[command(version, about = "Track organisations, projects, directories and work entries")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the SQLite database file
    #[arg(long, global = true, value_name = "PATH", env = "WORKTRACK_DB")]
    pub database: Option<PathBuf>,

    /// File log verbosity (trace|debug|info|warn|error)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Database commands
    Database {
        #[command(subcommand)]
        command: DatabaseCommands,
    },

    /// Organisation commands
    Organisation {
        #[command(subcommand)]
        command: OrganisationCommands,
    },

    /// Project commands
    Project {
        #[command(subcommand)]
        command: ProjectCommands,
    },

    /// Directory commands
    Directory {
        #[command(subcommand)]
        command: DirectoryCommands,
    },

    /// Entry commands
    Entry {
        #[command(subcommand)]
        command: EntryCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum DatabaseCommands {
    /// Create the database schema
    Create,
}

#[derive(Subcommand, Debug)]
pub enum OrganisationCommands {
    /// Add a new organisation
    Add {
        /// Organisation name
        name: String,
    },

    /// Delete an organisation
    Delete {
        /// Organisation name
        name: String,
    },

    /// List all organisations
    List,
}

#[derive(Subcommand, Debug)]
pub enum ProjectCommands {
    /// Add a new project
    Add {
        /// Parent organisation name
        organisation: String,

        /// Project name
        name: String,
    },

    /// Delete a project
    Delete {
        /// Parent organisation name
        organisation: String,

        /// Project name
        name: String,
    },

    /// List all projects
    List {
        /// Restrict the listing to one organisation
        #[arg(short, long, value_name = "NAME")]
        organisation: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum DirectoryCommands {
    /// Register a directory under an organisation and project
    Add {
        /// Parent organisation name
        organisation: String,

        /// Parent project name
        project: String,

        /// Directory path (defaults to the current directory)
        path: Option<PathBuf>,
    },

    /// Delete a registered directory
    Delete {
        /// Directory path (defaults to the current directory)
        path: Option<PathBuf>,
    },

    /// Show organisation, project and path for a registered directory
    Info {
        /// Directory path (defaults to the current directory)
        path: Option<PathBuf>,
    },

    /// List all registered directories
    List,
}

#[derive(Subcommand, Debug)]
pub enum EntryCommands {
    /// Record an entry for a registered directory
    Add {
        /// Directory path (defaults to the current directory)
        path: Option<PathBuf>,
    },

    /// List all entries
    List,
}
