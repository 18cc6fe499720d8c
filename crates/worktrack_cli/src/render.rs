//! Fixed-width table rendering for list and info output.
//!
//! # Responsibility
//! - Render read models as columnar text, one row per record.
//!
//! # Invariants
//! - Header and separator rows are always present, even with zero data
//!   rows.
//! - Column layout: `id` right-aligned width 3, `organisation`
//!   right-aligned width 12, `project` left-aligned width 12; trailing
//!   path/entry columns are unpadded.

use worktrack_core::{Directory, Entry, Organisation, Project};

/// Renders the `organisation list` table.
pub fn organisation_table(organisations: &[Organisation]) -> String {
    let mut lines = vec![
        format!("| {:>3} | {:>12} |", "id", "organisation"),
        format!("| {} | {} |", "-".repeat(3), "-".repeat(12)),
    ];
    for organisation in organisations {
        lines.push(format!(
            "| {:>3} | {:>12} |",
            organisation.id, organisation.name
        ));
    }
    lines.join("\n")
}

/// Renders the `project list` table.
pub fn project_table(projects: &[Project]) -> String {
    let mut lines = vec![
        format!("| {:>3} | {:>12} | {:<12} |", "id", "organisation", "project"),
        format!(
            "| {} | {} | {} |",
            "-".repeat(3),
            "-".repeat(12),
            "-".repeat(12)
        ),
    ];
    for project in projects {
        lines.push(format!(
            "| {:>3} | {:>12} | {:<12} |",
            project.id, project.organisation.name, project.name
        ));
    }
    lines.join("\n")
}

/// Renders the `directory list` table.
pub fn directory_table(directories: &[Directory]) -> String {
    let mut lines = vec![
        format!(
            "| {:>3} | {:>12} | {:<12} |  directory",
            "id", "organisation", "project"
        ),
        format!(
            "| {} | {} | {} | {}",
            "-".repeat(3),
            "-".repeat(12),
            "-".repeat(12),
            "-".repeat(12)
        ),
    ];
    for directory in directories {
        lines.push(format!(
            "| {:>3} | {:>12} | {:<12} | {}",
            directory.id,
            directory.project.organisation.name,
            directory.project.name,
            directory.path
        ));
    }
    lines.join("\n")
}

/// Renders the `entry list` table.
pub fn entry_table(entries: &[Entry]) -> String {
    let mut lines = vec![
        format!(
            "| {:>3} | {:>12} | {:<12} |  entry",
            "id", "organisation", "project"
        ),
        format!(
            "| {} | {} | {} | {}",
            "-".repeat(3),
            "-".repeat(12),
            "-".repeat(12),
            "-".repeat(12)
        ),
    ];
    for entry in entries {
        lines.push(format!(
            "| {:>3} | {:>12} | {:<12} | {}",
            entry.id, entry.project.organisation.name, entry.project.name, entry.name
        ));
    }
    lines.join("\n")
}

/// Renders the `directory info` detail block.
pub fn directory_details(directory: &Directory) -> String {
    format!(
        "organisation: {}\n     project: {}\n   directory: {}",
        directory.project.organisation.name, directory.project.name, directory.path
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_project() -> Project {
        Project {
            id: 7,
            name: "Widgets".to_string(),
            organisation: Organisation {
                id: 1,
                name: "Acme".to_string(),
            },
        }
    }

    #[test]
    fn empty_organisation_table_has_header_and_separator_only() {
        let table = organisation_table(&[]);
        assert_eq!(table, "|  id | organisation |\n| --- | ------------ |");
    }

    #[test]
    fn organisation_rows_are_right_aligned() {
        let organisations = vec![Organisation {
            id: 1,
            name: "Acme".to_string(),
        }];
        let table = organisation_table(&organisations);
        assert!(table.ends_with("|   1 |         Acme |"));
    }

    #[test]
    fn project_rows_align_organisation_right_and_project_left() {
        let table = project_table(&[sample_project()]);
        assert!(table.ends_with("|   7 |         Acme | Widgets      |"));
    }

    #[test]
    fn directory_table_keeps_path_unpadded() {
        let directories = vec![Directory {
            id: 3,
            path: "/tmp/x".to_string(),
            project: sample_project(),
        }];
        let table = directory_table(&directories);
        assert!(table.ends_with("|   3 |         Acme | Widgets      | /tmp/x"));
    }

    #[test]
    fn entry_table_lists_entry_names() {
        let entries = vec![Entry {
            id: 2,
            name: "/tmp/x".to_string(),
            recorded_at: chrono_now(),
            project: sample_project(),
        }];
        let table = entry_table(&entries);
        assert!(table.ends_with("|   2 |         Acme | Widgets      | /tmp/x"));
    }

    #[test]
    fn directory_details_aligns_labels() {
        let directory = Directory {
            id: 3,
            path: "/tmp/x".to_string(),
            project: sample_project(),
        };
        assert_eq!(
            directory_details(&directory),
            "organisation: Acme\n     project: Widgets\n   directory: /tmp/x"
        );
    }

    fn chrono_now() -> chrono::DateTime<chrono::Utc> {
        chrono::Utc::now()
    }
}
