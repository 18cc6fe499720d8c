//! Core use-case services, one per hierarchy level.
//!
//! # Responsibility
//! - Adapt one CLI command to exactly one repository call.
//! - Emit one structured log event per executed command.
//!
//! # Invariants
//! - Services add no business logic and propagate repository errors
//!   unchanged.
//! - Ambient process state (caller identity, interface) arrives as an
//!   explicit `CommandContext`, never via globals.

pub mod directory_service;
pub mod entry_service;
pub mod organisation_service;
pub mod project_service;

/// Explicit caller metadata attached to every executed command.
///
/// Replaces implicit process state: the dispatcher captures it once and
/// threads it through; services use it for log attribution only.
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Invoking surface, e.g. `cli`.
    pub interface: &'static str,
    /// Caller identity as reported by the invoking surface.
    pub username: String,
}

impl CommandContext {
    pub fn new(interface: &'static str, username: impl Into<String>) -> Self {
        Self {
            interface,
            username: username.into(),
        }
    }
}
