//! edsel-app - Editor registry and launching for edsel
//!
//! This crate implements the persistent editor registry ([`ConfigStore`]),
//! the process [`Launcher`] seam, and the [`CommandFacade`] that the
//! command-line binary drives.

pub mod commands;
pub mod config;
pub mod launcher;
pub mod output;

// Re-export primary types
pub use commands::{AddEditorRequest, CommandFacade, LaunchFailure, OpenReport};
pub use config::{resolve_registry_path, AddMode, ConfigStore, EditorFilter, Registry};
pub use launcher::{Launcher, ProcessLauncher};
pub use output::OutputFormat;

// Re-export core types for the binary
pub use edsel_core::{EditorRecord, Error, Result};
