//! Command layer over the editor registry
//!
//! [`CommandFacade`] validates user input, delegates to the
//! [`ConfigStore`], and resolves editors for `open`.

use crate::config::{AddMode, ConfigStore, EditorFilter};
use crate::launcher::Launcher;
use edsel_core::prelude::*;
use edsel_core::EditorRecord;
use serde::Serialize;
use std::path::Path;

// ─────────────────────────────────────────────────────────────────────────────
// Request / Result Types
// ─────────────────────────────────────────────────────────────────────────────

/// Parameters for registering an editor.
#[derive(Debug, Clone, Default)]
pub struct AddEditorRequest {
    pub name: String,
    pub description: String,
    pub path: String,
    pub options: Vec<String>,
    pub make_default: bool,
    /// Replace an existing editor with the same name instead of failing
    pub overwrite: bool,
}

/// A file the launcher could not open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchFailure {
    pub file: String,
    pub message: String,
}

/// Outcome of opening a batch of files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenReport {
    /// Name of the editor used
    pub editor: String,
    /// Files handed to the editor successfully
    pub launched: Vec<String>,
    /// Files whose launch failed
    pub failed: Vec<LaunchFailure>,
}

impl OpenReport {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }

    /// True when at least one file was requested and none launched
    pub fn all_failed(&self) -> bool {
        self.launched.is_empty() && !self.failed.is_empty()
    }

    /// One `LaunchFailed` error per failed file
    pub fn errors(&self) -> impl Iterator<Item = Error> + '_ {
        self.failed
            .iter()
            .map(|f| Error::launch_failed(&self.editor, &f.file, &f.message))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Facade
// ─────────────────────────────────────────────────────────────────────────────

/// Entry point for every user-facing operation.
pub struct CommandFacade<L: Launcher> {
    store: ConfigStore,
    launcher: L,
}

impl<L: Launcher> CommandFacade<L> {
    pub fn new(store: ConfigStore, launcher: L) -> Self {
        Self { store, launcher }
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    /// The registry file this facade reads and writes
    pub fn config_path(&self) -> &Path {
        self.store.path()
    }

    pub fn add_editor(&mut self, request: AddEditorRequest) -> Result<EditorRecord> {
        let name = request.name.trim();
        let path = request.path.trim();

        if name.is_empty() {
            return Err(Error::invalid_argument("editor name must not be empty"));
        }
        if path.is_empty() {
            return Err(Error::invalid_argument("editor path must not be empty"));
        }

        let record = EditorRecord::new(name, path)
            .with_description(request.description.trim())
            .with_options(request.options);
        let mode = if request.overwrite {
            AddMode::Overwrite
        } else {
            AddMode::Strict
        };

        self.store
            .add_with_mode(record, request.make_default, mode)
    }

    pub fn list_editors(&self, filter: &EditorFilter) -> Result<Vec<EditorRecord>> {
        Ok(self
            .store
            .query(filter)?
            .into_iter()
            .cloned()
            .collect())
    }

    pub fn remove_editor(&mut self, name: &str) -> Result<Option<EditorRecord>> {
        self.store.remove(name)
    }

    pub fn set_default_editor(&mut self, name: &str) -> Result<EditorRecord> {
        self.store.set_default(name)
    }

    /// Open each file in the named editor, or the default one.
    ///
    /// Launch failures are collected per file; the remaining files are
    /// still attempted. Only editor resolution errors fail the call.
    pub fn open<S: AsRef<str>>(&self, files: &[S], editor: Option<&str>) -> Result<OpenReport> {
        if files.is_empty() {
            return Err(Error::invalid_argument("no files to open"));
        }

        let record = match editor {
            Some(name) => self.store.get(name)?,
            None => self.store.default_editor()?,
        };

        let mut report = OpenReport {
            editor: record.name.clone(),
            launched: Vec::new(),
            failed: Vec::new(),
        };

        for file in files {
            let file = file.as_ref();
            let args = record.launch_args(file);

            match self.launcher.launch(&record.path, &args) {
                Ok(()) => {
                    info!("Opened {} with {}", file, record.name);
                    report.launched.push(file.to_string());
                }
                Err(e) => {
                    warn!("Failed to open {} with {}: {}", file, record.name, e);
                    report.failed.push(LaunchFailure {
                        file: file.to_string(),
                        message: e.to_string(),
                    });
                }
            }
        }

        Ok(report)
    }
}
