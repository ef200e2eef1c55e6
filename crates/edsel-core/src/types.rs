//! Core domain types for edsel
//!
//! Defines:
//! - `EditorRecord` - A single named editor definition
//! - `fold_name` - The case-insensitive key used for editor names

use serde::{Deserialize, Serialize};

/// A registered editor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EditorRecord {
    /// Display name; unique under case-insensitive comparison
    pub name: String,

    /// Executable path or command name looked up on PATH
    pub path: String,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// Arguments passed before the file on every launch
    #[serde(default)]
    pub default_options: Vec<String>,

    /// Whether this is the registry's default editor
    #[serde(default)]
    pub is_default: bool,
}

impl EditorRecord {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            description: String::new(),
            default_options: Vec::new(),
            is_default: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Case-folded lookup key for this record
    pub fn key(&self) -> String {
        fold_name(&self.name)
    }

    /// Full argument list for opening `file`: default options, then the file.
    pub fn launch_args(&self, file: &str) -> Vec<String> {
        let mut args = self.default_options.clone();
        args.push(file.to_string());
        args
    }
}

/// Fold an editor name for case-insensitive comparison.
pub fn fold_name(name: &str) -> String {
    name.trim().to_lowercase()
}
