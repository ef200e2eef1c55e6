//! On-disk schema for the editor registry
//!
//! The registry is stored as TOML:
//!
//! ```toml
//! version = 1
//! default = "vim"
//!
//! [editors.vim]
//! path = "vim"
//! description = "Vi IMproved"
//! default_options = ["-p"]
//! is_default = true
//! ```
//!
//! Table keys are display names. `version` lets future field changes be
//! migrated; files newer than [`SCHEMA_VERSION`] are rejected.

use super::registry::Registry;
use edsel_core::EditorRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Current schema version written by this build
pub const SCHEMA_VERSION: u32 = 1;

/// Top-level document of the registry file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RegistryFile {
    /// Schema version; files written before versioning read as 1
    #[serde(default = "current_version")]
    pub version: u32,

    /// Display name of the default editor
    #[serde(default)]
    pub default: String,

    /// Editors keyed by display name
    #[serde(default)]
    pub editors: BTreeMap<String, StoredEditor>,
}

/// One editor entry; its name is the table key
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StoredEditor {
    pub path: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub default_options: Vec<String>,

    #[serde(default)]
    pub is_default: bool,
}

fn current_version() -> u32 {
    SCHEMA_VERSION
}

impl From<&Registry> for RegistryFile {
    fn from(registry: &Registry) -> Self {
        let editors = registry
            .editors()
            .map(|record| {
                (
                    record.name.clone(),
                    StoredEditor {
                        path: record.path.clone(),
                        description: record.description.clone(),
                        default_options: record.default_options.clone(),
                        is_default: record.is_default,
                    },
                )
            })
            .collect();

        Self {
            version: SCHEMA_VERSION,
            default: registry.default_name().to_string(),
            editors,
        }
    }
}

impl RegistryFile {
    /// Convert into a [`Registry`], validating version and invariants.
    pub fn into_registry(self) -> Result<Registry, String> {
        if self.version > SCHEMA_VERSION {
            return Err(format!(
                "schema version {} is newer than supported version {}",
                self.version, SCHEMA_VERSION
            ));
        }

        let records = self.editors.into_iter().map(|(name, stored)| EditorRecord {
            name,
            path: stored.path,
            description: stored.description,
            default_options: stored.default_options,
            is_default: stored.is_default,
        });

        Registry::from_parts(self.default, records)
    }
}

/// Parse registry file content.
pub fn parse_registry(content: &str) -> Result<Registry, String> {
    let file: RegistryFile = toml::from_str(content).map_err(|e| e.to_string())?;
    file.into_registry()
}

/// Render a registry as file content, including the header comment.
pub fn render_registry(registry: &Registry) -> Result<String, String> {
    let body = toml::to_string_pretty(&RegistryFile::from(registry)).map_err(|e| e.to_string())?;
    Ok(format!("{}{}", generate_header(), body))
}

fn generate_header() -> String {
    r#"# edsel editor registry
# Managed by `edsel add-editor`, `remove-editor` and `set-default`

"#
    .to_string()
}
