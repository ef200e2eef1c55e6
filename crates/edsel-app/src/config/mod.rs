//! Editor registry storage for edsel
//!
//! Supports:
//! - `<config_dir>/edsel/editors.toml` - The persisted registry
//! - `EDSEL_CONFIG` - Override for the registry location

pub mod paths;
pub mod registry;
pub mod schema;
pub mod seed;
pub mod store;

pub use paths::{default_registry_path, resolve_registry_path, CONFIG_ENV};
pub use registry::{AddMode, EditorFilter, Registry};
pub use schema::{parse_registry, render_registry, RegistryFile, StoredEditor, SCHEMA_VERSION};
pub use seed::{primary_editor, seed_registry, Probe, SeedEditor, SystemProbe, KNOWN_EDITORS};
pub use store::ConfigStore;
