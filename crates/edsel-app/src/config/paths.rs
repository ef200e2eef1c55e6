//! Location of the registry file

use std::path::{Path, PathBuf};

/// Environment variable overriding the registry file location
pub const CONFIG_ENV: &str = "EDSEL_CONFIG";

const APP_DIR: &str = "edsel";
const REGISTRY_FILENAME: &str = "editors.toml";

/// Resolve the registry file path.
///
/// Priority order:
/// 1. Explicit path (e.g. from `--config`)
/// 2. `EDSEL_CONFIG` environment variable
/// 3. `<config_dir>/edsel/editors.toml`
pub fn resolve_registry_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
        return PathBuf::from(path);
    }

    default_registry_path()
}

/// Per-user default location of the registry file
pub fn default_registry_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(APP_DIR).join(REGISTRY_FILENAME)
}
