//! In-memory editor registry
//!
//! Holds the editor records keyed by folded name plus the default pointer.
//! All operations here are pure; persistence is layered on top by
//! [`ConfigStore`](super::store::ConfigStore).

use edsel_core::prelude::*;
use edsel_core::{fold_name, EditorRecord};
use std::collections::BTreeMap;

/// Which records a query should return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorFilter {
    /// Every record, sorted by folded name
    All,
    /// A single record by (case-insensitive) name
    Name(String),
    /// The current default record
    Default,
}

/// How `add` treats an existing record with the same folded name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddMode {
    /// Reject with `DuplicateName`
    #[default]
    Strict,
    /// Replace the existing record
    Overwrite,
}

/// Editor records plus the designated default.
///
/// Invariants maintained by every mutator:
/// - names are unique after folding
/// - `default_name` is empty iff the registry is empty
/// - exactly the record named by `default_name` has `is_default` set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    default_name: String,
    editors: BTreeMap<String, EditorRecord>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from already-stored parts, checking the invariants.
    ///
    /// Returns a description of the first violation found.
    pub fn from_parts(
        default_name: String,
        records: impl IntoIterator<Item = EditorRecord>,
    ) -> std::result::Result<Self, String> {
        let mut editors = BTreeMap::new();
        for record in records {
            if record.name.trim().is_empty() {
                return Err("editor with an empty name".to_string());
            }
            let key = record.key();
            if editors.contains_key(&key) {
                return Err(format!("duplicate editor name '{}'", record.name));
            }
            editors.insert(key, record);
        }

        let mut registry = Self {
            default_name,
            editors,
        };
        registry.check_default()?;

        // Store the record's own spelling of the default name
        if let Some(record) = registry.editors.get(&fold_name(&registry.default_name)) {
            registry.default_name = record.name.clone();
        }
        Ok(registry)
    }

    fn check_default(&self) -> std::result::Result<(), String> {
        if self.editors.is_empty() {
            if !self.default_name.is_empty() {
                return Err(format!(
                    "default editor '{}' is set but no editors are registered",
                    self.default_name
                ));
            }
            return Ok(());
        }

        let default_key = fold_name(&self.default_name);
        if !self.editors.contains_key(&default_key) {
            return Err(format!(
                "default editor '{}' is not registered",
                self.default_name
            ));
        }

        for (key, record) in &self.editors {
            if record.is_default != (*key == default_key) {
                return Err(format!(
                    "default flag on '{}' does not match default editor '{}'",
                    record.name, self.default_name
                ));
            }
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.editors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.editors.len()
    }

    /// Name of the default editor, empty when nothing is registered
    pub fn default_name(&self) -> &str {
        &self.default_name
    }

    pub fn contains(&self, name: &str) -> bool {
        self.editors.contains_key(&fold_name(name))
    }

    /// All records sorted by folded name
    pub fn editors(&self) -> impl Iterator<Item = &EditorRecord> {
        self.editors.values()
    }

    pub fn get(&self, name: &str) -> Result<&EditorRecord> {
        self.editors
            .get(&fold_name(name))
            .ok_or_else(|| Error::unknown_editor(name))
    }

    pub fn default_editor(&self) -> Result<&EditorRecord> {
        if self.default_name.is_empty() {
            return Err(Error::NoDefaultConfigured);
        }
        self.editors
            .get(&fold_name(&self.default_name))
            .ok_or(Error::NoDefaultConfigured)
    }

    pub fn query(&self, filter: &EditorFilter) -> Result<Vec<&EditorRecord>> {
        match filter {
            EditorFilter::All => Ok(self.editors().collect()),
            EditorFilter::Name(name) => Ok(vec![self.get(name)?]),
            EditorFilter::Default => Ok(vec![self.default_editor()?]),
        }
    }

    /// Insert a record.
    ///
    /// The first record added to an empty registry becomes the default even
    /// when `make_default` is false.
    pub fn add(
        &mut self,
        mut record: EditorRecord,
        make_default: bool,
        mode: AddMode,
    ) -> Result<&EditorRecord> {
        record.name = record.name.trim().to_string();
        if record.name.is_empty() {
            return Err(Error::invalid_argument("editor name must not be empty"));
        }

        let key = record.key();
        let replaced_default = match self.editors.get(&key) {
            Some(existing) if mode == AddMode::Strict => {
                return Err(Error::duplicate_name(&existing.name));
            }
            Some(existing) => existing.is_default,
            None => false,
        };

        let becomes_default = make_default || replaced_default || self.editors.is_empty();
        record.is_default = false;
        self.editors.insert(key.clone(), record);

        if becomes_default {
            self.mark_default(&key);
        }

        debug!(
            "Added editor '{}' (default: {})",
            self.editors[&key].name, becomes_default
        );
        Ok(&self.editors[&key])
    }

    /// Remove a record by name. Absent names are a no-op.
    ///
    /// Removing the default promotes the first remaining record by name, or
    /// clears the default when the registry becomes empty.
    pub fn remove(&mut self, name: &str) -> Option<EditorRecord> {
        let removed = self.editors.remove(&fold_name(name))?;

        if removed.is_default {
            match self.editors.keys().next().cloned() {
                Some(next) => {
                    self.mark_default(&next);
                    info!(
                        "Removed default editor '{}', promoted '{}'",
                        removed.name, self.default_name
                    );
                }
                None => {
                    self.default_name.clear();
                    info!("Removed last editor '{}'", removed.name);
                }
            }
        }

        Some(removed)
    }

    /// Make `name` the default. Fails without changes if it is not registered.
    pub fn set_default(&mut self, name: &str) -> Result<&EditorRecord> {
        let key = fold_name(name);
        if !self.editors.contains_key(&key) {
            return Err(Error::unknown_editor(name));
        }
        self.mark_default(&key);
        Ok(&self.editors[&key])
    }

    fn mark_default(&mut self, key: &str) {
        for (k, record) in self.editors.iter_mut() {
            record.is_default = k == key;
            if record.is_default {
                self.default_name = record.name.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with(names: &[&str]) -> Registry {
        let mut registry = Registry::new();
        for name in names {
            registry
                .add(EditorRecord::new(*name, *name), false, AddMode::Strict)
                .unwrap();
        }
        registry
    }

    fn default_flags(registry: &Registry) -> Vec<&str> {
        registry
            .editors()
            .filter(|r| r.is_default)
            .map(|r| r.name.as_str())
            .collect()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Add
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_add_then_get_returns_same_fields() {
        let mut registry = Registry::new();
        let record = EditorRecord::new("Code", "/usr/bin/code")
            .with_description("Visual Studio Code")
            .with_options(["--reuse-window"]);
        registry.add(record.clone(), true, AddMode::Strict).unwrap();

        let found = registry.get("code").unwrap();
        assert_eq!(found.name, "Code");
        assert_eq!(found.path, "/usr/bin/code");
        assert_eq!(found.description, "Visual Studio Code");
        assert_eq!(found.default_options, vec!["--reuse-window"]);
        assert!(found.is_default);
    }

    #[test]
    fn test_add_trims_display_name() {
        let mut registry = Registry::new();
        registry
            .add(EditorRecord::new(" vim  ", "vim"), false, AddMode::Strict)
            .unwrap();

        assert_eq!(registry.get("vim").unwrap().name, "vim");
        assert_eq!(registry.default_name(), "vim");
    }

    #[test]
    fn test_add_blank_name_fails() {
        let mut registry = Registry::new();
        let err = registry
            .add(EditorRecord::new("   ", "vim"), false, AddMode::Strict)
            .unwrap_err();

        assert!(matches!(err, Error::InvalidArgument { .. }));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_first_editor_becomes_default() {
        let mut registry = Registry::new();
        registry
            .add(EditorRecord::new("A", "a"), false, AddMode::Strict)
            .unwrap();

        assert_eq!(registry.default_name(), "A");
        assert!(registry.get("A").unwrap().is_default);
    }

    #[test]
    fn test_second_editor_without_flag_keeps_default() {
        let registry = registry_with(&["A", "B"]);
        assert_eq!(registry.default_name(), "A");
        assert_eq!(default_flags(&registry), vec!["A"]);
    }

    #[test]
    fn test_add_case_only_duplicate_fails() {
        let mut registry = registry_with(&["vim"]);
        let err = registry
            .add(EditorRecord::new("VIM", "vim"), false, AddMode::Strict)
            .unwrap_err();

        assert!(matches!(err, Error::DuplicateName { ref name } if name == "vim"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_add_make_default_moves_flag() {
        let mut registry = registry_with(&["A"]);
        registry
            .add(EditorRecord::new("B", "b"), true, AddMode::Strict)
            .unwrap();

        assert_eq!(registry.default_name(), "B");
        assert_eq!(default_flags(&registry), vec!["B"]);
        assert!(!registry.get("A").unwrap().is_default);
    }

    #[test]
    fn test_add_ignores_incoming_default_flag() {
        let mut registry = registry_with(&["A"]);
        let mut record = EditorRecord::new("B", "b");
        record.is_default = true;
        registry.add(record, false, AddMode::Strict).unwrap();

        assert_eq!(default_flags(&registry), vec!["A"]);
    }

    #[test]
    fn test_overwrite_replaces_record() {
        let mut registry = registry_with(&["A", "B"]);
        registry
            .add(
                EditorRecord::new("b", "/opt/b").with_description("new"),
                false,
                AddMode::Overwrite,
            )
            .unwrap();

        let record = registry.get("B").unwrap();
        assert_eq!(record.name, "b");
        assert_eq!(record.path, "/opt/b");
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.default_name(), "A");
    }

    #[test]
    fn test_overwrite_keeps_default_status() {
        let mut registry = registry_with(&["A", "B"]);
        registry
            .add(EditorRecord::new("a", "/opt/a"), false, AddMode::Overwrite)
            .unwrap();

        assert_eq!(registry.default_name(), "a");
        assert_eq!(default_flags(&registry), vec!["a"]);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Set Default
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_set_default_switches_flag() {
        let mut registry = registry_with(&["A", "B"]);
        registry.set_default("b").unwrap();

        assert_eq!(registry.default_editor().unwrap().name, "B");
        assert!(!registry.get("A").unwrap().is_default);
        assert_eq!(registry.default_name(), "B");
    }

    #[test]
    fn test_set_default_unknown_leaves_registry_unchanged() {
        let mut registry = registry_with(&["A", "B"]);
        let before = registry.clone();

        let err = registry.set_default("unknown").unwrap_err();

        assert!(matches!(err, Error::UnknownEditor { .. }));
        assert_eq!(registry, before);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Remove
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_remove_absent_is_noop() {
        let mut registry = registry_with(&["A", "B"]);
        let before = registry.clone();

        assert!(registry.remove("nope").is_none());
        assert_eq!(registry, before);
    }

    #[test]
    fn test_remove_is_case_insensitive() {
        let mut registry = registry_with(&["A", "Bee"]);
        let removed = registry.remove("BEE").unwrap();

        assert_eq!(removed.name, "Bee");
        assert!(!registry.contains("bee"));
    }

    #[test]
    fn test_remove_default_promotes_first_remaining() {
        let mut registry = registry_with(&["zed", "code", "vim"]);
        assert_eq!(registry.default_name(), "zed");

        registry.remove("zed");

        assert_eq!(registry.default_name(), "code");
        assert_eq!(default_flags(&registry), vec!["code"]);
    }

    #[test]
    fn test_remove_last_clears_default() {
        let mut registry = registry_with(&["A"]);
        registry.remove("a");

        assert!(registry.is_empty());
        assert_eq!(registry.default_name(), "");
        assert!(matches!(
            registry.default_editor(),
            Err(Error::NoDefaultConfigured)
        ));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Query
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_query_all_sorted_by_name() {
        let registry = registry_with(&["vim", "Code", "emacs"]);
        let names: Vec<_> = registry
            .query(&EditorFilter::All)
            .unwrap()
            .into_iter()
            .map(|r| r.name.as_str())
            .collect();

        assert_eq!(names, vec!["Code", "emacs", "vim"]);
    }

    #[test]
    fn test_query_unknown_name_fails() {
        let registry = registry_with(&["vim"]);
        let err = registry
            .query(&EditorFilter::Name("nano".into()))
            .unwrap_err();
        assert!(matches!(err, Error::UnknownEditor { ref name } if name == "nano"));
    }

    #[test]
    fn test_query_default_on_empty_registry_fails() {
        let registry = Registry::new();
        assert!(matches!(
            registry.query(&EditorFilter::Default),
            Err(Error::NoDefaultConfigured)
        ));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // From Parts
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_from_parts_rejects_case_duplicates() {
        let err = Registry::from_parts(
            "vim".into(),
            vec![EditorRecord::new("vim", "vim"), EditorRecord::new("Vim", "vim")],
        )
        .unwrap_err();
        assert!(err.contains("duplicate"));
    }

    #[test]
    fn test_from_parts_rejects_dangling_default() {
        let mut record = EditorRecord::new("vim", "vim");
        record.is_default = true;
        let err = Registry::from_parts("code".into(), vec![record]).unwrap_err();
        assert!(err.contains("not registered"));
    }

    #[test]
    fn test_from_parts_rejects_mismatched_flag() {
        let err =
            Registry::from_parts("vim".into(), vec![EditorRecord::new("vim", "vim")]).unwrap_err();
        assert!(err.contains("default flag"));
    }

    #[test]
    fn test_from_parts_accepts_consistent_registry() {
        let mut vim = EditorRecord::new("vim", "vim");
        vim.is_default = true;
        let registry =
            Registry::from_parts("VIM".into(), vec![vim, EditorRecord::new("zed", "zed")])
                .unwrap();
        assert_eq!(registry.default_editor().unwrap().name, "vim");
        assert_eq!(registry.default_name(), "vim");
    }

    #[test]
    fn test_from_parts_empty() {
        let registry = Registry::from_parts(String::new(), Vec::new()).unwrap();
        assert!(registry.is_empty());
    }
}
