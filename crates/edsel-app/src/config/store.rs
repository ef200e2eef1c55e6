//! Persistent editor registry
//!
//! [`ConfigStore`] owns the [`Registry`] for the lifetime of one command and
//! writes it back to disk after every mutation.

use super::registry::{AddMode, EditorFilter, Registry};
use super::schema::{parse_registry, render_registry};
use super::seed::{seed_registry, Probe, SystemProbe};
use edsel_core::prelude::*;
use edsel_core::EditorRecord;
use fs2::FileExt;
use std::io::Write;
use std::path::{Path, PathBuf};

/// The editor registry bound to its storage file.
#[derive(Debug)]
pub struct ConfigStore {
    path: PathBuf,
    registry: Registry,
}

impl ConfigStore {
    /// Load the registry at `path`, seeding and saving it on first run.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        Self::load_with_probe(path, &SystemProbe)
    }

    /// Like [`ConfigStore::load`], with a custom probe for first-run discovery.
    pub fn load_with_probe(path: impl Into<PathBuf>, probe: &dyn Probe) -> Result<Self> {
        let path = path.into();

        if !path.exists() {
            info!("No registry at {:?}, seeding defaults", path);
            let store = Self {
                registry: seed_registry(probe),
                path,
            };
            store.persist()?;
            return Ok(store);
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {:?}", path))?;
        let registry =
            parse_registry(&content).map_err(|message| Error::corrupt_config(&path, message))?;

        debug!(
            "Loaded {} editors from {:?} (default: {:?})",
            registry.len(),
            path,
            registry.default_name()
        );
        Ok(Self { path, registry })
    }

    /// Wrap an in-memory registry without touching disk.
    pub fn with_registry(path: impl Into<PathBuf>, registry: Registry) -> Self {
        Self {
            path: path.into(),
            registry,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Persistence
    // ─────────────────────────────────────────────────────────────────────────

    /// Write the registry to disk.
    ///
    /// Uses atomic write (temp file + rename) under an exclusive lock on a
    /// sibling `.lock` file.
    pub fn persist(&self) -> Result<()> {
        self.write(&self.registry)
    }

    /// Write `next` and adopt it only once it is on disk.
    fn commit(&mut self, next: Registry) -> Result<()> {
        self.write(&next)?;
        self.registry = next;
        Ok(())
    }

    fn write(&self, registry: &Registry) -> Result<()> {
        let fail = |what: &str, e: &dyn std::fmt::Display| {
            Error::persist(&self.path, format!("{}: {}", what, e))
        };

        let content = render_registry(registry).map_err(|e| fail("serialize", &e))?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&dir).map_err(|e| fail("create directory", &e))?;

        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| Error::persist(&self.path, "path has no file name"))?;
        let lock_path = dir.join(format!(".{}.lock", file_name));
        let temp_path = dir.join(format!(".{}.tmp", file_name));

        let lock = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|e| fail("open lock file", &e))?;
        lock.lock_exclusive()
            .map_err(|e| fail("lock registry", &e))?;

        let mut temp = std::fs::File::create(&temp_path).map_err(|e| fail("write temp file", &e))?;
        temp.write_all(content.as_bytes())
            .and_then(|_| temp.sync_all())
            .map_err(|e| fail("write temp file", &e))?;
        drop(temp);

        std::fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = std::fs::remove_file(&temp_path);
            fail("replace registry", &e)
        })?;

        // Lock is released when `lock` is dropped
        debug!("Saved {} editors to {:?}", registry.len(), self.path);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Add an editor, rejecting duplicate names.
    pub fn add(&mut self, record: EditorRecord, make_default: bool) -> Result<EditorRecord> {
        self.add_with_mode(record, make_default, AddMode::Strict)
    }

    pub fn add_with_mode(
        &mut self,
        record: EditorRecord,
        make_default: bool,
        mode: AddMode,
    ) -> Result<EditorRecord> {
        let mut next = self.registry.clone();
        let added = next.add(record, make_default, mode)?.clone();
        self.commit(next)?;
        info!("Registered editor '{}' -> {}", added.name, added.path);
        Ok(added)
    }

    /// Remove an editor by name; absent names are a no-op and skip the write.
    pub fn remove(&mut self, name: &str) -> Result<Option<EditorRecord>> {
        let mut next = self.registry.clone();
        let Some(removed) = next.remove(name) else {
            debug!("Remove of unknown editor '{}' ignored", name);
            return Ok(None);
        };
        self.commit(next)?;
        info!("Removed editor '{}'", removed.name);
        Ok(Some(removed))
    }

    pub fn set_default(&mut self, name: &str) -> Result<EditorRecord> {
        let mut next = self.registry.clone();
        let record = next.set_default(name)?.clone();
        self.commit(next)?;
        info!("Default editor is now '{}'", record.name);
        Ok(record)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    pub fn get(&self, name: &str) -> Result<&EditorRecord> {
        self.registry.get(name)
    }

    pub fn default_editor(&self) -> Result<&EditorRecord> {
        self.registry.default_editor()
    }

    pub fn query(&self, filter: &EditorFilter) -> Result<Vec<&EditorRecord>> {
        self.registry.query(filter)
    }
}
