//! First-run seeding of the editor registry
//!
//! A fresh registry gets the platform's stock editor as default, plus any
//! well-known editors found on this machine.

use super::registry::{AddMode, Registry};
use edsel_core::prelude::*;
use edsel_core::EditorRecord;
use std::path::Path;

// ─────────────────────────────────────────────────────────────────────────────
// Seed Definitions
// ─────────────────────────────────────────────────────────────────────────────

/// An editor that may be registered on first run.
#[derive(Debug, Clone)]
pub struct SeedEditor {
    pub name: &'static str,
    pub description: &'static str,
    /// Absolute paths or command names, tried in order
    pub candidates: &'static [&'static str],
    pub options: &'static [&'static str],
}

impl SeedEditor {
    fn record(&self, path: String) -> EditorRecord {
        EditorRecord::new(self.name, path)
            .with_description(self.description)
            .with_options(self.options.iter().copied())
    }
}

/// Editors registered on first run when the probe finds them.
pub const KNOWN_EDITORS: &[SeedEditor] = &[
    SeedEditor {
        name: "code",
        description: "Visual Studio Code",
        candidates: &["code"],
        options: &["--reuse-window"],
    },
    SeedEditor {
        name: "cursor",
        description: "Cursor",
        candidates: &["cursor"],
        options: &["--reuse-window"],
    },
    SeedEditor {
        name: "zed",
        description: "Zed",
        candidates: &["zed"],
        options: &[],
    },
    SeedEditor {
        name: "nvim",
        description: "Neovim",
        candidates: &["nvim"],
        options: &[],
    },
    SeedEditor {
        name: "vim",
        description: "Vim",
        candidates: &["vim"],
        options: &[],
    },
    SeedEditor {
        name: "emacs",
        description: "Emacs",
        candidates: &["emacs"],
        options: &[],
    },
    SeedEditor {
        name: "subl",
        description: "Sublime Text",
        candidates: &["subl"],
        options: &[],
    },
    SeedEditor {
        name: "notepad++",
        description: "Notepad++",
        candidates: &[
            r"C:\Program Files\Notepad++\notepad++.exe",
            r"C:\Program Files (x86)\Notepad++\notepad++.exe",
        ],
        options: &["-multiInst", "-nosession"],
    },
];

/// The stock editor that becomes the default on first run.
pub fn primary_editor() -> SeedEditor {
    if cfg!(windows) {
        SeedEditor {
            name: "notepad",
            description: "Windows Notepad",
            candidates: &["notepad.exe"],
            options: &[],
        }
    } else if cfg!(target_os = "macos") {
        SeedEditor {
            name: "textedit",
            description: "TextEdit",
            candidates: &["open"],
            options: &["-e"],
        }
    } else {
        SeedEditor {
            name: "vi",
            description: "The standard visual editor",
            candidates: &["vi"],
            options: &[],
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Probing
// ─────────────────────────────────────────────────────────────────────────────

/// Checks whether a seed candidate exists on this machine.
pub trait Probe {
    /// Returns the path to register if `candidate` is present.
    fn locate(&self, candidate: &str) -> Option<String>;
}

/// Probe backed by the real filesystem and PATH.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProbe;

impl Probe for SystemProbe {
    fn locate(&self, candidate: &str) -> Option<String> {
        let path = Path::new(candidate);
        if path.is_absolute() {
            return path.is_file().then(|| candidate.to_string());
        }

        // Keep bare command names so upgrades that move the binary still work
        which::which(candidate).ok().map(|_| candidate.to_string())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Seeding
// ─────────────────────────────────────────────────────────────────────────────

/// Build the registry used on first run.
///
/// The primary editor is always added as default; it is not probed.
pub fn seed_registry(probe: &dyn Probe) -> Registry {
    let mut registry = Registry::new();

    let primary = primary_editor();
    let primary_path = primary.candidates[0].to_string();
    if let Err(e) = registry.add(primary.record(primary_path), true, AddMode::Strict) {
        warn!("Failed to seed {}: {}", primary.name, e);
    }

    for seed in KNOWN_EDITORS {
        let Some(path) = seed.candidates.iter().find_map(|c| probe.locate(c)) else {
            trace!("Seed editor {} not found", seed.name);
            continue;
        };

        match registry.add(seed.record(path), false, AddMode::Strict) {
            Ok(record) => info!("Discovered editor {} at {}", record.name, record.path),
            Err(e) => debug!("Skipping seed editor {}: {}", seed.name, e),
        }
    }

    registry
}
