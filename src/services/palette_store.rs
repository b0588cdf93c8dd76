//! Saved palette persistence.
//!
//! Palettes are kept in memory and written through to a JSON file on every
//! mutation. A missing or unreadable file is never fatal: the store starts
//! empty and the next successful write replaces it.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::models::SavedPalette;

/// Storage for saved palettes, keyed by palette id.
pub trait PaletteStore {
    /// All palettes in save order.
    fn list(&self) -> &[SavedPalette];

    /// Looks up one palette.
    fn get(&self, id: &str) -> Option<&SavedPalette> {
        self.list().iter().find(|p| p.id == id)
    }

    /// Adds a palette, replacing one with the same id.
    ///
    /// # Errors
    ///
    /// Returns an error if the palette is invalid or cannot be persisted.
    fn save(&mut self, palette: SavedPalette) -> Result<()>;

    /// Removes a palette. Returns `false` if no palette had that id.
    ///
    /// # Errors
    ///
    /// Returns an error if the change cannot be persisted.
    fn delete(&mut self, id: &str) -> Result<bool>;
}

/// Inserts or replaces by id, keeping the original position on replace.
fn upsert(palettes: &mut Vec<SavedPalette>, palette: SavedPalette) {
    match palettes.iter_mut().find(|p| p.id == palette.id) {
        Some(existing) => *existing = palette,
        None => palettes.push(palette),
    }
}

/// A palette store backed by a JSON array file.
#[derive(Debug)]
pub struct JsonPaletteStore {
    path: PathBuf,
    palettes: Vec<SavedPalette>,
}

impl JsonPaletteStore {
    /// Opens the store at `path`, loading its contents once.
    ///
    /// Missing, unreadable or corrupt data yields an empty store; individual
    /// palettes that fail validation are skipped.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tintscale::services::{JsonPaletteStore, PaletteStore};
    ///
    /// let store = JsonPaletteStore::open("palettes.json");
    /// for palette in store.list() {
    ///     println!("{} {}", palette.id, palette.name);
    /// }
    /// ```
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let palettes = match Self::read(&path) {
            Ok(palettes) => palettes,
            Err(e) => {
                let reason = format!("{e:#}");
                warn!(path = %path.display(), error = %reason, "ignoring unreadable palette store");
                Vec::new()
            }
        };
        Self { path, palettes }
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(path: &Path) -> Result<Vec<SavedPalette>> {
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read palette store: {}", path.display()))?;
        let palettes: Vec<SavedPalette> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse palette store: {}", path.display()))?;

        Ok(palettes
            .into_iter()
            .filter(|palette| match palette.validate() {
                Ok(()) => true,
                Err(e) => {
                    warn!(id = %palette.id, error = %e, "skipping invalid saved palette");
                    false
                }
            })
            .collect())
    }

    /// Writes all palettes using temp file + rename.
    fn persist(&self) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).with_context(|| {
                format!("Failed to create palette store directory: {}", dir.display())
            })?;
        }

        let content = serde_json::to_string_pretty(&self.palettes)
            .context("Failed to serialize palettes")?;

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, content).with_context(|| {
            format!("Failed to write temp palette file: {}", temp_path.display())
        })?;
        fs::rename(&temp_path, &self.path).with_context(|| {
            format!("Failed to rename temp palette file to: {}", self.path.display())
        })?;

        info!(path = %self.path.display(), count = self.palettes.len(), "palettes saved");
        Ok(())
    }
}

impl PaletteStore for JsonPaletteStore {
    fn list(&self) -> &[SavedPalette] {
        &self.palettes
    }

    fn save(&mut self, palette: SavedPalette) -> Result<()> {
        palette.validate()?;
        let previous = self.palettes.clone();
        upsert(&mut self.palettes, palette);
        if let Err(e) = self.persist() {
            self.palettes = previous;
            return Err(e);
        }
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<bool> {
        let Some(index) = self.palettes.iter().position(|p| p.id == id) else {
            return Ok(false);
        };
        let removed = self.palettes.remove(index);
        if let Err(e) = self.persist() {
            self.palettes.insert(index, removed);
            return Err(e);
        }
        Ok(true)
    }
}

/// A palette store that lives only in memory.
#[derive(Debug, Default)]
pub struct MemoryPaletteStore {
    palettes: Vec<SavedPalette>,
}

impl MemoryPaletteStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PaletteStore for MemoryPaletteStore {
    fn list(&self) -> &[SavedPalette] {
        &self.palettes
    }

    fn save(&mut self, palette: SavedPalette) -> Result<()> {
        palette.validate()?;
        upsert(&mut self.palettes, palette);
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<bool> {
        let before = self.palettes.len();
        self.palettes.retain(|p| p.id != id);
        Ok(self.palettes.len() != before)
    }
}
