//! The ordered set of buttons being edited.

use crate::entry::ButtonEntry;
use crate::error::ConfigError;
use deck_icons::IconResolver;
use std::path::{Path, PathBuf};

/// Ordered buttons plus the file they belong to.
///
/// Entry order is grid order. Every mutation marks the document dirty;
/// only [`ConfigurationDocument::mark_saved`] clears it.
#[derive(Clone, Debug, Default)]
pub struct ConfigurationDocument {
    entries: Vec<ButtonEntry>,
    source_path: Option<PathBuf>,
    dirty: bool,
}

impl ConfigurationDocument {
    /// An empty, unsaved document.
    pub fn new() -> Self {
        Self::default()
    }

    /// A freshly loaded document. Not dirty.
    pub fn from_entries(entries: Vec<ButtonEntry>, source_path: Option<PathBuf>) -> Self {
        Self {
            entries,
            source_path,
            dirty: false,
        }
    }

    pub fn entries(&self) -> &[ButtonEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&ButtonEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Append a button at the end of the grid. Returns its index.
    pub fn push(&mut self, entry: ButtonEntry) -> usize {
        self.entries.push(entry);
        self.dirty = true;
        self.entries.len() - 1
    }

    /// Edit the button at `index` in place.
    pub fn update(
        &mut self,
        index: usize,
        name: &str,
        program_path: &str,
        icon_path: &str,
        resolver: &IconResolver,
    ) -> Result<&ButtonEntry, ConfigError> {
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(ConfigError::NoSuchEntry(index))?;

        entry.update(name, program_path, icon_path, resolver)?;
        self.dirty = true;
        Ok(entry)
    }

    /// Remove the button at `index`, keeping the others in order.
    pub fn remove(&mut self, index: usize) -> Result<ButtonEntry, ConfigError> {
        if index >= self.entries.len() {
            return Err(ConfigError::NoSuchEntry(index));
        }

        self.dirty = true;
        Ok(self.entries.remove(index))
    }

    /// Record a successful save to `path`.
    pub fn mark_saved(&mut self, path: &Path) {
        self.source_path = Some(path.to_path_buf());
        self.dirty = false;
    }

    /// File name of the backing file, if any.
    pub fn file_name(&self) -> Option<String> {
        self.source_path
            .as_deref()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().to_string())
    }

    /// Numbered list of button names, one per line, starting at 1.
    pub fn listing(&self) -> String {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, e)| format!("{}. {}", i + 1, e.name()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
