//! The active launcher session.
//!
//! Owns the single document being edited and the window preferences a front
//! end needs. Front ends hold one `Session` and route every user action
//! through it; nothing here is global.

use crate::error::SessionError;
use crate::functions::formatting::window_title;
use deck_config::{
    ButtonEntry, ConfigError, ConfigurationDocument, DEFAULT_FILE_NAME, LoadWarning,
};
use deck_icons::IconResolver;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

/// Result of a plain "save".
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Written to the document's own file.
    Saved(PathBuf),
    /// The document has never been saved; ask for a path and call
    /// [`Session::save_as`].
    NeedsPath,
}

pub struct Session {
    document: ConfigurationDocument,
    resolver: IconResolver,
    always_on_top: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_resolver(IconResolver::default())
    }

    pub fn with_resolver(resolver: IconResolver) -> Self {
        Self {
            document: ConfigurationDocument::new(),
            resolver,
            always_on_top: false,
        }
    }

    pub fn document(&self) -> &ConfigurationDocument {
        &self.document
    }

    /// Whether replacing the document now would lose edits.
    pub fn has_unsaved_changes(&self) -> bool {
        self.document.is_dirty()
    }

    /// Drop the current document and start an empty one.
    ///
    /// Any "save first?" prompt is the caller's job, see
    /// [`Session::has_unsaved_changes`].
    pub fn new_document(&mut self) {
        debug!("Starting new configuration");
        self.document = ConfigurationDocument::new();
    }

    /// Replace the document with the contents of `path`.
    ///
    /// On error the current document stays as it was.
    pub fn open(&mut self, path: &Path) -> Result<Vec<LoadWarning>, SessionError> {
        let (document, warnings) = deck_config::load(path, &self.resolver)?;
        info!("Opened {} ({} buttons)", path.display(), document.len());
        self.document = document;
        Ok(warnings)
    }

    /// Save to the document's own file, if it has one.
    pub fn save(&mut self) -> Result<SaveOutcome, SessionError> {
        let Some(path) = self.document.source_path().map(Path::to_path_buf) else {
            return Ok(SaveOutcome::NeedsPath);
        };

        self.save_as(&path)?;
        Ok(SaveOutcome::Saved(path))
    }

    /// Save to `path` and make it the document's file.
    ///
    /// A failed save leaves the document dirty and its file unchanged.
    pub fn save_as(&mut self, path: &Path) -> Result<(), SessionError> {
        if let Err(e) = deck_config::save(&self.document, path) {
            warn!("{}", e);
            return Err(e.into());
        }

        self.document.mark_saved(path);
        info!("Saved configuration to {}", path.display());
        Ok(())
    }

    /// Add a button at the end of the grid. Returns its index.
    pub fn add_button(
        &mut self,
        name: &str,
        program_path: &str,
        icon_path: &str,
    ) -> Result<usize, SessionError> {
        let entry = ButtonEntry::create(name, program_path, icon_path, &self.resolver)?;
        debug!("Adding button '{}' -> {}", entry.name(), entry.program_path());
        Ok(self.document.push(entry))
    }

    pub fn edit_button(
        &mut self,
        index: usize,
        name: &str,
        program_path: &str,
        icon_path: &str,
    ) -> Result<(), SessionError> {
        self.document
            .update(index, name, program_path, icon_path, &self.resolver)?;
        Ok(())
    }

    /// Remove a button. Its icon is released with the returned entry.
    pub fn delete_button(&mut self, index: usize) -> Result<ButtonEntry, SessionError> {
        let removed = self.document.remove(index)?;
        debug!("Deleted button '{}'", removed.name());
        Ok(removed)
    }

    /// Find a button by 1-based number or by exact name.
    pub fn find_button(&self, query: &str) -> Option<usize> {
        let query = query.trim();
        if let Ok(number) = query.parse::<usize>() {
            if number >= 1 && number <= self.document.len() {
                return Some(number - 1);
            }
        }

        self.document
            .entries()
            .iter()
            .position(|e| e.name() == query)
    }

    /// Launch the program behind the button at `index`.
    ///
    /// Failure never changes the button list.
    pub fn launch(&self, index: usize) -> Result<(), SessionError> {
        let entry = self
            .document
            .get(index)
            .ok_or(ConfigError::NoSuchEntry(index))?;

        deck_launch::launch(entry.program_path()).map_err(|e| {
            warn!("Launching '{}' failed: {}", entry.name(), e);
            SessionError::from(e)
        })
    }

    pub fn always_on_top(&self) -> bool {
        self.always_on_top
    }

    pub fn set_always_on_top(&mut self, on_top: bool) {
        self.always_on_top = on_top;
    }

    /// Flip the "keep window on top" preference and return the new value.
    pub fn toggle_always_on_top(&mut self) -> bool {
        self.always_on_top = !self.always_on_top;
        debug!("Always on top: {}", self.always_on_top);
        self.always_on_top
    }

    pub fn title(&self) -> String {
        window_title(self.document.file_name().as_deref())
    }

    /// Initial file name to offer in a "save as" dialog.
    pub fn suggested_file_name(&self) -> String {
        self.document
            .file_name()
            .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string())
    }

    /// Numbered button names for pick-by-number prompts.
    pub fn button_listing(&self) -> String {
        self.document.listing()
    }
}
