//! A single launcher button.

use crate::error::ConfigError;
use deck_icons::{IconHandle, IconResolver};
use log::debug;

/// One launcher button: what it is called, what it runs, what it shows.
#[derive(Clone, Debug)]
pub struct ButtonEntry {
    name: String,
    program_path: String,
    /// Empty when no icon was requested.
    icon_path: String,
    /// Derived from `icon_path`, never persisted.
    icon: Option<IconHandle>,
}

impl ButtonEntry {
    /// Build a validated entry and resolve its icon.
    ///
    /// A blank `name` falls back to the file stem of `program_path`.
    /// Values are kept exactly as given, so a loaded file saves back
    /// unchanged; blankness is judged on the trimmed text.
    pub fn create(
        name: &str,
        program_path: &str,
        icon_path: &str,
        resolver: &IconResolver,
    ) -> Result<Self, ConfigError> {
        if program_path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "program path must not be empty".to_string(),
            ));
        }

        let name = if name.trim().is_empty() {
            default_name(program_path.trim())
        } else {
            name.to_string()
        };
        let icon = resolver.resolve(Some(icon_path));

        Ok(Self {
            name,
            program_path: program_path.to_string(),
            icon_path: icon_path.to_string(),
            icon,
        })
    }

    /// Replace all fields, re-resolving the icon only when needed.
    ///
    /// On error the entry is left untouched.
    pub fn update(
        &mut self,
        new_name: &str,
        new_program_path: &str,
        new_icon_path: &str,
        resolver: &IconResolver,
    ) -> Result<(), ConfigError> {
        let new_name = new_name.trim();
        let new_program_path = new_program_path.trim();
        let new_icon_path = new_icon_path.trim();

        if new_name.is_empty() || new_program_path.is_empty() {
            return Err(ConfigError::Validation(
                "name and program path must not be empty".to_string(),
            ));
        }

        self.name = new_name.to_string();
        self.program_path = new_program_path.to_string();

        // Also retry when an earlier resolve failed on the same path.
        let path_changed = self.icon_path != new_icon_path;
        let stale = new_icon_path.is_empty() == self.icon.is_some();
        if path_changed || stale {
            debug!("Re-resolving icon for '{}': {:?}", self.name, new_icon_path);
            self.icon_path = new_icon_path.to_string();
            self.icon = resolver.resolve(Some(new_icon_path));
        }

        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn program_path(&self) -> &str {
        &self.program_path
    }

    pub fn icon_path(&self) -> &str {
        &self.icon_path
    }

    pub fn icon(&self) -> Option<&IconHandle> {
        self.icon.as_ref()
    }

    pub fn has_icon(&self) -> bool {
        self.icon.is_some()
    }

    /// Text shown on the button when there is no icon.
    ///
    /// First character of the name, uppercased; `"?"` for an empty name.
    pub fn label(&self) -> String {
        match self.name.chars().next() {
            Some(first) => first.to_uppercase().collect(),
            None => "?".to_string(),
        }
    }
}

/// File name without its last extension.
///
/// Both `/` and `\` count as separators so configurations written on
/// Windows still get sensible names elsewhere.
fn default_name(program_path: &str) -> String {
    let file_name = program_path
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(program_path);

    let stem = match file_name.rfind('.') {
        Some(dot) if dot > 0 => &file_name[..dot],
        _ => file_name,
    };

    if stem.is_empty() {
        program_path.to_string()
    } else {
        stem.to_string()
    }
}
