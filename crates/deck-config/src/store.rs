//! JSON persistence for configuration documents.
//!
//! The file is a bare JSON array of `{name, program_path, icon_path}`
//! records. Loading is tolerant: a bad record is skipped with a warning and
//! the rest of the file still loads. Saving is atomic: the data goes to a
//! temp file next to the target, which is then renamed over it.

use crate::document::ConfigurationDocument;
use crate::entry::ButtonEntry;
use crate::error::ConfigError;
use deck_icons::IconResolver;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Suggested file name when saving a document for the first time.
pub const DEFAULT_FILE_NAME: &str = "buttondeck_config.json";

/// A record that was skipped while loading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadWarning {
    /// Zero-based position of the record in the file.
    pub index: usize,
    pub reason: String,
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entry #{} skipped: {}", self.index + 1, self.reason)
    }
}

/// On-disk shape of a record, as read.
#[derive(Deserialize)]
struct StoredEntry {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    program_path: Option<String>,
    #[serde(default)]
    icon_path: Option<String>,
}

/// On-disk shape of a record, as written.
#[derive(Serialize)]
struct StoredEntryRef<'a> {
    name: &'a str,
    program_path: &'a str,
    icon_path: &'a str,
}

/// Load a configuration file, resolving every icon.
///
/// File-level problems (missing, unreadable, not JSON, not a list) fail the
/// whole load. Record-level problems only skip that record.
pub fn load(
    path: &Path,
    resolver: &IconResolver,
) -> Result<(ConfigurationDocument, Vec<LoadWarning>), ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ConfigError::NotFound(path.to_path_buf()),
        _ => ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let root: Value = serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let records = match root {
        Value::Array(records) => records,
        other => {
            return Err(ConfigError::Parse {
                path: path.to_path_buf(),
                message: format!("expected a list of buttons, found {}", json_kind(&other)),
            });
        }
    };

    let mut entries = Vec::with_capacity(records.len());
    let mut warnings = Vec::new();

    for (index, record) in records.into_iter().enumerate() {
        match parse_record(record, resolver) {
            Ok(entry) => entries.push(entry),
            Err(reason) => {
                let warning = LoadWarning { index, reason };
                warn!("{}: {}", path.display(), warning);
                warnings.push(warning);
            }
        }
    }

    info!(
        "Loaded {} buttons from {} ({} skipped)",
        entries.len(),
        path.display(),
        warnings.len()
    );

    let document = ConfigurationDocument::from_entries(entries, Some(path.to_path_buf()));
    Ok((document, warnings))
}

fn parse_record(record: Value, resolver: &IconResolver) -> Result<ButtonEntry, String> {
    if !record.is_object() {
        return Err(format!("expected an object, found {}", json_kind(&record)));
    }

    let stored: StoredEntry = serde_json::from_value(record).map_err(|e| e.to_string())?;

    let program_path = stored
        .program_path
        .filter(|p| !p.trim().is_empty())
        .ok_or_else(|| "missing program_path".to_string())?;

    ButtonEntry::create(
        stored.name.as_deref().unwrap_or_default(),
        &program_path,
        stored.icon_path.as_deref().unwrap_or_default(),
        resolver,
    )
    .map_err(|e| e.to_string())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

/// Write the document's buttons to `path`, replacing it atomically.
///
/// Icon handles are never written. The document itself is not touched;
/// callers mark it saved once this returns `Ok`.
pub fn save(document: &ConfigurationDocument, path: &Path) -> Result<(), ConfigError> {
    let write_err = |source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };

    let records: Vec<StoredEntryRef<'_>> = document
        .entries()
        .iter()
        .map(|e| StoredEntryRef {
            name: e.name(),
            program_path: e.program_path(),
            icon_path: e.icon_path(),
        })
        .collect();

    let serialized = serde_json::to_string_pretty(&records).map_err(|e| write_err(e.into()))?;

    // Write through symlinks so the link itself survives the rename.
    let target = match fs::canonicalize(path) {
        Ok(resolved) => resolved,
        Err(e) if e.kind() == io::ErrorKind::NotFound => path.to_path_buf(),
        Err(e) => return Err(write_err(e)),
    };

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(write_err)?;
    temp.write_all(serialized.as_bytes()).map_err(write_err)?;

    // Temp files start out 0600; keep the mode of the file being replaced.
    if let Ok(existing) = fs::metadata(&target) {
        temp.as_file()
            .set_permissions(existing.permissions())
            .map_err(write_err)?;
    }

    temp.as_file().sync_all().map_err(write_err)?;
    temp.persist(&target).map_err(|e| write_err(e.error))?;

    debug!("Saved {} buttons to {}", records.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load(&dir.path().join("absent.json"), &IconResolver::new());
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "bad.json", "[{\"name\": ");
        let result = load(&path, &IconResolver::new());
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_load_non_list_root_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "obj.json", r#"{"name": "x"}"#);
        match load(&path, &IconResolver::new()) {
            Err(ConfigError::Parse { message, .. }) => assert!(message.contains("an object")),
            other => panic!("expected parse error, got {:?}", other.map(|(d, _)| d.len())),
        }
    }

    #[test]
    fn test_load_skips_record_without_program() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            "mixed.json",
            r#"[
                {"name": "Notes", "program_path": "/usr/bin/notes", "icon_path": ""},
                {"name": "Broken", "icon_path": ""}
            ]"#,
        );

        let (doc, warnings) = load(&path, &IconResolver::new()).unwrap();
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.entries()[0].name(), "Notes");
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].index, 1);
        assert_eq!(doc.source_path(), Some(path.as_path()));
        assert!(!doc.is_dirty());
    }

    #[test]
    fn test_load_skips_malformed_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            "odd.json",
            r#"[
                "just a string",
                42,
                {"program_path": ""},
                {"program_path": 7},
                {"name": "Ok", "program_path": "/bin/ok", "extra": true}
            ]"#,
        );

        let (doc, warnings) = load(&path, &IconResolver::new()).unwrap();
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.entries()[0].name(), "Ok");
        let skipped: Vec<usize> = warnings.iter().map(|w| w.index).collect();
        assert_eq!(skipped, vec![0, 1, 2, 3]);
        assert_eq!(
            warnings[0].to_string(),
            "entry #1 skipped: expected an object, found a string"
        );
    }

    #[test]
    fn test_load_defaults_missing_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            "noname.json",
            r#"[{"program_path": "C:\\Apps\\browser.exe"}, {"name": "", "program_path": "/opt/x/run.sh"}]"#,
        );

        let (doc, warnings) = load(&path, &IconResolver::new()).unwrap();
        assert!(warnings.is_empty());
        assert_eq!(doc.entries()[0].name(), "browser");
        assert_eq!(doc.entries()[0].icon_path(), "");
        assert_eq!(doc.entries()[1].name(), "run");
    }

    #[test]
    fn test_load_missing_icon_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            "icons.json",
            r#"[{"name": "A", "program_path": "/bin/a", "icon_path": "/does/not/exist.png"}]"#,
        );

        let (doc, warnings) = load(&path, &IconResolver::new()).unwrap();
        assert!(warnings.is_empty());
        assert!(!doc.entries()[0].has_icon());
        assert_eq!(doc.entries()[0].icon_path(), "/does/not/exist.png");
        assert_eq!(doc.entries()[0].label(), "A");
    }

    #[test]
    fn test_load_then_save_keeps_paths_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            "spaces.json",
            r#"[{"name": "Tool", "program_path": "/opt/my tool ", "icon_path": " /icons/t.png"}]"#,
        );

        let (doc, warnings) = load(&path, &IconResolver::new()).unwrap();
        assert!(warnings.is_empty());
        assert_eq!(doc.entries()[0].program_path(), "/opt/my tool ");

        save(&doc, &path).unwrap();
        let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written[0]["program_path"], "/opt/my tool ");
        assert_eq!(written[0]["icon_path"], " /icons/t.png");
    }

    #[test]
    fn test_save_writes_only_persisted_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let resolver = IconResolver::new();

        let mut doc = ConfigurationDocument::new();
        doc.push(ButtonEntry::create("Notes", "/usr/bin/notes", "", &resolver).unwrap());
        save(&doc, &path).unwrap();

        let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            written,
            serde_json::json!([
                {"name": "Notes", "program_path": "/usr/bin/notes", "icon_path": ""}
            ])
        );
        // Saving does not clear the dirty flag by itself.
        assert!(doc.is_dirty());
    }

    #[test]
    fn test_save_to_missing_directory_fails_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no/such/dir/out.json");
        let result = save(&ConfigurationDocument::new(), &path);
        assert!(matches!(result, Err(ConfigError::Write { .. })));
        assert!(!path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_save_keeps_existing_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "deck.json", "[]");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        save(&ConfigurationDocument::new(), &path).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }

    #[cfg(unix)]
    #[test]
    fn test_save_through_symlink_keeps_link() {
        let dir = tempfile::tempdir().unwrap();
        let real = write_config(dir.path(), "real.json", "old contents");
        let link = dir.path().join("link.json");
        std::os::unix::fs::symlink(&real, &link).unwrap();

        save(&ConfigurationDocument::new(), &link).unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(&real).unwrap(), "[]");
    }

    #[test]
    fn test_save_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "existing.json", "old contents");

        save(&ConfigurationDocument::new(), &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");

        let leftovers = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 1);
    }
}
