//! Error types for deck-config

use std::path::PathBuf;

/// Configuration and button editing errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid button: {0}")]
    Validation(String),

    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Failed to save {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No button at position {0}")]
    NoSuchEntry(usize),
}
