//! deck-config: launcher button entries and their configuration file.
//!
//! Provides:
//! - `ButtonEntry` validation, name defaulting and icon refresh on edit
//! - `ConfigurationDocument`, the ordered button list with its backing file
//! - JSON load that skips malformed records instead of failing the file
//! - Atomic JSON save

pub mod document;
pub mod entry;
pub mod error;
pub mod store;

pub use document::ConfigurationDocument;
pub use entry::ButtonEntry;
pub use error::ConfigError;
pub use store::{DEFAULT_FILE_NAME, LoadWarning, load, save};
