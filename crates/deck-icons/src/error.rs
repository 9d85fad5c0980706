//! Error types for deck-icons

use std::path::PathBuf;

/// Icon loading errors
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("Icon file not found: {}", .0.display())]
    Missing(PathBuf),

    #[error("Failed to read icon {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode icon {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Animated icon has no frames: {}", .0.display())]
    NoFrames(PathBuf),
}
