//! Error types for deck-launch

/// Program launch errors
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("Program not found: {0}")]
    NotFound(String),

    #[error("Could not launch {path}: {source}")]
    Failed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
