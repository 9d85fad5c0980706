//! Errors surfaced to the front end.

use deck_config::ConfigError;
use deck_launch::LaunchError;

/// Anything a session operation can report back to the user.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Launch(#[from] LaunchError),
}
