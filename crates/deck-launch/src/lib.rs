//! deck-launch: start external programs without supervising them.

pub mod error;
pub mod launcher;

pub use error::LaunchError;
pub use launcher::launch;
