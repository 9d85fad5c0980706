//! deck-icons: icon loading for launcher buttons.
//!
//! Turns an icon path into a small, fixed-size RGBA handle a UI can draw:
//! - Missing or empty paths resolve to nothing
//! - Animated formats always contribute their first frame
//! - Decode failures are logged and swallowed, never raised to the caller

pub mod error;
pub mod resolver;

pub use error::IconError;
pub use resolver::{DEFAULT_ICON_SIZE, IconHandle, IconResolver};
