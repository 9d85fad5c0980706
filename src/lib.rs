//! ButtonDeck - a grid of buttons that launch programs.
//!
//! The library half holds everything a front end drives:
//! - `session` - the active document, window preferences, user actions
//! - `layout` - where each button sits in the grid
//! - `error` - errors surfaced to the user

pub mod error;
pub mod functions;
pub mod layout;
pub mod session;

pub use error::SessionError;
pub use session::{SaveOutcome, Session};
