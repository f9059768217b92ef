//! Reveal the fonts Adobe Creative Cloud keeps in its local cache.
//!
//! Cached fonts are stored as extensionless binaries with opaque names. This
//! crate reads each binary's name table to work out a proper
//! `{family}-{subfamily}.{ext}` filename, then either copies the font out
//! under that name or installs it into the system font store.

pub mod cli;
pub mod error;
pub mod font;
pub mod installer;
pub mod models;
pub mod organizer;
pub mod platform;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::{Error, Result};
