//! Data types shared across the crate

pub mod config;
pub mod font;

pub use config::{Config, Procedure};
pub use font::{FontRecord, InstallationOutcome};
