use std::path::{Path, PathBuf};
use crate::error::InstallError;

/// A cached font binary together with the name it will be written under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontRecord {
    source_path: PathBuf,
    family: String,
    subfamily: String,
    derived_filename: String,
}

impl FontRecord {
    /// Create a record; `derived_filename` is fixed here and never recomputed
    pub fn new(source_path: PathBuf, family: String, subfamily: String, derived_filename: String) -> Self {
        Self {
            source_path,
            family,
            subfamily,
            derived_filename,
        }
    }

    /// Path of the raw binary inside the application cache
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Typeface family, e.g. "Helvetica Now"
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Style variant, e.g. "Bold"
    pub fn subfamily(&self) -> &str {
        &self.subfamily
    }

    /// `{family}-{subfamily}.{ext}`
    pub fn derived_filename(&self) -> &str {
        &self.derived_filename
    }
}

/// Result of running the install flow for one font
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallationOutcome {
    /// A file with the derived name was already in the system font directory
    AlreadyInstalled,
    /// Copied, activated and registered
    Installed,
    /// One protocol step failed; see the error for which one
    Failed(InstallError),
}
