use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the font-reveal application
#[derive(Debug, Error)]
pub enum Error {
    /// IO operations errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// No cached-fonts directory or installer exists for this OS
    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),
    /// The file is not a readable sfnt binary or has no usable name table
    #[error("Failed to parse font {}: {reason}", path.display())]
    FontParse { path: PathBuf, reason: String },
    /// The name table holds no usable record for a required role
    #[error("Font {} has no {role} name record", path.display())]
    MissingNameData { path: PathBuf, role: NameRole },
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// The semantic role a name record plays for file naming
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameRole {
    Family,
    Subfamily,
}

impl std::fmt::Display for NameRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NameRole::Family => write!(f, "family"),
            NameRole::Subfamily => write!(f, "subfamily"),
        }
    }
}

/// Failures of the native installation protocol, one per fallible step
///
/// Carried by `InstallationOutcome::Failed` rather than `Error`: they end one
/// font's installation, never the run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstallError {
    /// Copying into the system font directory failed; nothing was created
    #[error("could not copy {filename} into the system font directory: {reason}")]
    Copy { filename: String, reason: String },
    /// The OS refused to load the copied file; the copy has been removed
    #[error("could not activate {filename}: {reason}")]
    Activation { filename: String, reason: String },
    /// The font is active but its registry entry could not be written
    #[error("could not register {filename}: {reason}")]
    RegistryWrite { filename: String, reason: String },
}

/// Result type alias for font-reveal operations
pub type Result<T> = std::result::Result<T, Error>;
