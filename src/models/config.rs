use std::fmt;
use std::path::PathBuf;

/// Configuration for one run over the font cache
#[derive(Debug, Clone)]
pub struct Config {
    /// What to do with each cached font
    pub procedure: Procedure,
    /// Enable debug output
    pub debug_mode: bool,
    /// Cache directory override; `None` resolves the platform default
    pub cache_dir: Option<PathBuf>,
    /// Where export mode writes renamed fonts
    pub output_dir: PathBuf,
}

/// The two supported procedures
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Procedure {
    /// Copy each font to the output directory under its real name
    Copy,
    /// Install each font into the system font store
    Install,
}

impl fmt::Display for Procedure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Procedure::Copy => write!(f, "copy"),
            Procedure::Install => write!(f, "install"),
        }
    }
}

impl Config {
    /// Create a new configuration with default settings
    pub fn new(procedure: Procedure, output_dir: PathBuf) -> Self {
        Self {
            procedure,
            debug_mode: false,
            cache_dir: None,
            output_dir,
        }
    }
}
