use std::path::PathBuf;
use clap::Parser;
use crate::error::Result;
use crate::models::{Config, Procedure};

/// Copies all fonts currently active from Adobe Fonts to the current folder or installs them
#[derive(Debug, Parser)]
#[command(name = "font-reveal", version)]
pub struct Args {
    /// `copy` exports renamed fonts, `install` adds them to the system font store
    #[arg(value_enum)]
    pub procedure: Procedure,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Read cached fonts from this directory instead of the platform default
    #[arg(long, value_name = "DIR", env = "FONT_REVEAL_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Where `copy` writes fonts (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub output: Option<PathBuf>,
}

impl Args {
    /// Turn parsed arguments into a run configuration
    pub fn into_config(self) -> Result<Config> {
        let output_dir = match self.output {
            Some(dir) => dir,
            None => std::env::current_dir()?,
        };

        let mut config = Config::new(self.procedure, output_dir);
        config.debug_mode = self.debug;
        config.cache_dir = self.cache_dir;
        Ok(config)
    }
}
