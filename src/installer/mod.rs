//! Installing fonts into the operating system's font store
//!
//! [`FontSystem`] is the seam to the OS: a font directory plus the calls that
//! activate, announce and register a font. [`NativeInstaller`] runs the
//! install protocol against any `FontSystem` and is what the organizer sees
//! through the [`FontInstaller`] capability.

pub mod checker;
pub mod machine;

use std::io;
use std::path::Path;
use log::{debug, info};
use crate::models::InstallationOutcome;

pub use checker::is_installed;
pub use machine::{InstallMachine, InstallState};

/// What the OS reports about a font file it has loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceInfo {
    /// Descriptive name, e.g. "Helvetica Now Text Bold"
    pub description: String,
    /// Outlines are TrueType
    pub is_truetype: bool,
}

/// OS operations the install protocol needs
pub trait FontSystem {
    /// Directory the OS loads fonts from
    fn font_dir(&self) -> &Path;

    /// Load a font file into the current session
    fn activate(&self, font_path: &Path) -> io::Result<()>;

    /// Tell running applications the font list changed
    fn broadcast_font_change(&self) -> io::Result<()>;

    /// Ask the OS for the description of an installed font file
    fn resource_info(&self, filename: &str) -> Option<ResourceInfo>;

    /// Persist `display_name -> filename` in the font registry
    fn write_registry_entry(&self, display_name: &str, filename: &str) -> io::Result<()>;
}

impl<S: FontSystem + ?Sized> FontSystem for &S {
    fn font_dir(&self) -> &Path {
        (**self).font_dir()
    }

    fn activate(&self, font_path: &Path) -> io::Result<()> {
        (**self).activate(font_path)
    }

    fn broadcast_font_change(&self) -> io::Result<()> {
        (**self).broadcast_font_change()
    }

    fn resource_info(&self, filename: &str) -> Option<ResourceInfo> {
        (**self).resource_info(filename)
    }

    fn write_registry_entry(&self, display_name: &str, filename: &str) -> io::Result<()> {
        (**self).write_registry_entry(display_name, filename)
    }
}

/// Capability to install fonts on the host
pub trait FontInstaller {
    /// Human readable target, for log output
    fn describe(&self) -> String;

    /// Whether `filename` is already present in the font store
    fn is_installed(&self, filename: &str) -> bool;

    /// Install the staged file under `filename`
    fn install(&self, staged: &Path, filename: &str) -> InstallationOutcome;
}

/// The install protocol over an OS font system
pub struct NativeInstaller<S: FontSystem> {
    system: S,
}

impl<S: FontSystem> NativeInstaller<S> {
    pub fn new(system: S) -> Self {
        Self { system }
    }
}

impl<S: FontSystem> FontInstaller for NativeInstaller<S> {
    fn describe(&self) -> String {
        format!("system font directory {}", self.system.font_dir().display())
    }

    fn is_installed(&self, filename: &str) -> bool {
        is_installed(self.system.font_dir(), filename)
    }

    fn install(&self, staged: &Path, filename: &str) -> InstallationOutcome {
        if self.is_installed(filename) {
            info!("Font already installed: {}", filename);
            return InstallationOutcome::AlreadyInstalled;
        }

        let mut machine = InstallMachine::new(&self.system, staged, filename);
        let outcome = machine.run();
        debug!("{} finished in state {:?}", filename, machine.state());
        outcome
    }
}
