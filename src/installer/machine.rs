use std::fs;
use std::path::{Path, PathBuf};
use log::{debug, warn};
use crate::error::InstallError;
use crate::models::InstallationOutcome;
use super::FontSystem;

/// Appended to the registry name of fonts with TrueType outlines
const TRUETYPE_MARKER: &str = " (TrueType)";

/// Where an installation currently stands
///
/// Transitions run strictly in declaration order. The compensation for a
/// failed transition depends only on the state it started from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallState {
    /// File sits in a private staging location
    Staged,
    /// Present in the system font directory
    Copied,
    /// Loaded into the current session
    Activated,
    /// Running windows have been told (best effort)
    Notified,
    /// Registry display name decided
    Named(String),
    /// Durable: registry entry written
    Registered,
}

/// Drives one staged font through copy, activate, notify and register
pub struct InstallMachine<'a, S: FontSystem + ?Sized> {
    system: &'a S,
    staged: &'a Path,
    filename: &'a str,
    target: PathBuf,
    state: InstallState,
    history: Vec<InstallState>,
}

impl<'a, S: FontSystem + ?Sized> InstallMachine<'a, S> {
    pub fn new(system: &'a S, staged: &'a Path, filename: &'a str) -> Self {
        Self {
            system,
            staged,
            filename,
            target: system.font_dir().join(filename),
            state: InstallState::Staged,
            history: vec![InstallState::Staged],
        }
    }

    pub fn state(&self) -> &InstallState {
        &self.state
    }

    /// Every state entered so far, starting with `Staged`
    pub fn history(&self) -> &[InstallState] {
        &self.history
    }

    /// Run transitions until the font is registered or a step fails
    pub fn run(&mut self) -> InstallationOutcome {
        while self.state != InstallState::Registered {
            if let Err(err) = self.step() {
                return InstallationOutcome::Failed(err);
            }
        }
        InstallationOutcome::Installed
    }

    /// Perform one transition, compensating if it fails
    pub fn step(&mut self) -> Result<(), InstallError> {
        let next = match &self.state {
            InstallState::Staged => {
                if let Err(e) = fs::copy(self.staged, &self.target) {
                    self.compensate();
                    return Err(InstallError::Copy {
                        filename: self.filename.to_string(),
                        reason: e.to_string(),
                    });
                }
                InstallState::Copied
            }
            InstallState::Copied => {
                if let Err(e) = self.system.activate(&self.target) {
                    self.compensate();
                    return Err(InstallError::Activation {
                        filename: self.filename.to_string(),
                        reason: e.to_string(),
                    });
                }
                InstallState::Activated
            }
            InstallState::Activated => {
                if let Err(e) = self.system.broadcast_font_change() {
                    warn!("Font change notification for {} failed: {}", self.filename, e);
                }
                InstallState::Notified
            }
            InstallState::Notified => InstallState::Named(self.display_name()),
            InstallState::Named(display_name) => {
                // The font stays active in this session if this fails.
                self.system
                    .write_registry_entry(display_name, self.filename)
                    .map_err(|e| InstallError::RegistryWrite {
                        filename: self.filename.to_string(),
                        reason: e.to_string(),
                    })?;
                InstallState::Registered
            }
            InstallState::Registered => return Ok(()),
        };

        debug!("{}: {:?} -> {:?}", self.filename, self.state, next);
        self.history.push(next.clone());
        self.state = next;
        Ok(())
    }

    /// Undo the effects of the current state after its successor failed
    fn compensate(&self) {
        match self.state {
            // A failed copy may still have created a truncated target.
            InstallState::Staged if self.target.exists() => self.remove_target("failed copy"),
            InstallState::Copied => self.remove_target("failed activation"),
            InstallState::Staged
            | InstallState::Activated
            | InstallState::Notified
            | InstallState::Named(_)
            | InstallState::Registered => {}
        }
    }

    fn remove_target(&self, cause: &str) {
        debug!("Removing {} after {}", self.target.display(), cause);
        if let Err(e) = fs::remove_file(&self.target) {
            warn!("Could not remove {}: {}", self.target.display(), e);
        }
    }

    fn display_name(&self) -> String {
        match self.system.resource_info(self.filename) {
            Some(info) if !info.description.trim().is_empty() => {
                let mut name = info.description.trim().to_string();
                if info.is_truetype {
                    name.push_str(TRUETYPE_MARKER);
                }
                name
            }
            _ => Path::new(self.filename)
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| self.filename.to_string()),
        }
    }
}
