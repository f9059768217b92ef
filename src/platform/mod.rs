//! Host-specific locations and the installer for the running OS

#[cfg(windows)]
pub mod win32;

use std::path::{Path, PathBuf};
use crate::error::{Error, Result};
use crate::installer::FontInstaller;

/// Cache location below `%APPDATA%`
const WINDOWS_CACHE_SUBDIR: &str = r"Adobe\CoreSync\plugins\livetype\r";
/// Cache location below the home directory
const MACOS_CACHE_SUBDIR: &str = "Library/Application Support/Adobe/CoreSync/plugins/livetype/.r";

/// The supported operating systems
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOs {
    Windows,
    MacOs,
    Other(&'static str),
}

impl HostOs {
    pub fn current() -> Self {
        match std::env::consts::OS {
            "windows" => HostOs::Windows,
            "macos" => HostOs::MacOs,
            other => HostOs::Other(other),
        }
    }
}

/// Directory where the application keeps its cached font binaries
pub fn cache_directory() -> Result<PathBuf> {
    cache_directory_for(HostOs::current(), dirs::data_dir().as_deref(), dirs::home_dir().as_deref())
}

/// Resolve the cache directory given the OS and its base directories
pub fn cache_directory_for(os: HostOs, data_dir: Option<&Path>, home_dir: Option<&Path>) -> Result<PathBuf> {
    match os {
        HostOs::Windows => data_dir
            .map(|dir| dir.join(WINDOWS_CACHE_SUBDIR))
            .ok_or_else(|| Error::Config("cannot determine %APPDATA%".to_string())),
        HostOs::MacOs => home_dir
            .map(|dir| dir.join(MACOS_CACHE_SUBDIR))
            .ok_or_else(|| Error::Config("cannot determine home directory".to_string())),
        HostOs::Other(name) => Err(Error::UnsupportedPlatform(format!(
            "no font cache location known for {}; only Windows and macOS are supported",
            name
        ))),
    }
}

/// The installer for the running OS
#[cfg(windows)]
pub fn host_installer() -> Result<Box<dyn FontInstaller>> {
    use crate::installer::NativeInstaller;

    let system = win32::WindowsFontSystem::shared()?;
    Ok(Box::new(NativeInstaller::new(system)))
}

/// The installer for the running OS
#[cfg(not(windows))]
pub fn host_installer() -> Result<Box<dyn FontInstaller>> {
    Err(Error::UnsupportedPlatform(format!(
        "installing fonts is only supported on Windows, not {}",
        std::env::consts::OS
    )))
}
