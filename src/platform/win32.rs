//! Windows font store: `%SystemRoot%\Fonts`, GDI and the Fonts registry key

use std::ffi::{c_void, OsStr};
use std::io;
use std::iter::once;
use std::mem::size_of;
use std::os::windows::ffi::OsStrExt;
use std::path::{Path, PathBuf};
use std::ptr::null_mut;
use lazy_static::lazy_static;
use log::debug;
use windows::core::PCWSTR;
use windows::Win32::Foundation::{ERROR_SUCCESS, LPARAM, WPARAM};
use windows::Win32::Graphics::Gdi::AddFontResourceW;
use windows::Win32::System::Registry::{
    RegCloseKey, RegOpenKeyExW, RegSetValueExW, HKEY, HKEY_LOCAL_MACHINE, KEY_SET_VALUE, REG_SZ,
};
use windows::Win32::UI::WindowsAndMessaging::{
    SendMessageTimeoutW, HWND_BROADCAST, SMTO_ABORTIFHUNG, WM_FONTCHANGE,
};
use crate::error::{Error, Result};
use crate::installer::{FontSystem, ResourceInfo};

const FONTS_REG_PATH: &str = r"Software\Microsoft\Windows NT\CurrentVersion\Fonts";

/// Upper bound on how long a hung window can stall the broadcast
const BROADCAST_TIMEOUT_MS: u32 = 1000;

/// `GetFontResourceInfoW` query types
const GFRI_DESCRIPTION: u32 = 1;
const GFRI_ISTRUETYPE: u32 = 3;

// Undocumented, so absent from the generated bindings.
#[link(name = "gdi32")]
extern "system" {
    fn GetFontResourceInfoW(
        lpszfilename: *const u16,
        cbbuffer: *mut u32,
        lpbuffer: *mut c_void,
        dwquerytype: u32,
    ) -> i32;
}

lazy_static! {
    static ref SHARED: Option<WindowsFontSystem> = WindowsFontSystem::from_env();
}

/// The machine-wide Windows font store
#[derive(Debug)]
pub struct WindowsFontSystem {
    font_dir: PathBuf,
}

impl WindowsFontSystem {
    /// Process-wide instance, created on first use
    pub fn shared() -> Result<&'static WindowsFontSystem> {
        let shared: &'static Option<WindowsFontSystem> = &SHARED;
        shared
            .as_ref()
            .ok_or_else(|| Error::Config("SystemRoot is not set; cannot locate the Fonts folder".to_string()))
    }

    fn from_env() -> Option<Self> {
        let root = std::env::var_os("SystemRoot")?;
        let font_dir = PathBuf::from(root).join("Fonts");
        debug!("System font directory: {}", font_dir.display());
        Some(Self { font_dir })
    }
}

fn wide(s: &OsStr) -> Vec<u16> {
    s.encode_wide().chain(once(0)).collect()
}

fn until_nul(buf: &[u16]) -> &[u16] {
    let end = buf.iter().position(|&c| c == 0).unwrap_or(buf.len());
    &buf[..end]
}

impl FontSystem for WindowsFontSystem {
    fn font_dir(&self) -> &Path {
        &self.font_dir
    }

    fn activate(&self, font_path: &Path) -> io::Result<()> {
        let path = wide(font_path.as_os_str());
        let loaded = unsafe { AddFontResourceW(PCWSTR(path.as_ptr())) };
        if loaded == 0 {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                format!("AddFontResource failed to load \"{}\"", font_path.display()),
            ));
        }
        debug!("Loaded {} font(s) from {}", loaded, font_path.display());
        Ok(())
    }

    fn broadcast_font_change(&self) -> io::Result<()> {
        let result = unsafe {
            SendMessageTimeoutW(
                HWND_BROADCAST,
                WM_FONTCHANGE,
                WPARAM(0),
                LPARAM(0),
                SMTO_ABORTIFHUNG,
                BROADCAST_TIMEOUT_MS,
                None,
            )
        };
        if result.0 == 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(())
    }

    fn resource_info(&self, filename: &str) -> Option<ResourceInfo> {
        let name = wide(OsStr::new(filename));

        let mut size: u32 = 0;
        let sized = unsafe { GetFontResourceInfoW(name.as_ptr(), &mut size, null_mut(), GFRI_DESCRIPTION) };
        if sized == 0 || size == 0 {
            return None;
        }

        // `size` is in bytes
        let mut buf = vec![0u16; size as usize / 2 + 1];
        let read = unsafe {
            GetFontResourceInfoW(name.as_ptr(), &mut size, buf.as_mut_ptr().cast(), GFRI_DESCRIPTION)
        };
        if read == 0 {
            return None;
        }
        let description = String::from_utf16_lossy(until_nul(&buf));

        let mut is_truetype: i32 = 0;
        let mut flag_size = size_of::<i32>() as u32;
        let flagged = unsafe {
            GetFontResourceInfoW(
                name.as_ptr(),
                &mut flag_size,
                (&mut is_truetype as *mut i32).cast(),
                GFRI_ISTRUETYPE,
            )
        };

        Some(ResourceInfo {
            description,
            is_truetype: flagged != 0 && is_truetype != 0,
        })
    }

    fn write_registry_entry(&self, display_name: &str, filename: &str) -> io::Result<()> {
        let subkey = wide(OsStr::new(FONTS_REG_PATH));
        let value_name = wide(OsStr::new(display_name));
        let data: Vec<u8> = wide(OsStr::new(filename))
            .into_iter()
            .flat_map(u16::to_le_bytes)
            .collect();

        let mut key = HKEY::default();
        let opened = unsafe {
            RegOpenKeyExW(HKEY_LOCAL_MACHINE, PCWSTR(subkey.as_ptr()), 0, KEY_SET_VALUE, &mut key)
        };
        if opened != ERROR_SUCCESS {
            return Err(io::Error::from_raw_os_error(opened.0 as i32));
        }

        let written = unsafe { RegSetValueExW(key, PCWSTR(value_name.as_ptr()), 0, REG_SZ, Some(data.as_slice())) };
        let _ = unsafe { RegCloseKey(key) };
        if written != ERROR_SUCCESS {
            return Err(io::Error::from_raw_os_error(written.0 as i32));
        }

        debug!("Registered \"{}\" -> {}", display_name, filename);
        Ok(())
    }
}
