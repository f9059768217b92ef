//! Helpers shared by the unit tests: tiny sfnt binaries and a fake OS font store.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use crate::font::reader::{NameRecord, PLATFORM_MACINTOSH};
use crate::installer::{FontSystem, ResourceInfo};

/// Outline flavour written into the sfnt header
#[derive(Debug, Clone, Copy)]
pub enum SfntFlavor {
    Cff,
    TrueType,
}

fn encode(platform_id: u16, text: &str) -> Vec<u8> {
    if platform_id == PLATFORM_MACINTOSH {
        // Tests only use ASCII for Macintosh records.
        text.bytes().collect()
    } else {
        text.encode_utf16().flat_map(|unit| unit.to_be_bytes()).collect()
    }
}

/// A name record holding `text` in the encoding its platform implies
pub fn name_record(platform_id: u16, encoding_id: u16, language_id: u16, name_id: u16, text: &str) -> NameRecord {
    NameRecord {
        platform_id,
        encoding_id,
        language_id,
        name_id,
        bytes: encode(platform_id, text),
    }
}

/// Build an sfnt binary whose only table is `name`
///
/// Records are `(platform, encoding, language, name id, text)`.
pub fn build_font(flavor: SfntFlavor, records: &[(u16, u16, u16, u16, &str)]) -> Vec<u8> {
    let mut storage = Vec::new();
    let mut entries = Vec::new();
    for &(platform, encoding, language, name_id, text) in records {
        let bytes = encode(platform, text);
        entries.push((platform, encoding, language, name_id, bytes.len() as u16, storage.len() as u16));
        storage.extend_from_slice(&bytes);
    }

    let mut name = Vec::new();
    name.extend_from_slice(&0u16.to_be_bytes());
    name.extend_from_slice(&(entries.len() as u16).to_be_bytes());
    name.extend_from_slice(&((6 + 12 * entries.len()) as u16).to_be_bytes());
    for (platform, encoding, language, name_id, length, offset) in entries {
        for field in [platform, encoding, language, name_id, length, offset] {
            name.extend_from_slice(&field.to_be_bytes());
        }
    }
    name.extend_from_slice(&storage);

    let magic: [u8; 4] = match flavor {
        SfntFlavor::Cff => *b"OTTO",
        SfntFlavor::TrueType => [0x00, 0x01, 0x00, 0x00],
    };
    let table_offset: u32 = 12 + 16;

    let mut font = Vec::new();
    font.extend_from_slice(&magic);
    font.extend_from_slice(&1u16.to_be_bytes()); // numTables
    font.extend_from_slice(&16u16.to_be_bytes()); // searchRange
    font.extend_from_slice(&0u16.to_be_bytes()); // entrySelector
    font.extend_from_slice(&0u16.to_be_bytes()); // rangeShift
    font.extend_from_slice(b"name");
    font.extend_from_slice(&0u32.to_be_bytes()); // checksum
    font.extend_from_slice(&table_offset.to_be_bytes());
    font.extend_from_slice(&(name.len() as u32).to_be_bytes());
    font.extend_from_slice(&name);
    font
}

/// Windows-style family/subfamily font, the common case in the cache
pub fn simple_font(family: &str, subfamily: &str) -> Vec<u8> {
    build_font(
        SfntFlavor::Cff,
        &[(3, 1, 0x409, 1, family), (3, 1, 0x409, 2, subfamily)],
    )
}

/// In-memory stand-in for the OS font store, backed by a temp directory
pub struct FakeFontSystem {
    dir: TempDir,
    fail_activation: bool,
    fail_broadcast: bool,
    fail_registry: bool,
    resource_info: Option<ResourceInfo>,
    activated: RefCell<Vec<PathBuf>>,
    broadcasts: Cell<usize>,
    registry: RefCell<BTreeMap<String, String>>,
}

impl FakeFontSystem {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
            fail_activation: false,
            fail_broadcast: false,
            fail_registry: false,
            resource_info: None,
            activated: RefCell::new(Vec::new()),
            broadcasts: Cell::new(0),
            registry: RefCell::new(BTreeMap::new()),
        }
    }

    pub fn failing_activation(mut self) -> Self {
        self.fail_activation = true;
        self
    }

    pub fn failing_broadcast(mut self) -> Self {
        self.fail_broadcast = true;
        self
    }

    pub fn failing_registry(mut self) -> Self {
        self.fail_registry = true;
        self
    }

    pub fn with_resource_info(mut self, info: ResourceInfo) -> Self {
        self.resource_info = Some(info);
        self
    }

    pub fn activated(&self) -> Vec<PathBuf> {
        self.activated.borrow().clone()
    }

    pub fn broadcasts(&self) -> usize {
        self.broadcasts.get()
    }

    pub fn registry_entries(&self) -> Vec<(String, String)> {
        self.registry
            .borrow()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

impl FontSystem for FakeFontSystem {
    fn font_dir(&self) -> &Path {
        self.dir.path()
    }

    fn activate(&self, font_path: &Path) -> io::Result<()> {
        if self.fail_activation {
            return Err(io::Error::new(io::ErrorKind::Other, "AddFontResource failed"));
        }
        self.activated.borrow_mut().push(font_path.to_path_buf());
        Ok(())
    }

    fn broadcast_font_change(&self) -> io::Result<()> {
        if self.fail_broadcast {
            return Err(io::Error::new(io::ErrorKind::TimedOut, "receiver hung"));
        }
        self.broadcasts.set(self.broadcasts.get() + 1);
        Ok(())
    }

    fn resource_info(&self, _filename: &str) -> Option<ResourceInfo> {
        self.resource_info.clone()
    }

    fn write_registry_entry(&self, display_name: &str, filename: &str) -> io::Result<()> {
        if self.fail_registry {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "access denied"));
        }
        self.registry
            .borrow_mut()
            .insert(display_name.to_string(), filename.to_string());
        Ok(())
    }
}
