use std::fs;
use std::path::Path;
use ttf_parser::{name::Table, PlatformId, RawFace, Tag};
use crate::error::{Error, Result};

/// Platform identifiers as stored in the name table
pub const PLATFORM_UNICODE: u16 = 0;
pub const PLATFORM_MACINTOSH: u16 = 1;
pub const PLATFORM_ISO: u16 = 2;
pub const PLATFORM_WINDOWS: u16 = 3;
pub const PLATFORM_CUSTOM: u16 = 4;

/// One entry of a font's naming table, copied out of the binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRecord {
    pub platform_id: u16,
    pub encoding_id: u16,
    pub language_id: u16,
    pub name_id: u16,
    pub bytes: Vec<u8>,
}

/// Owned copy of a font's naming table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameTable {
    pub records: Vec<NameRecord>,
}

/// Outline flavour announced by the sfnt header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFormat {
    /// `OTTO`: CFF outlines
    OpenType,
    /// `0x00010000` or `true`: glyf outlines
    TrueType,
    /// `ttcf`
    Collection,
    Unknown,
}

impl FontFormat {
    /// Identify the format from the first four bytes of a file
    pub fn sniff(data: &[u8]) -> Self {
        match data.get(0..4) {
            Some(b"OTTO") => FontFormat::OpenType,
            Some([0x00, 0x01, 0x00, 0x00]) | Some(b"true") => FontFormat::TrueType,
            Some(b"ttcf") => FontFormat::Collection,
            _ => FontFormat::Unknown,
        }
    }

    /// File extension used for the derived filename
    pub fn extension(self) -> &'static str {
        match self {
            FontFormat::TrueType => "ttf",
            FontFormat::Collection => "ttc",
            // Adobe's cache holds CFF fonts almost exclusively.
            FontFormat::OpenType | FontFormat::Unknown => "otf",
        }
    }
}

/// A parsed font binary: only what naming needs
#[derive(Debug, Clone)]
pub struct FontBinary {
    pub format: FontFormat,
    pub names: NameTable,
}

/// Read a font file and extract its naming table
pub fn read_font(path: &Path) -> Result<FontBinary> {
    let data = fs::read(path)?;
    parse_font(path, &data)
}

/// Parse an in-memory font binary; `path` is only used for error reporting
pub fn parse_font(path: &Path, data: &[u8]) -> Result<FontBinary> {
    let parse_error = |reason: String| Error::FontParse {
        path: path.to_path_buf(),
        reason,
    };

    let raw = RawFace::parse(data, 0).map_err(|e| parse_error(e.to_string()))?;
    let name_data = raw
        .table(Tag::from_bytes(b"name"))
        .ok_or_else(|| parse_error("no name table".to_string()))?;
    let table = Table::parse(name_data)
        .ok_or_else(|| parse_error("malformed name table".to_string()))?;

    let records = table
        .names
        .into_iter()
        .map(|name| NameRecord {
            platform_id: platform_code(name.platform_id),
            encoding_id: name.encoding_id,
            language_id: name.language_id,
            name_id: name.name_id,
            bytes: name.name.to_vec(),
        })
        .collect();

    Ok(FontBinary {
        format: FontFormat::sniff(data),
        names: NameTable { records },
    })
}

fn platform_code(platform: PlatformId) -> u16 {
    match platform {
        PlatformId::Unicode => PLATFORM_UNICODE,
        PlatformId::Macintosh => PLATFORM_MACINTOSH,
        PlatformId::Iso => PLATFORM_ISO,
        PlatformId::Windows => PLATFORM_WINDOWS,
        PlatformId::Custom => PLATFORM_CUSTOM,
    }
}
