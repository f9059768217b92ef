use std::cmp::Reverse;
use std::path::Path;
use crate::error::{Error, NameRole, Result};
use super::reader::{NameRecord, NameTable, PLATFORM_MACINTOSH, PLATFORM_UNICODE, PLATFORM_WINDOWS};

/// Name IDs consulted for each role, most specific first
const FAMILY_IDS: [u16; 3] = [21, 16, 1];
const SUBFAMILY_IDS: [u16; 3] = [22, 17, 2];

const WINDOWS_ENGLISH_US: u16 = 0x0409;
const MACINTOSH_ENGLISH: u16 = 0;

impl NameRole {
    fn name_ids(self) -> &'static [u16] {
        match self {
            NameRole::Family => &FAMILY_IDS,
            NameRole::Subfamily => &SUBFAMILY_IDS,
        }
    }
}

/// Resolve the (family, subfamily) pair of a font
///
/// `path` only labels the error when a role has no usable record.
pub fn resolve(path: &Path, table: &NameTable) -> Result<(String, String)> {
    let family = best_name(table, NameRole::Family).ok_or_else(|| Error::MissingNameData {
        path: path.to_path_buf(),
        role: NameRole::Family,
    })?;
    let subfamily = best_name(table, NameRole::Subfamily).ok_or_else(|| Error::MissingNameData {
        path: path.to_path_buf(),
        role: NameRole::Subfamily,
    })?;
    Ok((family, subfamily))
}

/// Pick the best decodable, non-blank string for `role`
///
/// Name IDs are tried in priority order. Within an ID every candidate gets a
/// rank key so the winner does not depend on record order in the table.
pub fn best_name(table: &NameTable, role: NameRole) -> Option<String> {
    role.name_ids().iter().find_map(|&name_id| {
        table
            .records
            .iter()
            .filter(|record| record.name_id == name_id)
            .filter_map(|record| {
                let text = decode(record)?;
                let text = text.trim();
                if text.is_empty() {
                    return None;
                }
                Some((rank(record), text.to_string()))
            })
            .min_by(|(a_rank, a_text), (b_rank, b_text)| {
                a_rank.cmp(b_rank).then_with(|| a_text.cmp(b_text))
            })
            .map(|(_, text)| text)
    })
}

/// Lower sorts first: encoding preference, then English, then language id
fn rank(record: &NameRecord) -> (u8, Reverse<bool>, u16) {
    let encoding = match (record.platform_id, record.encoding_id) {
        (PLATFORM_WINDOWS, 10) => 0,
        (PLATFORM_WINDOWS, 1) => 1,
        (PLATFORM_UNICODE, _) => 2,
        (PLATFORM_MACINTOSH, 0) => 3,
        _ => 4,
    };
    let english = matches!(
        (record.platform_id, record.language_id),
        (PLATFORM_WINDOWS, WINDOWS_ENGLISH_US) | (PLATFORM_MACINTOSH, MACINTOSH_ENGLISH)
    );
    (encoding, Reverse(english), record.language_id)
}

/// Decode a record's bytes, or `None` for encodings we don't read
pub fn decode(record: &NameRecord) -> Option<String> {
    match (record.platform_id, record.encoding_id) {
        (PLATFORM_UNICODE, _) | (PLATFORM_WINDOWS, 0 | 1 | 10) => decode_utf16_be(&record.bytes),
        (PLATFORM_MACINTOSH, 0) => Some(decode_mac_roman(&record.bytes)),
        _ => None,
    }
}

fn decode_utf16_be(bytes: &[u8]) -> Option<String> {
    if bytes.len() % 2 != 0 {
        return None;
    }
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units).ok()
}

fn decode_mac_roman(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| if b < 0x80 { b as char } else { MAC_ROMAN_HIGH[(b - 0x80) as usize] })
        .collect()
}

/// Mac OS Roman, 0x80..=0xFF
const MAC_ROMAN_HIGH: [char; 128] = [
    'Ä', 'Å', 'Ç', 'É', 'Ñ', 'Ö', 'Ü', 'á', 'à', 'â', 'ä', 'ã', 'å', 'ç', 'é', 'è',
    'ê', 'ë', 'í', 'ì', 'î', 'ï', 'ñ', 'ó', 'ò', 'ô', 'ö', 'õ', 'ú', 'ù', 'û', 'ü',
    '†', '°', '¢', '£', '§', '•', '¶', 'ß', '®', '©', '™', '´', '¨', '≠', 'Æ', 'Ø',
    '∞', '±', '≤', '≥', '¥', 'µ', '∂', '∑', '∏', 'π', '∫', 'ª', 'º', 'Ω', 'æ', 'ø',
    '¿', '¡', '¬', '√', 'ƒ', '≈', '∆', '«', '»', '…', '\u{A0}', 'À', 'Ã', 'Õ', 'Œ', 'œ',
    '–', '—', '“', '”', '‘', '’', '÷', '◊', 'ÿ', 'Ÿ', '⁄', '€', '‹', '›', 'ﬁ', 'ﬂ',
    '‡', '·', '‚', '„', '‰', 'Â', 'Ê', 'Á', 'Ë', 'È', 'Í', 'Î', 'Ï', 'Ì', 'Ó', 'Ô',
    '\u{F8FF}', 'Ò', 'Ú', 'Û', 'Ù', 'ı', 'ˆ', '˜', '¯', '˘', '˙', '˚', '¸', '˝', '˛', 'ˇ',
];
