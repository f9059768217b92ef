use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Characters that are invalid in a file name on Windows or Unix
    static ref INVALID_FILENAME_CHARS: Regex = Regex::new(r#"[<>:"/\\|?*\x00-\x1F]"#).unwrap();
}

/// Clean a name for use in filenames
pub fn clean_name(name: &str) -> String {
    let cleaned = INVALID_FILENAME_CHARS.replace_all(name, "_");

    // Windows drops trailing dots and spaces silently
    let cleaned = cleaned.trim().trim_matches('.').trim();

    if cleaned.is_empty() {
        "Unknown".to_string()
    } else {
        cleaned.to_string()
    }
}

/// Build the `{family}-{subfamily}.{ext}` filename a font is exported or installed under
pub fn derive_filename(family: &str, subfamily: &str, extension: &str) -> String {
    format!("{}.{}", clean_name(&format!("{}-{}", family, subfamily)), extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_names_pass_through() {
        assert_eq!(derive_filename("Helvetica Now", "Bold", "otf"), "Helvetica Now-Bold.otf");
    }

    #[test]
    fn invalid_characters_are_replaced() {
        assert_eq!(clean_name("AT/Sans: \"Mono\"?"), "AT_Sans_ _Mono__");
        assert_eq!(clean_name("tab\there"), "tab_here");
    }

    #[test]
    fn trailing_dots_and_spaces_are_trimmed() {
        assert_eq!(clean_name("  Futura PT. "), "Futura PT");
        assert_eq!(clean_name(" ... "), "Unknown");
    }
}
