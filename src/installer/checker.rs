use std::path::Path;

/// Whether a file named `filename` already sits in `font_dir`
///
/// Identity is the file name alone: a different font that resolves to the
/// same `{family}-{subfamily}` name counts as installed.
pub fn is_installed(font_dir: &Path, filename: &str) -> bool {
    font_dir.join(filename).exists()
}
