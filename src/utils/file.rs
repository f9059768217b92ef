use std::fs;
use std::path::{Path, PathBuf};
use log::{debug, warn};
use crate::error::Result;

/// Create a directory if it doesn't exist
pub fn ensure_directory_exists(dir: &Path) -> Result<()> {
    if !dir.exists() {
        debug!("Directory {} does not exist. Creating it now.", dir.display());
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Copy `src` into `dir` as `filename`, replacing any existing file
pub fn copy_into(src: &Path, dir: &Path, filename: &str) -> Result<PathBuf> {
    let dest = dir.join(filename);
    debug!("Copying {} to {}", src.display(), dest.display());
    fs::copy(src, &dest)?;
    Ok(dest)
}

/// Regular files in `dir` whose name has no extension, sorted by name
///
/// Dotfiles are skipped too: they never hold font data. Symlinks are
/// followed; an unreadable entry is logged and skipped.
pub fn extensionless_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = match entry {
            Ok(entry) => entry.path(),
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };

        if !path.is_file() {
            continue;
        }
        if path.extension().is_some() {
            debug!("Ignoring {}: has an extension", path.display());
            continue;
        }
        let hidden = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with('.'));
        if hidden {
            debug!("Ignoring hidden file {}", path.display());
            continue;
        }

        files.push(path);
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_only_extensionless_regular_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b2f1"), b"x").unwrap();
        fs::write(dir.path().join("a9c0"), b"x").unwrap();
        fs::write(dir.path().join("manifest.json"), b"{}").unwrap();
        fs::write(dir.path().join(".DS_Store"), b"").unwrap();
        fs::create_dir(dir.path().join("subdir")).unwrap();

        let files = extensionless_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a9c0", "b2f1"]);
    }

    #[cfg(unix)]
    #[test]
    fn follows_symlinked_cache_entries() {
        let dir = tempfile::tempdir().unwrap();
        let elsewhere = tempfile::tempdir().unwrap();
        let real = elsewhere.path().join("blob");
        fs::write(&real, b"x").unwrap();
        std::os::unix::fs::symlink(&real, dir.path().join("c41d")).unwrap();
        std::os::unix::fs::symlink(elsewhere.path().join("gone"), dir.path().join("dangling")).unwrap();

        let files = extensionless_files(dir.path()).unwrap();
        assert_eq!(files, vec![dir.path().join("c41d")]);
    }

    #[test]
    fn copy_into_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src");
        fs::write(&src, b"new").unwrap();
        let out = dir.path().join("out");
        ensure_directory_exists(&out).unwrap();
        fs::write(out.join("Font-Bold.otf"), b"old").unwrap();

        let dest = copy_into(&src, &out, "Font-Bold.otf").unwrap();
        assert_eq!(fs::read(dest).unwrap(), b"new");
    }
}
