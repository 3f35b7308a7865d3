//! Filesystem utilities for pagesmith.
//!
//! Output files are written through a temporary sibling and renamed into
//! place, so a page file is either the old content or the complete new
//! content. Directory creation and the file write are separate steps: a
//! failure in between leaves an empty output directory behind.

use crate::error::{PageError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Create `dir` (and parents) if it does not exist.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|e| {
        PageError::IoError(format!(
            "failed to create output directory '{}': {}",
            dir.display(),
            e
        ))
    })
}

/// Write `content` to `path`, replacing any existing file.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    let temp_path = temp_path_for(path)?;

    let result = write_and_sync(&temp_path, content.as_bytes()).and_then(|()| {
        fs::rename(&temp_path, path).map_err(|e| {
            PageError::IoError(format!("failed to replace '{}': {}", path.display(), e))
        })
    });

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

/// `.{filename}.tmp` in the same directory as `target`.
fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            PageError::IoError(format!("invalid output path '{}'", target.display()))
        })?;
    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        PageError::IoError(format!("failed to create '{}': {}", path.display(), e))
    })?;
    file.write_all(content).map_err(|e| {
        PageError::IoError(format!("failed to write '{}': {}", path.display(), e))
    })?;
    file.sync_all().map_err(|e| {
        PageError::IoError(format!("failed to sync '{}': {}", path.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_dir_creates_nested() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("a").join("b");

        ensure_dir(&dir).unwrap();
        assert!(dir.is_dir());

        // Existing directory is fine
        ensure_dir(&dir).unwrap();
    }

    #[test]
    fn test_ensure_dir_fails_on_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("occupied");
        fs::write(&file, "x").unwrap();

        let err = ensure_dir(&file).unwrap_err();
        assert!(matches!(err, PageError::IoError(_)));
    }

    #[test]
    fn test_write_file_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("page.html");

        fs::write(&path, "old").unwrap();
        write_file(&path, "new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        assert!(!temp_dir.path().join(".page.html.tmp").exists());
    }

    #[test]
    fn test_write_file_missing_dir_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("page.html");

        let err = write_file(&path, "x").unwrap_err();
        assert!(matches!(err, PageError::IoError(_)));
    }
}
