//! Small file I/O helpers shared by the sift crates

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Read a file to a string, mapping "file does not exist" to `None`.
pub fn read_opt(path: &Path) -> io::Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Create an empty file, creating parent directories as needed.
///
/// Returns `true` if the file was created, `false` if it already existed.
/// An existing file is never truncated.
pub fn create_file_with_path(path: &Path) -> io::Result<bool> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(e),
    }
}

/// Truncate `path` and write `contents` in place.
///
/// This is a plain truncate-then-write, not a write-to-temp-then-rename: a
/// failure after the truncate can leave the file empty, and concurrent
/// writers race with last-writer-wins semantics.
pub fn truncate_and_write(path: &Path, contents: &str) -> io::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    file.write_all(contents.as_bytes())
}
