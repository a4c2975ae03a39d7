//! Filesystem utilities.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use url::Url;

/// Read a file to string, with nice error messages.
pub fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read file: {}", path.display()))
}

/// Write a string to a file, creating parent directories if needed.
pub fn write_string(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory: {}", parent.display()))?;
        }
    }
    fs::write(path, contents).with_context(|| format!("failed to write file: {}", path.display()))
}

/// Canonicalize a path, but don't fail if it doesn't exist yet.
///
/// The deepest existing ancestor is canonicalized and the missing
/// components are appended to it.
pub fn normalize_path(path: &Path) -> PathBuf {
    if let Ok(canonical) = path.canonicalize() {
        return canonical;
    }

    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(_) => return path.to_path_buf(),
        }
    };

    match (absolute.parent(), absolute.file_name()) {
        (Some(parent), Some(name)) => normalize_path(parent).join(name),
        _ => absolute,
    }
}

/// `file:` URL for a directory, always ending in `/`.
pub fn directory_url(dir: &Path) -> Result<Url> {
    let dir = normalize_path(dir);
    Url::from_directory_path(&dir).map_err(|_| anyhow!("invalid directory path: {}", dir.display()))
}

/// `file:` URL for the directory containing `file`.
pub fn parent_directory_url(file: &Path) -> Result<Url> {
    let file = normalize_path(file);
    let parent = file
        .parent()
        .ok_or_else(|| anyhow!("path has no parent directory: {}", file.display()))?;
    directory_url(parent)
}
