use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Check if a file has a specific extension, case-insensitively
pub fn has_extension(path: impl AsRef<Path>, extension: &str) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}

/// Check if a file has one of the specified extensions
pub fn has_any_extension(path: impl AsRef<Path>, extensions: &[&str]) -> bool {
    extensions
        .iter()
        .any(|ext| has_extension(path.as_ref(), ext))
}

/// Read a file to string with better error handling
pub fn read_file_to_string(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).with_context(|| format!("Failed to read file {}", path.display()))
}

/// Write a string to a file, creating parent directories as needed
pub fn write_string_to_file(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    fs::write(path, content).with_context(|| format!("Failed to write file {}", path.display()))
}
