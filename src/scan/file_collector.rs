use std::path::{Path, PathBuf};

use anyhow::Result;
use log::{debug, trace};
use walkdir::WalkDir;

use crate::utils::file_utils;

/// Finds header-like files under a directory tree
#[derive(Debug)]
pub struct FileCollector {
    /// File extensions considered header-like
    extensions: Vec<String>,
}

impl Default for FileCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl FileCollector {
    /// Create a collector for the default header extensions
    pub fn new() -> Self {
        Self {
            extensions: ["h", "hpp", "hxx", "hh"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Create a collector for a custom extension set
    pub fn with_extensions(extensions: Vec<String>) -> Self {
        Self { extensions }
    }

    /// Collect all files with matching extensions under `input_dir`
    pub fn collect_files(&self, input_dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        let input_dir = input_dir.as_ref();
        debug!("Collecting header files from {}", input_dir.display());

        let refs: Vec<&str> = self.extensions.iter().map(String::as_str).collect();
        let mut files = Vec::new();
        for entry in WalkDir::new(input_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            if file_utils::has_any_extension(entry.path(), &refs) {
                trace!("Found header: {}", entry.path().display());
                files.push(entry.path().to_owned());
            }
        }

        debug!("Collected {} header files", files.len());
        Ok(files)
    }

    /// Add another extension to collect
    pub fn add_extension(&mut self, extension: &str) {
        if !self.extensions.iter().any(|e| e == extension) {
            self.extensions.push(extension.to_string());
        }
    }

    /// The extensions currently collected
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }
}
