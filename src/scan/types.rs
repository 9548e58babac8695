use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::class::{ClassSummary, ClassifyOptions};

/// Configuration options for header scanning
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Maximum number of files to process
    pub max_files: Option<usize>,

    /// Number of parallel threads to use; defaults to all but one core
    pub parallel_threads: Option<usize>,

    /// Classifier configuration applied to every class body
    pub classify: ClassifyOptions,
}

/// Statistics about one scanning run
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ScanStats {
    /// Total number of files processed
    pub total_files: usize,

    /// Number of files containing classes
    pub files_with_classes: usize,

    /// Number of files with no classes in them
    pub empty_files: usize,

    /// Number of files that could not be read
    pub error_files: usize,

    /// Paths to files that could not be read
    pub error_file_paths: Vec<PathBuf>,

    /// Total number of classes found
    pub total_classes: usize,
}

impl ScanStats {
    /// Percentage of files that were read successfully
    pub fn success_rate(&self) -> f64 {
        if self.total_files == 0 {
            return 0.0;
        }
        let successful = self.total_files - self.error_files;
        (successful as f64 / self.total_files as f64) * 100.0
    }
}

/// All classes found in one file, in discovery order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileSummary {
    /// Path to the scanned file
    pub file_path: PathBuf,

    /// Class summaries in discovery order
    pub classes: Vec<ClassSummary>,
}

/// Result of a scanning run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    /// Per-file summaries for files that contained classes
    pub summaries: Vec<FileSummary>,

    /// Statistics about the run
    pub stats: ScanStats,
}
