mod file_collector;
mod progress;
mod types;

// Re-export from submodules
pub use file_collector::FileCollector;
pub use types::{FileSummary, ScanOptions, ScanResult, ScanStats};

use std::path::{Path, PathBuf};

use anyhow::Result;
use log::{debug, info, warn};

use crate::class::{self, ClassSummary};
use crate::utils::file_utils;

/// Scans header files and turns each into class summaries
#[derive(Debug, Default)]
pub struct HeaderProcessor {
    /// Configuration options for scanning
    options: ScanOptions,

    /// File collector for finding header files
    file_collector: FileCollector,
}

impl HeaderProcessor {
    /// Create a processor with the given options and collector
    pub fn new(options: ScanOptions, file_collector: FileCollector) -> Self {
        Self {
            options,
            file_collector,
        }
    }

    /// Create a processor with default options
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Scan a directory tree for header files and process them
    pub fn scan_directory(&self, input_dir: impl AsRef<Path>) -> Result<ScanResult> {
        let input_dir = input_dir.as_ref();
        info!("Scanning directory: {}", input_dir.display());

        let files = self.file_collector.collect_files(input_dir)?;
        info!("Found {} files to process", files.len());

        Ok(self.process_files(&files))
    }

    /// Process a list of header files in parallel.
    ///
    /// A file that cannot be read is recorded in the statistics and never
    /// aborts the scan.
    pub fn process_files(&self, files: &[PathBuf]) -> ScanResult {
        let files = match self.options.max_files {
            Some(max) if files.len() > max => {
                warn!("Limiting to {} files out of {}", max, files.len());
                &files[..max]
            }
            _ => files,
        };

        self.configure_thread_pool();

        let outcomes = progress::track_parallel(files, |file| self.process_file(file));

        let mut stats = ScanStats {
            total_files: files.len(),
            ..ScanStats::default()
        };
        let mut summaries = Vec::new();
        for outcome in outcomes {
            match outcome {
                Ok(summary) if summary.classes.is_empty() => stats.empty_files += 1,
                Ok(summary) => {
                    stats.files_with_classes += 1;
                    stats.total_classes += summary.classes.len();
                    summaries.push(summary);
                }
                Err(path) => {
                    stats.error_files += 1;
                    stats.error_file_paths.push(path);
                }
            }
        }

        info!(
            "Processed {} files, found {} classes",
            stats.total_files, stats.total_classes
        );
        ScanResult { summaries, stats }
    }

    fn process_file(&self, file: &PathBuf) -> Result<FileSummary, PathBuf> {
        debug!("Processing file: {}", file.display());
        match file_utils::read_file_to_string(file) {
            Ok(content) => {
                let classes: Vec<ClassSummary> =
                    class::parse_with_options(&content, &self.options.classify);
                debug!("Found {} classes in {}", classes.len(), file.display());
                Ok(FileSummary {
                    file_path: file.clone(),
                    classes,
                })
            }
            Err(e) => {
                warn!("Failed to read {}: {}", file.display(), e);
                Err(file.clone())
            }
        }
    }

    fn configure_thread_pool(&self) {
        let threads = self.options.parallel_threads.unwrap_or_else(|| {
            let available = num_cpus::get();
            std::cmp::max(1, available.saturating_sub(1))
        });
        debug!("Using {} threads for parallel processing", threads);

        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .unwrap_or_else(|e| debug!("Thread pool already configured: {}", e));
    }
}
