pub mod class;
pub mod lex;
pub mod report;
pub mod scan;
pub mod scope;
pub mod utils;

#[cfg(test)]
mod tests;

// Re-export main types and functions for easier access
pub use class::{
    ClassEntry, ClassSummary, ClassifyOptions, Declaration, Role, Visibility, classify, locate,
    parse, parse_with_options,
};
pub use report::{render_html, render_text};
pub use scan::{FileCollector, FileSummary, HeaderProcessor, ScanOptions, ScanResult, ScanStats};
pub use scope::{ScopeNode, ScopePath, extract};

// Re-export utility functions
pub use utils::file_utils;
