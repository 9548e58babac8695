pub mod classifier;
pub mod locator;
pub mod types;

// Re-export the main API for easier access
pub use classifier::classify;
pub use locator::locate;
pub use types::{ClassEntry, ClassSummary, ClassifyOptions, Declaration, Role, Visibility};

use log::debug;

use crate::{lex, scope};

/// Parse header-like text into visibility-tagged class summaries.
///
/// The single entry point of the pipeline: normalization, scope
/// extraction, class location and body classification run in one pass
/// over in-memory text. Malformed input degrades to a partial or empty
/// result; this never fails.
pub fn parse(text: &str) -> Vec<ClassSummary> {
    parse_with_options(text, &ClassifyOptions::default())
}

/// Like [`parse`], with an explicit classifier configuration
pub fn parse_with_options(text: &str, options: &ClassifyOptions) -> Vec<ClassSummary> {
    let stripped = lex::strip_comments(text);
    let tokens = lex::tokenize(&stripped);
    let root = scope::extract(&tokens);
    let entries = locate(&root);
    debug!("located {} classes", entries.len());

    entries
        .into_iter()
        .map(|entry| ClassSummary {
            declarations: classify(&entry.body, options),
            name: entry.name,
        })
        .collect()
}
