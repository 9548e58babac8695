use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

/// Minimum number of items before a progress bar is shown
const PROGRESS_THRESHOLD: usize = 10;

/// Run `operation` over `items` in parallel, keeping input order in the
/// output and drawing a progress bar for large batches
pub fn track_parallel<T, F, R>(items: &[T], operation: F) -> Vec<R>
where
    T: Sync,
    F: Fn(&T) -> R + Sync + Send,
    R: Send,
{
    let progress_bar = if items.len() > PROGRESS_THRESHOLD {
        let pb = ProgressBar::new(items.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({eta})",
                )
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(Arc::new(pb))
    } else {
        None
    };

    let processed = Arc::new(AtomicUsize::new(0));
    let results: Vec<R> = items
        .par_iter()
        .map(|item| {
            let result = operation(item);
            let count = processed.fetch_add(1, Ordering::SeqCst) + 1;
            if let Some(pb) = &progress_bar {
                pb.set_position(count as u64);
            }
            result
        })
        .collect();

    if let Some(pb) = progress_bar {
        pb.finish_with_message("Scan complete");
    }

    results
}
