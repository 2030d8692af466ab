//! Closing report printed once the crawl stops

use crate::crawler::CrawlResult;
use crate::output::summary::render_summary;
use crate::output::writer::{save_results, WriteError};
use std::path::Path;

/// Notice printed ahead of the summary when the crawl was interrupted
pub const INTERRUPTED_NOTICE: &str = "Crawling interrupted by user.";

/// Renders the interruption notice (when present) followed by the summary
pub fn render_report(result: &CrawlResult) -> String {
    let summary = render_summary(result);
    if result.interrupted {
        format!("\n{}\n{}", INTERRUPTED_NOTICE, summary)
    } else {
        summary
    }
}

/// Line printed after the discovered URLs were written to `path`
pub fn saved_line(count: usize, path: &Path) -> String {
    format!("\nSaved {} URLs to {}", count, path.display())
}

/// Prints the closing report and saves the discovered URLs
///
/// The summary is printed even when saving fails; the caller decides how
/// to surface the error.
///
/// # Returns
///
/// * `Ok(Some(count))` - URLs written to `output`
/// * `Ok(None)` - No output file was requested
/// * `Err(WriteError)` - The output file could not be written
pub fn report(result: &CrawlResult, output: Option<&Path>) -> Result<Option<usize>, WriteError> {
    print!("{}", render_report(result));

    let Some(path) = output else {
        return Ok(None);
    };

    let count = save_results(&result.discovered, path)?;
    println!("{}", saved_line(count, path));
    Ok(Some(count))
}

/// Process exit status for a finished crawl: 1 when interrupted, else 0
pub fn exit_status(result: &CrawlResult) -> u8 {
    u8::from(result.interrupted)
}
