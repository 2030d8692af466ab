//! Output handler traits and implementations
//!
//! The traversal engine reports progress through an [`OutputHandler`] so the
//! console contract lives outside the crawl loop and tests can observe or
//! silence it.

use crate::crawler::FetchError;
use crate::url::CanonicalUrl;

/// Trait for crawl progress handlers
pub trait OutputHandler {
    /// Records a successfully fetched page
    ///
    /// # Arguments
    ///
    /// * `depth` - Frontier depth of the page
    /// * `url` - The page URL
    fn record_page(&self, depth: u32, url: &CanonicalUrl);

    /// Records a page whose fetch failed
    ///
    /// The engine already logs failures; handlers only need this when they
    /// keep their own record.
    fn record_failure(&self, url: &CanonicalUrl, error: &FetchError) {
        let _ = (url, error);
    }
}

/// Prints the `[Depth d] Crawling: url` progress line to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleOutput;

impl OutputHandler for ConsoleOutput {
    fn record_page(&self, depth: u32, url: &CanonicalUrl) {
        println!("{}", progress_line(depth, url));
    }
}

/// Discards all progress events
#[derive(Debug, Clone, Copy, Default)]
pub struct NullOutput;

impl OutputHandler for NullOutput {
    fn record_page(&self, _depth: u32, _url: &CanonicalUrl) {}
}

/// Formats the per-page progress line
pub fn progress_line(depth: u32, url: &CanonicalUrl) -> String {
    format!("[Depth {}] Crawling: {}", depth, url)
}
