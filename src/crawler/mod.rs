//! Crawler module for web page fetching and traversal
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching behind the `Fetcher` capability
//! - HTML link extraction behind the `LinkExtractor` capability
//! - The depth-bounded FIFO frontier and the visited set
//! - Overall crawl coordination

mod coordinator;
mod fetcher;
mod frontier;
mod parser;
mod visited;

pub use coordinator::{CrawlResult, Crawler, FailedFetch};
pub use fetcher::{build_http_client, FetchError, FetchedPage, Fetcher, HttpFetcher};
pub use frontier::{Frontier, FrontierEntry};
pub use parser::{HtmlLinkExtractor, LinkExtractor};
pub use visited::VisitedSet;

use crate::config::CrawlerConfig;
use crate::CrawlError;

/// Runs a complete crawl over HTTP with default collaborators
///
/// This is the main entry point for a one-off crawl. It will:
/// 1. Build the HTTP client
/// 2. Normalize the seed URL
/// 3. Fetch pages breadth-first up to `config.max_depth`
/// 4. Extract, normalize, scope and deduplicate links
///
/// Progress is not printed; use [`Crawler::with_output`] for that.
///
/// # Arguments
///
/// * `seed` - Absolute URL to start from
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(CrawlResult)` - Crawl completed
/// * `Err(CrawlError)` - Invalid seed or HTTP client setup failure
///
/// # Example
///
/// ```no_run
/// use depth_crawler::config::CrawlerConfig;
/// use depth_crawler::crawler::crawl;
///
/// # async fn example() -> Result<(), depth_crawler::CrawlError> {
/// let result = crawl("https://example.com", CrawlerConfig::default()).await?;
/// println!("{} URLs discovered", result.total_discovered());
/// # Ok(())
/// # }
/// ```
pub async fn crawl(seed: &str, config: CrawlerConfig) -> Result<CrawlResult, CrawlError> {
    Crawler::from_config(config)?.crawl(seed).await
}
