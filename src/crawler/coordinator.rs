//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the traversal engine that drives every crawl:
//! - Normalizing the seed and initializing the per-run state
//! - Pulling entries from the frontier in FIFO order
//! - Coordinating fetching, link extraction, normalization and scoping
//! - Deduplicating and enqueueing newly discovered URLs
//! - Stopping early when a shutdown is requested

use crate::config::CrawlerConfig;
use crate::crawler::fetcher::{Fetcher, HttpFetcher};
use crate::crawler::frontier::{Frontier, FrontierEntry};
use crate::crawler::parser::{HtmlLinkExtractor, LinkExtractor};
use crate::crawler::visited::VisitedSet;
use crate::output::{NullOutput, OutputHandler};
use crate::url::{in_scope, normalize, CanonicalUrl};
use crate::CrawlError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// A page whose fetch failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedFetch {
    /// The URL that failed
    pub url: CanonicalUrl,

    /// Frontier depth of the URL
    pub depth: u32,

    /// Error message
    pub error: String,
}

/// Outcome of a single crawl run
#[derive(Debug, Clone)]
pub struct CrawlResult {
    /// Canonical form of the seed URL
    pub base_url: CanonicalUrl,

    /// Depth ceiling the run used
    pub max_depth: u32,

    /// Every distinct in-scope URL, in discovery order; the seed is first
    pub discovered: Vec<CanonicalUrl>,

    /// Number of pages fetched successfully
    pub pages_crawled: usize,

    /// Pages whose fetch failed, in the order they were attempted
    pub failures: Vec<FailedFetch>,

    /// True if the run stopped because a shutdown was requested
    pub interrupted: bool,
}

impl CrawlResult {
    /// Creates a result whose discovered list holds only the seed
    pub fn new(base_url: CanonicalUrl, max_depth: u32) -> Self {
        Self {
            discovered: vec![base_url.clone()],
            base_url,
            max_depth,
            pages_crawled: 0,
            failures: Vec::new(),
            interrupted: false,
        }
    }

    /// Number of distinct URLs discovered, the seed included
    ///
    /// URLs found on the deepest layer count even though they are never
    /// fetched.
    pub fn total_discovered(&self) -> usize {
        self.discovered.len()
    }
}

/// Mutable state owned by exactly one crawl run
struct CrawlRun {
    seed_host: String,
    frontier: Frontier,
    visited: VisitedSet,
    result: CrawlResult,
}

impl CrawlRun {
    /// Seeds the frontier at depth 0 and marks the seed as visited
    fn new(seed: CanonicalUrl, max_depth: u32) -> Self {
        let mut frontier = Frontier::new(max_depth);
        let mut visited = VisitedSet::new();

        visited.mark_seen(seed.clone());
        frontier.push(seed.clone(), 0);

        Self {
            seed_host: seed.host().to_string(),
            frontier,
            visited,
            result: CrawlResult::new(seed, max_depth),
        }
    }

    /// Processes the hrefs extracted from a fetched page
    ///
    /// Each href is resolved against the page it came from, kept only if it
    /// stays on the seed host and has not been seen, then recorded as
    /// discovered. It is enqueued only when the next depth is within the
    /// ceiling. Returns the number of newly discovered URLs.
    fn handle_discovered_links(&mut self, page: &FrontierEntry, hrefs: &[String]) -> usize {
        let next_depth = page.depth + 1;
        let mut new_links = 0;

        for href in hrefs {
            let url = match normalize(href, &page.url) {
                Ok(url) => url,
                Err(e) => {
                    tracing::debug!("Skipping link {:?} on {}: {}", href, page.url, e);
                    continue;
                }
            };

            if !in_scope(&url, &self.seed_host) {
                tracing::trace!("Skipping out-of-scope link {}", url);
                continue;
            }

            if !self.visited.insert_if_new(&url) {
                continue;
            }

            self.result.discovered.push(url.clone());
            new_links += 1;

            if !self.frontier.push(url, next_depth) {
                tracing::trace!("Depth {} exceeds ceiling, not enqueueing", next_depth);
            }
        }

        new_links
    }

    fn finish(self) -> CrawlResult {
        self.result
    }
}

/// Breadth-first, depth-bounded crawler
///
/// The crawler itself is stateless between runs: every call to
/// [`Crawler::crawl`] builds a fresh frontier, visited set and result.
pub struct Crawler<F, E = HtmlLinkExtractor> {
    config: CrawlerConfig,
    fetcher: F,
    extractor: E,
    output: Box<dyn OutputHandler + Send + Sync>,
    shutdown: Option<Arc<AtomicBool>>,
}

impl Crawler<HttpFetcher, HtmlLinkExtractor> {
    /// Creates a crawler that fetches over HTTP and parses HTML
    ///
    /// # Returns
    ///
    /// * `Ok(Crawler)` - Ready to crawl
    /// * `Err(CrawlError)` - The HTTP client could not be built
    pub fn from_config(config: CrawlerConfig) -> Result<Self, CrawlError> {
        let fetcher = HttpFetcher::new(&config)?;
        Ok(Self::new(config, fetcher, HtmlLinkExtractor))
    }
}

impl<F: Fetcher, E: LinkExtractor> Crawler<F, E> {
    /// Creates a crawler from its collaborators
    pub fn new(config: CrawlerConfig, fetcher: F, extractor: E) -> Self {
        Self {
            config,
            fetcher,
            extractor,
            output: Box::new(NullOutput),
            shutdown: None,
        }
    }

    /// Sets the handler that receives per-page progress
    pub fn with_output(mut self, output: Box<dyn OutputHandler + Send + Sync>) -> Self {
        self.output = output;
        self
    }

    /// Sets a flag that stops the crawl before the next fetch once raised
    pub fn with_shutdown(mut self, flag: Arc<AtomicBool>) -> Self {
        self.shutdown = Some(flag);
        self
    }

    /// Runs a complete crawl from `seed`
    ///
    /// 1. Normalize the seed; an invalid seed is the only fatal error
    /// 2. Fetch frontier entries in FIFO order, pausing before each request
    /// 3. On success, extract links and feed them through normalization,
    ///    scoping and deduplication
    /// 4. On failure, record it and move on
    /// 5. Stop when the frontier is empty or a shutdown is requested
    ///
    /// The seed is always fetched, even with a depth ceiling of 0.
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlResult)` - The crawl ran to completion or was interrupted
    /// * `Err(CrawlError::InvalidSeed)` - The seed could not be normalized
    pub async fn crawl(&self, seed: &str) -> Result<CrawlResult, CrawlError> {
        let seed_url = CanonicalUrl::parse(seed).map_err(|source| CrawlError::InvalidSeed {
            url: seed.to_string(),
            source,
        })?;

        tracing::info!(
            "Starting crawl at {} (max depth {})",
            seed_url,
            self.config.max_depth
        );

        let start_time = Instant::now();
        let mut run = CrawlRun::new(seed_url, self.config.max_depth);

        loop {
            if self.stop_requested(&mut run, 0) {
                break;
            }

            let entry = match run.frontier.pop() {
                Some(entry) => entry,
                None => {
                    tracing::debug!("Frontier is empty, crawl complete");
                    break;
                }
            };

            self.wait_before_request().await;

            // the flag may have been raised during the pause
            if self.stop_requested(&mut run, 1) {
                break;
            }

            match self.fetcher.fetch(&entry.url).await {
                Ok(page) => {
                    run.result.pages_crawled += 1;
                    self.output.record_page(entry.depth, &entry.url);

                    let hrefs = self.extractor.extract_hrefs(&page.body);
                    let new_links = run.handle_discovered_links(&entry, &hrefs);

                    tracing::debug!(
                        "{} (HTTP {} from {}): {} links, {} new, {} in frontier",
                        entry.url,
                        page.status_code,
                        page.final_url,
                        hrefs.len(),
                        new_links,
                        run.frontier.len()
                    );
                }
                Err(e) => {
                    tracing::warn!("Failed to retrieve {}: {}", entry.url, e);
                    self.output.record_failure(&entry.url, &e);
                    run.result.failures.push(FailedFetch {
                        url: entry.url,
                        depth: entry.depth,
                        error: e.to_string(),
                    });
                }
            }
        }

        let result = run.finish();

        tracing::info!(
            "Crawl completed: {} pages crawled, {} URLs discovered, {} failures in {:?}",
            result.pages_crawled,
            result.total_discovered(),
            result.failures.len(),
            start_time.elapsed()
        );

        Ok(result)
    }

    fn shutdown_requested(&self) -> bool {
        self.shutdown
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::SeqCst))
    }

    /// Marks the run interrupted when a shutdown was requested.
    /// `in_hand` counts an entry already popped but not yet fetched.
    fn stop_requested(&self, run: &mut CrawlRun, in_hand: usize) -> bool {
        if !self.shutdown_requested() {
            return false;
        }

        tracing::info!(
            "Shutdown requested, stopping with {} URLs still in frontier",
            run.frontier.len() + in_hand
        );
        run.result.interrupted = true;
        true
    }

    /// Politeness pause; skipped entirely when the delay is zero
    async fn wait_before_request(&self) {
        let delay = self.config.request_delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}
