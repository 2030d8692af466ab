//! Visited-set tracking for a single crawl run

use crate::url::CanonicalUrl;
use std::collections::HashSet;

/// Set of canonical URLs already enqueued or processed
///
/// URLs are marked the moment they are enqueued, not when fetched, so a page
/// linked from several places enters the frontier at most once. The set only
/// grows during a run.
#[derive(Debug, Default)]
pub struct VisitedSet {
    seen: HashSet<CanonicalUrl>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the URL has been marked
    pub fn contains(&self, url: &CanonicalUrl) -> bool {
        self.seen.contains(url)
    }

    /// Marks a URL as seen; marking it again is a no-op
    pub fn mark_seen(&mut self, url: CanonicalUrl) {
        self.seen.insert(url);
    }

    /// Marks a URL and reports whether it was new
    ///
    /// This is the single check-and-set step the engine relies on for the
    /// at-most-once enqueue guarantee.
    pub fn insert_if_new(&mut self, url: &CanonicalUrl) -> bool {
        if self.seen.contains(url) {
            return false;
        }
        self.seen.insert(url.clone())
    }

    /// Number of distinct URLs marked so far
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> CanonicalUrl {
        CanonicalUrl::parse(s).unwrap()
    }

    #[test]
    fn test_new_set_is_empty() {
        let visited = VisitedSet::new();
        assert!(visited.is_empty());
        assert!(!visited.contains(&url("https://example.com/")));
    }

    #[test]
    fn test_mark_seen() {
        let mut visited = VisitedSet::new();
        visited.mark_seen(url("https://example.com/a"));
        assert!(visited.contains(&url("https://example.com/a")));
        assert!(!visited.contains(&url("https://example.com/b")));
    }

    #[test]
    fn test_mark_seen_is_idempotent() {
        let mut visited = VisitedSet::new();
        visited.mark_seen(url("https://example.com/a"));
        visited.mark_seen(url("https://example.com/a"));
        assert_eq!(visited.len(), 1);
    }

    #[test]
    fn test_insert_if_new() {
        let mut visited = VisitedSet::new();
        let a = url("https://example.com/a");

        assert!(visited.insert_if_new(&a));
        assert!(!visited.insert_if_new(&a));
        assert!(visited.contains(&a));
        assert_eq!(visited.len(), 1);
    }

    #[test]
    fn test_fragment_variants_share_an_entry() {
        let mut visited = VisitedSet::new();
        assert!(visited.insert_if_new(&url("https://example.com/a#one")));
        assert!(!visited.insert_if_new(&url("https://example.com/a#two")));
    }
}
