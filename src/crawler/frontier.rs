//! Depth-bounded FIFO frontier
//!
//! Entries are processed strictly in insertion order, which makes the walk
//! breadth-first: every page at depth `d` is fetched before any page at
//! depth `d + 1`.

use crate::url::CanonicalUrl;
use std::collections::VecDeque;

/// A URL waiting to be fetched, with its distance from the seed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontierEntry {
    /// The URL to fetch
    pub url: CanonicalUrl,

    /// Number of link hops from the seed (the seed is depth 0)
    pub depth: u32,
}

/// Queue of pending fetches that refuses entries beyond the depth ceiling
#[derive(Debug)]
pub struct Frontier {
    queue: VecDeque<FrontierEntry>,
    max_depth: u32,
}

impl Frontier {
    /// Creates an empty frontier with the given depth ceiling
    pub fn new(max_depth: u32) -> Self {
        Self {
            queue: VecDeque::new(),
            max_depth,
        }
    }

    /// Returns true if an entry at `depth` may be enqueued
    pub fn admits(&self, depth: u32) -> bool {
        depth <= self.max_depth
    }

    /// Enqueues a URL at the back of the queue
    ///
    /// Returns false, leaving the queue untouched, when `depth` exceeds the
    /// ceiling.
    pub fn push(&mut self, url: CanonicalUrl, depth: u32) -> bool {
        if !self.admits(depth) {
            return false;
        }
        self.queue.push_back(FrontierEntry { url, depth });
        true
    }

    /// Removes the oldest entry
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }
}
