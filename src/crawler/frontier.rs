//! Frontier for the breadth-first crawl
//!
//! This module holds the two pieces of traversal state:
//! - The FIFO queue of URLs waiting to be processed
//! - The set of URLs already dequeued and accepted for processing
//!
//! URLs are compared as strings. Nothing is normalized, so two spellings of the
//! same resource are two entries.

use std::collections::{HashSet, VecDeque};

/// FIFO frontier plus visited set
#[derive(Debug, Default)]
pub struct Frontier {
    /// URLs waiting to be processed, in discovery order
    queue: VecDeque<String>,

    /// URLs already accepted for processing; only ever grows
    visited: HashSet<String>,
}

impl Frontier {
    /// Creates a frontier holding only the seed URL
    pub fn new(seed: impl Into<String>) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(seed.into());

        Self {
            queue,
            visited: HashSet::new(),
        }
    }

    /// Removes and returns the oldest queued URL
    pub fn pop(&mut self) -> Option<String> {
        self.queue.pop_front()
    }

    /// Appends a discovered URL unless it has already been visited
    ///
    /// URLs that are queued but not yet visited are appended again; the
    /// duplicate is discarded when it reaches the front.
    ///
    /// # Returns
    ///
    /// * `true` - The URL was queued
    /// * `false` - The URL was already visited
    pub fn enqueue(&mut self, url: String) -> bool {
        if self.visited.contains(&url) {
            return false;
        }
        self.queue.push_back(url);
        true
    }

    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    /// Records a URL as visited
    pub fn mark_visited(&mut self, url: &str) {
        self.visited.insert(url.to_string());
    }

    /// Number of URLs waiting in the queue
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}
