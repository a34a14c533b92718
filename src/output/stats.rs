//! Run statistics
//!
//! This module collects the counters of one scrape run (crawl and extraction
//! passes) and prints them for the user.

use crate::crawler::CrawlStats;

/// Scrape run statistics summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrapeStatistics {
    /// Pages successfully fetched during the crawl
    pub pages_visited: usize,

    /// Crawl fetches that failed
    pub fetch_failures: usize,

    /// URLs skipped because robots.txt disallowed them
    pub disallowed: usize,

    /// Frontier entries skipped because they were already visited
    pub duplicates_skipped: usize,

    /// Links appended to the frontier
    pub links_queued: usize,

    /// URLs still queued when the crawl stopped
    pub frontier_remaining: usize,

    /// Pages re-fetched successfully for extraction
    pub pages_scraped: usize,

    /// Pages whose extraction fetch failed
    pub scrape_failures: usize,

    /// Records extracted across all pages
    pub records_found: usize,
}

impl ScrapeStatistics {
    /// Seeds statistics from the crawl pass
    pub fn from_crawl(stats: &CrawlStats, pages_visited: usize) -> Self {
        Self {
            pages_visited,
            fetch_failures: stats.fetch_failures,
            disallowed: stats.disallowed,
            duplicates_skipped: stats.duplicates_skipped,
            links_queued: stats.links_queued,
            frontier_remaining: stats.frontier_remaining,
            ..Self::default()
        }
    }
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &ScrapeStatistics) {
    println!("=== Scrape Statistics ===\n");

    println!("Crawl:");
    println!("  Pages visited: {}", stats.pages_visited);
    println!("  Failed fetches: {}", stats.fetch_failures);
    println!("  Disallowed by robots.txt: {}", stats.disallowed);
    println!("  Duplicate skips: {}", stats.duplicates_skipped);
    println!("  Links queued: {}", stats.links_queued);
    println!("  Left in frontier: {}", stats.frontier_remaining);
    println!();

    println!("Extraction:");
    println!("  Pages scraped: {}", stats.pages_scraped);
    println!("  Failed scrapes: {}", stats.scrape_failures);
    println!("  Records found: {}", stats.records_found);
    println!();
}
