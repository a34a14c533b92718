//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with failure classification
//! - HTML parsing and same-domain link extraction
//! - The FIFO frontier and visited set
//! - Overall crawl coordination

mod coordinator;
mod fetcher;
mod frontier;
mod parser;

pub use coordinator::{CrawlReport, CrawlStats, CrawlTarget, Crawler};
pub use fetcher::{build_http_client, FetchError, FetchedPage, PageFetcher};
pub use frontier::Frontier;
pub use parser::extract_links;
