//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the breadth-first crawl loop. Each iteration:
//! 1. Pops the oldest URL from the frontier
//! 2. Skips it if already visited or disallowed by robots.txt
//! 3. Marks it visited and fetches it
//! 4. On success, queues its same-domain links and records it as a page
//! 5. Sleeps for the configured politeness delay
//!
//! Requests are awaited one at a time, so there is never more than one
//! request in flight.

use crate::config::{Config, CrawlerConfig};
use crate::crawler::fetcher::{build_http_client, PageFetcher};
use crate::crawler::frontier::Frontier;
use crate::crawler::parser::extract_links;
use crate::robots::RobotsChecker;
use crate::url::{domain_of, parse_http_url};
use crate::{ScrapeError, UrlError, UrlResult};
use reqwest::Client;
use url::Url;

/// Pages between progress log lines
const PROGRESS_INTERVAL: usize = 10;

/// The seed URL and the domain every crawled page must share
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlTarget {
    pub url: Url,
    pub domain: String,
}

impl CrawlTarget {
    /// Parses a seed URL and computes its domain
    ///
    /// ```
    /// use medcrawl::crawler::CrawlTarget;
    ///
    /// let target = CrawlTarget::from_seed("https://Clinic.Example/doctors").unwrap();
    /// assert_eq!(target.domain, "clinic.example");
    /// ```
    pub fn from_seed(seed: &str) -> UrlResult<Self> {
        let url = parse_http_url(seed)?;
        let domain = domain_of(&url).ok_or_else(|| UrlError::MissingDomain(seed.to_string()))?;
        Ok(Self { url, domain })
    }
}

/// Counters collected during one crawl
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlStats {
    /// URLs popped from the frontier
    pub dequeued: usize,
    /// URLs skipped because they were already visited
    pub duplicates_skipped: usize,
    /// URLs skipped because robots.txt disallowed them
    pub disallowed: usize,
    /// Visited URLs whose fetch failed
    pub fetch_failures: usize,
    /// Links appended to the frontier
    pub links_queued: usize,
    /// URLs still queued when the crawl stopped
    pub frontier_remaining: usize,
}

/// Result of a completed crawl
#[derive(Debug, Clone)]
pub struct CrawlReport {
    pub target: CrawlTarget,
    /// Successfully fetched pages, in visit order
    pub pages: Vec<String>,
    pub stats: CrawlStats,
}

/// Main crawler structure
pub struct Crawler {
    config: CrawlerConfig,
    fetcher: PageFetcher,
    robots: RobotsChecker,
}

impl Crawler {
    /// Creates a new crawler from the full configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Crawler)` - Ready to crawl
    /// * `Err(ScrapeError)` - The HTTP client could not be built
    pub fn new(config: &Config) -> Result<Self, ScrapeError> {
        let client = build_http_client(&config.user_agent, config.crawler.fetch_timeout())?;
        Ok(Self::with_client(config.crawler.clone(), client))
    }

    /// Creates a crawler around an existing client
    pub fn with_client(config: CrawlerConfig, client: Client) -> Self {
        Self {
            config,
            robots: RobotsChecker::new(client.clone()),
            fetcher: PageFetcher::new(client),
        }
    }

    /// The page fetcher used by this crawler
    pub fn fetcher(&self) -> &PageFetcher {
        &self.fetcher
    }

    /// Crawls `seed` breadth-first within its domain
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlReport)` - At most `max_pages` successfully fetched pages
    /// * `Err(ScrapeError::InvalidSeed)` - The seed is not an absolute HTTP(S) URL
    /// * `Err(ScrapeError::SeedDisallowed)` - robots.txt forbids the seed; no page was fetched
    ///
    /// # Example
    ///
    /// ```no_run
    /// use medcrawl::{Config, Crawler};
    ///
    /// # async fn example() -> Result<(), medcrawl::ScrapeError> {
    /// let mut crawler = Crawler::new(&Config::default())?;
    /// let report = crawler.crawl("https://clinic.example/").await?;
    /// println!("visited {} pages", report.pages.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn crawl(&mut self, seed: &str) -> Result<CrawlReport, ScrapeError> {
        let target = CrawlTarget::from_seed(seed)?;
        let seed_url = target.url.to_string();

        if !self.robots.allowed(&seed_url).await {
            tracing::info!("Seed {} disallowed by robots.txt", seed_url);
            return Err(ScrapeError::SeedDisallowed { url: seed_url });
        }

        tracing::info!(
            "Starting crawl of {} (max {} pages)",
            target.domain,
            self.config.max_pages
        );

        let delay = self.config.request_delay();
        let mut frontier = Frontier::new(seed_url);
        let mut pages: Vec<String> = Vec::new();
        let mut stats = CrawlStats::default();

        // The seed passes the robots check again here; `disallowed` never counts it.
        while pages.len() < self.config.max_pages {
            let Some(url) = frontier.pop() else {
                tracing::debug!("Frontier is empty");
                break;
            };
            stats.dequeued += 1;

            if frontier.is_visited(&url) {
                stats.duplicates_skipped += 1;
                continue;
            }

            if !self.robots.allowed(&url).await {
                tracing::debug!("URL {} disallowed by robots.txt", url);
                stats.disallowed += 1;
                continue;
            }

            frontier.mark_visited(&url);

            let page = match self.fetcher.fetch(&url).await {
                Ok(page) => page,
                Err(e) => {
                    tracing::warn!("Failed to access {}: {}", url, e);
                    stats.fetch_failures += 1;
                    continue;
                }
            };

            if page.final_url != url {
                tracing::debug!("{} redirected to {}", url, page.final_url);
            }

            if let Ok(base_url) = Url::parse(&url) {
                for link in extract_links(&page.body, &base_url, &target.domain) {
                    if frontier.enqueue(link) {
                        stats.links_queued += 1;
                    }
                }
            }

            tracing::debug!("Visited {} ({} in frontier)", url, frontier.len());
            pages.push(url);

            if pages.len() % PROGRESS_INTERVAL == 0 {
                tracing::info!(
                    "Progress: {} pages visited, {} in frontier",
                    pages.len(),
                    frontier.len()
                );
            }

            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
        }

        stats.frontier_remaining = frontier.len();

        tracing::info!(
            "Crawl completed: {} pages visited, {} failed, {} disallowed",
            pages.len(),
            stats.fetch_failures,
            stats.disallowed
        );

        Ok(CrawlReport {
            target,
            pages,
            stats,
        })
    }
}
