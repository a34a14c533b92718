//! End-to-end scrape pipeline
//!
//! seed URL → crawl → extraction pass over every visited page → CSV export.
//!
//! The extraction pass fetches each visited page again with the crawler's
//! fetcher and applies the same politeness delay after every successful fetch.
//! A page that fails at this point is logged and contributes no records.

use crate::config::Config;
use crate::crawler::{CrawlReport, Crawler, PageFetcher};
use crate::extract::{Record, RecordExtractor};
use crate::output::{CsvExporter, ScrapeStatistics};
use crate::ScrapeError;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// How a scrape run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapeOutcome {
    /// Records were found and written
    Exported { path: PathBuf, records: usize },

    /// The crawl completed but no page yielded a record; nothing was written
    NoRecordsFound,

    /// robots.txt forbids the seed; nothing was fetched
    SeedDisallowed { url: String },
}

/// Outcome plus the counters gathered along the way
#[derive(Debug, Clone)]
pub struct ScrapeReport {
    pub outcome: ScrapeOutcome,
    pub statistics: ScrapeStatistics,
}

/// Records gathered by the extraction pass
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub records: Vec<Record>,
    pub pages_scraped: usize,
    pub failures: usize,
}

/// Crawls `seed`, extracts records from every visited page and exports them
///
/// # Returns
///
/// * `Ok(ScrapeReport)` - The run completed; see [`ScrapeOutcome`]
/// * `Err(ScrapeError)` - Invalid configuration or seed, HTTP client setup
///   failure, or the CSV destination could not be written
///
/// # Example
///
/// ```no_run
/// use medcrawl::{scrape_site, Config, ScrapeOutcome};
///
/// # async fn example() -> Result<(), medcrawl::ScrapeError> {
/// let report = scrape_site(&Config::default(), "https://clinic.example/").await?;
/// if let ScrapeOutcome::Exported { path, records } = report.outcome {
///     println!("{} records written to {}", records, path.display());
/// }
/// # Ok(())
/// # }
/// ```
pub async fn scrape_site(config: &Config, seed: &str) -> Result<ScrapeReport, ScrapeError> {
    let extractor = RecordExtractor::new(&config.extraction)?;
    let mut crawler = Crawler::new(config)?;

    let crawl = match crawler.crawl(seed).await {
        Ok(report) => report,
        Err(ScrapeError::SeedDisallowed { url }) => {
            return Ok(ScrapeReport {
                outcome: ScrapeOutcome::SeedDisallowed { url },
                statistics: ScrapeStatistics::default(),
            });
        }
        Err(e) => return Err(e),
    };

    let extraction = extract_records(
        crawler.fetcher(),
        &extractor,
        &crawl,
        config.crawler.request_delay(),
    )
    .await;

    let mut statistics = ScrapeStatistics::from_crawl(&crawl.stats, crawl.pages.len());
    statistics.pages_scraped = extraction.pages_scraped;
    statistics.scrape_failures = extraction.failures;
    statistics.records_found = extraction.records.len();

    if extraction.records.is_empty() {
        tracing::info!("No records found on {} pages", crawl.pages.len());
        return Ok(ScrapeReport {
            outcome: ScrapeOutcome::NoRecordsFound,
            statistics,
        });
    }

    let path = Path::new(&config.output.csv_path);
    CsvExporter::new().export(&extraction.records, path)?;
    tracing::info!(
        "Exported {} records to {}",
        extraction.records.len(),
        path.display()
    );

    Ok(ScrapeReport {
        outcome: ScrapeOutcome::Exported {
            path: path.to_path_buf(),
            records: extraction.records.len(),
        },
        statistics,
    })
}

/// Fetches every crawled page again and extracts its records, in crawl order
pub async fn extract_records(
    fetcher: &PageFetcher,
    extractor: &RecordExtractor,
    crawl: &CrawlReport,
    delay: Duration,
) -> Extraction {
    let mut extraction = Extraction::default();

    for url in &crawl.pages {
        match fetcher.fetch(url).await {
            Ok(page) => {
                let records = extractor.extract_html(&page.body);
                tracing::debug!("{} records on {}", records.len(), url);
                extraction.records.extend(records);
                extraction.pages_scraped += 1;

                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
            }
            Err(e) => {
                tracing::warn!("Failed to scrape {}: {}", url, e);
                extraction.failures += 1;
            }
        }
    }

    extraction
}
