//! HTTP fetcher implementation
//!
//! This module handles all page requests for the crawler:
//! - Building the HTTP client with the configured user agent and timeout
//! - GET requests to fetch page content
//! - Error classification (transport failure vs. non-2xx status)
//!
//! There are no retries. A failed fetch is returned to the caller, which
//! skips the URL for the rest of the run.

use crate::config::UserAgentConfig;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// A successfully fetched page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects
    pub final_url: String,
    /// Page body content
    pub body: String,
}

/// Why a page could not be fetched
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a usable response (DNS, connect, timeout, body read)
    #[error("transport error for {url}: {reason}")]
    Transport { url: String, reason: String },

    /// The server answered with a non-2xx status
    #[error("HTTP {status} for {url}")]
    HttpStatus { url: String, status: u16 },
}

impl FetchError {
    /// The URL that failed
    pub fn url(&self) -> &str {
        match self {
            Self::Transport { url, .. } | Self::HttpStatus { url, .. } => url,
        }
    }

    fn transport(url: &str, error: &reqwest::Error) -> Self {
        let reason = if error.is_timeout() {
            "Request timeout".to_string()
        } else if error.is_connect() {
            "Connection refused".to_string()
        } else {
            error.to_string()
        };

        Self::Transport {
            url: url.to_string(),
            reason,
        }
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The user agent configuration
/// * `timeout` - Deadline for a whole request, connect through body
///
/// # Example
///
/// ```no_run
/// use medcrawl::config::UserAgentConfig;
/// use medcrawl::crawler::build_http_client;
/// use std::time::Duration;
///
/// let client = build_http_client(&UserAgentConfig::default(), Duration::from_secs(5)).unwrap();
/// ```
pub fn build_http_client(
    config: &UserAgentConfig,
    timeout: Duration,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.header_value())
        .timeout(timeout)
        .connect_timeout(timeout)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Page fetcher sharing one HTTP client across the run
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fetches a URL with a single GET
    ///
    /// # Returns
    ///
    /// * `Ok(FetchedPage)` - 2xx response with a readable body
    /// * `Err(FetchError)` - Transport failure or non-2xx status
    pub async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::transport(url, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let final_url = response.url().to_string();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::transport(url, &e))?;

        Ok(FetchedPage { final_url, body })
    }
}
