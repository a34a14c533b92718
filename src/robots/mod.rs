//! Robots.txt handling module
//!
//! This module decides whether a URL may be fetched. The check fails open:
//! a robots.txt that is missing, unreachable, answers with a non-2xx status,
//! or cannot be read is treated as "allow everything". A site without a
//! readable policy is therefore crawled, never blocked.

mod parser;

pub use parser::ParsedRobots;

use reqwest::Client;
use std::collections::HashMap;
use thiserror::Error;
use url::Url;

/// User agent token evaluated against robots.txt groups
pub const ROBOTS_AGENT: &str = "*";

/// Why a robots.txt could not be used
#[derive(Debug, Error)]
pub enum PolicyUnreadable {
    #[error("no robots.txt location for {0}")]
    NoLocation(String),

    #[error("robots.txt request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("robots.txt returned HTTP {0}")]
    Status(u16),
}

/// Derives the robots.txt location for a URL's origin
///
/// ```
/// use url::Url;
/// use medcrawl::robots::robots_url;
///
/// let url = Url::parse("https://example.com:8443/a/b?q=1#x").unwrap();
/// assert_eq!(robots_url(&url).unwrap().as_str(), "https://example.com:8443/robots.txt");
/// ```
pub fn robots_url(url: &Url) -> Option<Url> {
    if url.cannot_be_a_base() || url.host_str().is_none() {
        return None;
    }
    url.join("/robots.txt").ok()
}

/// Fetches and parses robots.txt for the origin of `url`
///
/// # Returns
///
/// * `Ok(ParsedRobots)` - The policy published by the site
/// * `Err(PolicyUnreadable)` - No usable policy; callers resolve this to allow-all
pub async fn fetch_robots(client: &Client, url: &Url) -> Result<ParsedRobots, PolicyUnreadable> {
    let location =
        robots_url(url).ok_or_else(|| PolicyUnreadable::NoLocation(url.to_string()))?;

    let response = client.get(location).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(PolicyUnreadable::Status(status.as_u16()));
    }

    let body = response.text().await?;
    Ok(ParsedRobots::from_content(&body))
}

/// Permission checker backed by each origin's robots.txt
///
/// Policies are fetched once per origin and kept for the lifetime of the
/// checker. Decisions are not cached: every call evaluates the URL against
/// the stored policy, so a URL rejected once is rejected again when it is
/// rediscovered.
pub struct RobotsChecker {
    client: Client,
    policies: HashMap<String, ParsedRobots>,
}

impl RobotsChecker {
    /// Creates a checker that fetches policies with `client`
    pub fn new(client: Client) -> Self {
        Self {
            client,
            policies: HashMap::new(),
        }
    }

    /// Returns whether the generic agent may fetch `url`
    ///
    /// Never fails: an unparsable URL or an unreadable policy yields `true`.
    pub async fn allowed(&mut self, url: &str) -> bool {
        let parsed = match Url::parse(url) {
            Ok(u) => u,
            Err(e) => {
                tracing::debug!("Cannot derive robots.txt for {}: {}", url, e);
                return true;
            }
        };

        let policy = self.policy_for(&parsed).await;
        policy.is_allowed(parsed.as_str(), ROBOTS_AGENT)
    }

    /// Number of origins whose policy has been resolved
    pub fn cached_origins(&self) -> usize {
        self.policies.len()
    }

    async fn policy_for(&mut self, url: &Url) -> &ParsedRobots {
        let origin = url.origin().ascii_serialization();

        if !self.policies.contains_key(&origin) {
            tracing::debug!("Fetching robots.txt for origin: {}", origin);
            let policy = match fetch_robots(&self.client, url).await {
                Ok(policy) => policy,
                Err(e) => {
                    tracing::debug!("{} for {}; allowing all", e, origin);
                    ParsedRobots::allow_all()
                }
            };
            self.policies.insert(origin.clone(), policy);
        }

        &self.policies[&origin]
    }
}
