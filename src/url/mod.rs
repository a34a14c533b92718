//! URL handling module for Medcrawl
//!
//! This module provides seed parsing and the domain computation used for
//! same-domain filtering. URLs are never normalized beyond what parsing and
//! joining already do, so `/a` and `/a#top` remain distinct crawl targets.

mod domain;

use crate::{UrlError, UrlResult};
use url::Url;

pub use domain::{domain_of, is_same_domain};

/// Parses an absolute HTTP(S) URL that has a host
///
/// Surrounding whitespace is ignored, which matters for seeds typed at the
/// interactive prompt.
///
/// # Examples
///
/// ```
/// use medcrawl::url::parse_http_url;
///
/// let url = parse_http_url("  https://clinic.example/doctors ").unwrap();
/// assert_eq!(url.as_str(), "https://clinic.example/doctors");
///
/// assert!(parse_http_url("ftp://clinic.example/").is_err());
/// assert!(parse_http_url("clinic.example").is_err());
/// ```
pub fn parse_http_url(input: &str) -> UrlResult<Url> {
    let trimmed = input.trim();
    let url = Url::parse(trimmed).map_err(|e| UrlError::Parse {
        url: trimmed.to_string(),
        reason: e.to_string(),
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(UrlError::MissingDomain(trimmed.to_string()));
    }

    Ok(url)
}
