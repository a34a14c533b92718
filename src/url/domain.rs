use url::Url;

/// Computes the crawl domain of a URL
///
/// The domain is the lower-cased host plus the port when the URL names a
/// non-default one, so `http://127.0.0.1:8080/` and `http://127.0.0.1:9090/`
/// are different sites while `https://example.com:443/` and
/// `https://example.com/` are the same.
///
/// # Returns
///
/// * `Some(String)` - The domain
/// * `None` - If the URL has no host
///
/// # Examples
///
/// ```
/// use url::Url;
/// use medcrawl::url::domain_of;
///
/// let url = Url::parse("https://EXAMPLE.COM/path").unwrap();
/// assert_eq!(domain_of(&url), Some("example.com".to_string()));
///
/// let url = Url::parse("http://127.0.0.1:8080/").unwrap();
/// assert_eq!(domain_of(&url), Some("127.0.0.1:8080".to_string()));
/// ```
pub fn domain_of(url: &Url) -> Option<String> {
    let host = url.host_str().filter(|h| !h.is_empty())?.to_lowercase();
    match url.port() {
        Some(port) => Some(format!("{}:{}", host, port)),
        None => Some(host),
    }
}

/// Returns true if `url` belongs to `domain`
pub fn is_same_domain(url: &Url, domain: &str) -> bool {
    domain_of(url).as_deref() == Some(domain)
}
