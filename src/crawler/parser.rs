//! HTML parser for extracting same-domain links
//!
//! Every `<a href>` is resolved against the page URL and kept only if it lands
//! on the crawl's domain. Off-domain links are dropped here and never reach the
//! frontier.

use crate::url::is_same_domain;
use scraper::{Html, Selector};
use url::Url;

/// Extracts same-domain absolute links from an HTML document
///
/// # Link Extraction Rules
///
/// - Only `<a href="...">` elements are considered
/// - Links are resolved with `Url::join`; fragments and queries are kept as is
/// - Anything that does not resolve to an `http`/`https` URL is dropped
///   (`javascript:`, `mailto:`, `tel:`, `data:`, unparsable hrefs)
/// - Links whose domain differs from `domain` are dropped
///
/// The result is in document order and may contain duplicates.
///
/// # Example
///
/// ```
/// use medcrawl::crawler::extract_links;
/// use url::Url;
///
/// let html = r#"<a href="/team">Team</a><a href="https://elsewhere.org/">Out</a>"#;
/// let base_url = Url::parse("https://clinic.example/").unwrap();
/// let links = extract_links(html, &base_url, "clinic.example");
/// assert_eq!(links, vec!["https://clinic.example/team".to_string()]);
/// ```
pub fn extract_links(html: &str, base_url: &Url, domain: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    let Ok(a_selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    document
        .select(&a_selector)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| resolve_link(href, base_url))
        .filter(|url| is_same_domain(url, domain))
        .map(String::from)
        .collect()
}

/// Resolves a link href to an absolute HTTP(S) URL
fn resolve_link(href: &str, base_url: &Url) -> Option<Url> {
    let absolute_url = base_url.join(href.trim()).ok()?;

    if absolute_url.scheme() == "http" || absolute_url.scheme() == "https" {
        Some(absolute_url)
    } else {
        None
    }
}
