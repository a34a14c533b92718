//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end.

use medcrawl::config::{Config, CrawlerConfig};
use medcrawl::crawler::Crawler;
use medcrawl::ScrapeError;
use std::time::{Duration, Instant};
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration with no politeness delay
fn create_test_config(max_pages: usize) -> Config {
    Config {
        crawler: CrawlerConfig {
            max_pages,
            request_delay: 0.0,
            fetch_timeout: 5,
        },
        ..Config::default()
    }
}

fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(format!("<html><body>{}</body></html>", body))
        .insert_header("content-type", "text/html")
}

async fn mount_page(server: &MockServer, page: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(page))
        .respond_with(html(body))
        .mount(server)
        .await;
}

async fn mount_robots(server: &MockServer, content: &str) {
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string(content))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_crawl_single_domain() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_robots(&mock_server, "User-agent: *\nAllow: /").await;
    mount_page(
        &mock_server,
        "/",
        r#"<a href="/a">A</a><a href="/b">B</a><a href="https://other.example/x">Out</a>"#,
    )
    .await;
    mount_page(&mock_server, "/a", r#"<a href="/c">C</a><a href="/">Home</a>"#).await;
    mount_page(&mock_server, "/b", "No links here").await;
    mount_page(&mock_server, "/c", r#"<a href="/a">A</a>"#).await;

    let mut crawler = Crawler::new(&create_test_config(50)).expect("Failed to create crawler");
    let report = crawler
        .crawl(&format!("{}/", base_url))
        .await
        .expect("Crawl failed");

    assert_eq!(
        report.pages,
        vec![
            format!("{}/", base_url),
            format!("{}/a", base_url),
            format!("{}/b", base_url),
            format!("{}/c", base_url),
        ]
    );
    assert_eq!(report.stats.fetch_failures, 0);
    assert_eq!(report.stats.frontier_remaining, 0);
    assert!(report.pages.iter().all(|p| p.starts_with(&base_url)));
}

#[tokio::test]
async fn test_off_domain_links_never_fetched() {
    let mock_server = MockServer::start().await;
    let other_server = MockServer::start().await;
    let base_url = mock_server.uri();

    // Different port, so a different domain
    Mock::given(any())
        .respond_with(html("Should not be reached"))
        .expect(0)
        .mount(&other_server)
        .await;

    mount_page(
        &mock_server,
        "/",
        &format!(
            r#"<a href="{}/doctors">Partner</a><a href="/local">Local</a>"#,
            other_server.uri()
        ),
    )
    .await;
    mount_page(&mock_server, "/local", "Local page").await;

    let mut crawler = Crawler::new(&create_test_config(50)).expect("Failed to create crawler");
    let report = crawler
        .crawl(&format!("{}/", base_url))
        .await
        .expect("Crawl failed");

    assert_eq!(report.pages.len(), 2);
    assert_eq!(report.stats.links_queued, 1);
    assert!(report.pages.iter().all(|p| !p.starts_with(&other_server.uri())));
}

#[tokio::test]
async fn test_crawl_respects_robots_txt() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_robots(&mock_server, "User-agent: *\nDisallow: /admin").await;
    mount_page(
        &mock_server,
        "/",
        r#"<a href="/allowed">Allowed Page</a><a href="/admin">Admin Page</a>"#,
    )
    .await;
    mount_page(&mock_server, "/allowed", r#"<a href="/admin">Admin again</a>"#).await;

    // Admin page should never be called
    Mock::given(method("GET"))
        .and(path("/admin"))
        .respond_with(html("Admin content"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut crawler = Crawler::new(&create_test_config(50)).expect("Failed to create crawler");
    let report = crawler
        .crawl(&format!("{}/", base_url))
        .await
        .expect("Crawl failed");

    assert_eq!(
        report.pages,
        vec![format!("{}/", base_url), format!("{}/allowed", base_url)]
    );
    // Rediscovered disallowed URL is checked again
    assert_eq!(report.stats.disallowed, 2);
}

#[tokio::test]
async fn test_seed_disallowed_fetches_nothing() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_robots(&mock_server, "User-agent: *\nDisallow: /").await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html("Home"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut crawler = Crawler::new(&create_test_config(50)).expect("Failed to create crawler");
    let result = crawler.crawl(&format!("{}/", base_url)).await;

    match result {
        Err(ScrapeError::SeedDisallowed { url }) => assert_eq!(url, format!("{}/", base_url)),
        other => panic!("Expected SeedDisallowed, got {:?}", other),
    }
}

#[tokio::test]
async fn test_missing_robots_txt_fails_open() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    // No robots.txt mock: wiremock answers 404
    mount_page(&mock_server, "/", r#"<a href="/private">Private</a>"#).await;
    mount_page(&mock_server, "/private", "Private page").await;

    let mut crawler = Crawler::new(&create_test_config(50)).expect("Failed to create crawler");
    let report = crawler
        .crawl(&format!("{}/", base_url))
        .await
        .expect("Crawl failed");

    assert_eq!(report.pages.len(), 2);
    assert_eq!(report.stats.disallowed, 0);
}

#[tokio::test]
async fn test_robots_server_error_fails_open() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;
    mount_page(&mock_server, "/", "Home").await;

    let mut crawler = Crawler::new(&create_test_config(50)).expect("Failed to create crawler");
    let report = crawler
        .crawl(&format!("{}/", base_url))
        .await
        .expect("Crawl failed");

    assert_eq!(report.pages, vec![format!("{}/", base_url)]);
}

#[tokio::test]
async fn test_robots_fetched_once_per_origin() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("User-agent: *\nAllow: /"))
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_page(&mock_server, "/", r#"<a href="/a">A</a><a href="/b">B</a>"#).await;
    mount_page(&mock_server, "/a", "A").await;
    mount_page(&mock_server, "/b", "B").await;

    let mut crawler = Crawler::new(&create_test_config(50)).expect("Failed to create crawler");
    let report = crawler
        .crawl(&format!("{}/", base_url))
        .await
        .expect("Crawl failed");

    assert_eq!(report.pages.len(), 3);
}

#[tokio::test]
async fn test_max_pages_bounds_output_not_frontier() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<a href="/p1">1</a><a href="/p2">2</a><a href="/p3">3</a><a href="/p4">4</a><a href="/p5">5</a>"#,
    )
    .await;
    mount_page(&mock_server, "/p1", "One").await;
    mount_page(&mock_server, "/p2", "Two").await;

    for page in ["/p3", "/p4", "/p5"] {
        Mock::given(method("GET"))
            .and(path(page))
            .respond_with(html("Beyond the limit"))
            .expect(0)
            .mount(&mock_server)
            .await;
    }

    let mut crawler = Crawler::new(&create_test_config(3)).expect("Failed to create crawler");
    let report = crawler
        .crawl(&format!("{}/", base_url))
        .await
        .expect("Crawl failed");

    assert_eq!(
        report.pages,
        vec![
            format!("{}/", base_url),
            format!("{}/p1", base_url),
            format!("{}/p2", base_url),
        ]
    );
    assert_eq!(report.stats.frontier_remaining, 3);
}

#[tokio::test]
async fn test_failed_fetch_skipped_and_contributes_no_links() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<a href="/broken">Broken</a><a href="/missing">Missing</a><a href="/ok">OK</a>"#,
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(
            ResponseTemplate::new(500).set_body_string(r#"<a href="/hidden">Hidden</a>"#),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/hidden"))
        .respond_with(html("Hidden"))
        .expect(0)
        .mount(&mock_server)
        .await;

    mount_page(&mock_server, "/ok", r#"<a href="/broken">Broken again</a>"#).await;

    let mut crawler = Crawler::new(&create_test_config(50)).expect("Failed to create crawler");
    let report = crawler
        .crawl(&format!("{}/", base_url))
        .await
        .expect("Crawl failed");

    assert_eq!(
        report.pages,
        vec![format!("{}/", base_url), format!("{}/ok", base_url)]
    );
    // /broken (500) and /missing (404); /broken is visited, so never re-queued
    assert_eq!(report.stats.fetch_failures, 2);
    assert_eq!(report.stats.duplicates_skipped, 0);
}

#[tokio::test]
async fn test_each_url_fetched_once() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<a href="/a">A</a><a href="/a">A again</a><a href="/">Self</a>"#,
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/a"))
        .respond_with(html(r#"<a href="/">Home</a><a href="/a">Self</a>"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut crawler = Crawler::new(&create_test_config(50)).expect("Failed to create crawler");
    let report = crawler
        .crawl(&format!("{}/", base_url))
        .await
        .expect("Crawl failed");

    assert_eq!(report.pages.len(), 2);
    // The second /a queued from the seed page is dropped at dequeue time
    assert_eq!(report.stats.duplicates_skipped, 1);

    let mut unique = report.pages.clone();
    unique.dedup();
    assert_eq!(unique, report.pages);
}

#[tokio::test]
async fn test_fragment_links_are_distinct_pages() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", r##"<a href="#team">Team</a>"##).await;

    let mut crawler = Crawler::new(&create_test_config(50)).expect("Failed to create crawler");
    let report = crawler
        .crawl(&format!("{}/", base_url))
        .await
        .expect("Crawl failed");

    assert_eq!(
        report.pages,
        vec![format!("{}/", base_url), format!("{}/#team", base_url)]
    );
}

#[tokio::test]
async fn test_delay_follows_successful_fetches_only() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_robots(&mock_server, "User-agent: *\nDisallow: /admin").await;
    mount_page(
        &mock_server,
        "/",
        r#"<a href="/a">A</a><a href="/admin">Admin</a><a href="/a">A again</a><a href="/missing">Missing</a>"#,
    )
    .await;
    mount_page(&mock_server, "/a", "A").await;

    let delay = Duration::from_millis(400);
    let mut config = create_test_config(50);
    config.crawler.request_delay = delay.as_secs_f64();

    let mut crawler = Crawler::new(&config).expect("Failed to create crawler");
    let start = Instant::now();
    let report = crawler
        .crawl(&format!("{}/", base_url))
        .await
        .expect("Crawl failed");
    let elapsed = start.elapsed();

    assert_eq!(
        report.pages,
        vec![format!("{}/", base_url), format!("{}/a", base_url)]
    );
    assert_eq!(report.stats.disallowed, 1);
    assert_eq!(report.stats.duplicates_skipped, 1);
    assert_eq!(report.stats.fetch_failures, 1);

    // One delay per successful fetch; skips and failures add none
    assert!(elapsed >= delay * 2, "elapsed {:?}", elapsed);
    assert!(elapsed < delay * 3, "elapsed {:?}", elapsed);
}
