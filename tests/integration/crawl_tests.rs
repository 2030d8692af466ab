//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end over real HTTP.

use depth_crawler::config::CrawlerConfig;
use depth_crawler::crawler::{Crawler, HtmlLinkExtractor, HttpFetcher};
use depth_crawler::output::save_results;
use depth_crawler::CrawlError;
use std::collections::HashSet;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration with no politeness delay
fn create_test_config(max_depth: u32) -> CrawlerConfig {
    CrawlerConfig {
        max_depth,
        request_delay_ms: 0,
        timeout_secs: 5,
        user_agent: "TestBot/1.0".to_string(),
    }
}

fn create_crawler(max_depth: u32) -> Crawler<HttpFetcher, HtmlLinkExtractor> {
    Crawler::from_config(create_test_config(max_depth)).expect("Failed to build crawler")
}

/// Builds an HTML page whose body is one anchor per href
fn html_page(hrefs: &[&str]) -> ResponseTemplate {
    let anchors: String = hrefs
        .iter()
        .map(|href| format!(r#"<a href="{}">link</a>"#, href))
        .collect();

    ResponseTemplate::new(200)
        .set_body_string(format!(
            "<html><head><title>Test</title></head><body>{}</body></html>",
            anchors
        ))
        .insert_header("content-type", "text/html")
}

async fn mount_page(server: &MockServer, page: &str, hrefs: &[&str], expected_hits: u64) {
    Mock::given(method("GET"))
        .and(path(page))
        .respond_with(html_page(hrefs))
        .expect(expected_hits)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_crawl_single_domain() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", &["/page1", "page2"], 1).await;
    mount_page(&mock_server, "/page1", &[], 1).await;
    mount_page(&mock_server, "/page2", &[], 1).await;

    let result = create_crawler(2)
        .crawl(&base_url)
        .await
        .expect("Crawl failed");

    let discovered: Vec<String> = result.discovered.iter().map(|u| u.to_string()).collect();
    assert_eq!(
        discovered,
        vec![
            format!("{}/", base_url),
            format!("{}/page1", base_url),
            format!("{}/page2", base_url),
        ]
    );
    assert_eq!(result.pages_crawled, 3);
    assert!(result.failures.is_empty());
}

#[tokio::test]
async fn test_crawl_with_depth_limit() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    // Create a chain: / -> level1 -> level2 -> level3
    mount_page(&mock_server, "/", &["/level1"], 1).await;
    mount_page(&mock_server, "/level1", &["/level2"], 1).await;
    mount_page(&mock_server, "/level2", &["/level3"], 1).await;

    // Level3 should not be fetched with max_depth=2
    // Wiremock will automatically verify expect(0) when the mock server drops
    mount_page(&mock_server, "/level3", &["/level4"], 0).await;

    let result = create_crawler(2)
        .crawl(&base_url)
        .await
        .expect("Crawl failed");

    assert_eq!(result.pages_crawled, 3);

    // level3 is discovered on level2 but never fetched
    assert_eq!(result.total_discovered(), 4);
    assert_eq!(result.discovered[3].path(), "/level3");
}

#[tokio::test]
async fn test_depth_zero_fetches_only_seed() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", &["/a", "/b"], 1).await;
    mount_page(&mock_server, "/a", &[], 0).await;
    mount_page(&mock_server, "/b", &[], 0).await;

    let result = create_crawler(0)
        .crawl(&base_url)
        .await
        .expect("Crawl failed");

    assert_eq!(result.pages_crawled, 1);
    assert_eq!(result.total_discovered(), 3);
}

#[tokio::test]
async fn test_other_hosts_are_never_fetched() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let port = url::Url::parse(&base_url)
        .expect("Failed to parse base URL")
        .port()
        .expect("Mock server has a port");

    // Same server, different host name: out of scope
    let localhost_link = format!("http://localhost:{}/via-localhost", port);

    mount_page(
        &mock_server,
        "/",
        &["/about", "https://other.com/x", localhost_link.as_str()],
        1,
    )
    .await;
    mount_page(&mock_server, "/about", &[], 1).await;
    mount_page(&mock_server, "/via-localhost", &[], 0).await;

    let result = create_crawler(3)
        .crawl(&base_url)
        .await
        .expect("Crawl failed");

    assert_eq!(result.total_discovered(), 2);
    assert!(result.discovered.iter().all(|u| u.host() == "127.0.0.1"));
    assert_eq!(result.discovered[1].path(), "/about");
}

#[tokio::test]
async fn test_shared_link_fetched_once() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", &["/left", "/right"], 1).await;
    mount_page(&mock_server, "/left", &["/shared", "/shared#section"], 1).await;
    mount_page(&mock_server, "/right", &["/shared", "/left", "/"], 1).await;
    mount_page(&mock_server, "/shared", &["/left", "/right"], 1).await;

    let result = create_crawler(3)
        .crawl(&base_url)
        .await
        .expect("Crawl failed");

    assert_eq!(result.pages_crawled, 4);
    assert_eq!(result.total_discovered(), 4);
}

#[tokio::test]
async fn test_failed_pages_do_not_stop_the_crawl() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", &["/missing", "/broken", "/ok"], 1).await;
    mount_page(&mock_server, "/ok", &["/after"], 1).await;
    mount_page(&mock_server, "/after", &[], 1).await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = create_crawler(2)
        .crawl(&base_url)
        .await
        .expect("Crawl failed");

    assert_eq!(result.pages_crawled, 3);
    assert_eq!(result.failures.len(), 2);
    assert_eq!(result.failures[0].error, "HTTP 404");
    assert_eq!(result.failures[1].error, "HTTP 500");

    // failed targets remain discovered
    assert_eq!(result.total_discovered(), 5);
}

#[tokio::test]
async fn test_non_html_page_yields_no_links() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", &["/document.pdf"], 1).await;

    Mock::given(method("GET"))
        .and(path("/document.pdf"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(vec![0x25, 0x50, 0x44, 0x46]) // %PDF
                .insert_header("content-type", "application/pdf"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = create_crawler(3)
        .crawl(&base_url)
        .await
        .expect("Crawl failed");

    assert_eq!(result.pages_crawled, 2);
    assert_eq!(result.total_discovered(), 2);
}

#[tokio::test]
async fn test_invalid_seed_issues_no_requests() {
    let result = create_crawler(3).crawl("example.com/no-scheme").await;
    assert!(matches!(result, Err(CrawlError::InvalidSeed { .. })));
}

#[tokio::test]
async fn test_saved_file_matches_discovered_list() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", &["/a", "/b", "/a"], 1).await;
    mount_page(&mock_server, "/a", &["/c", "/b", "https://other.com/"], 1).await;
    mount_page(&mock_server, "/b", &["/c", "/d"], 1).await;
    mount_page(&mock_server, "/c", &["/e"], 1).await;
    mount_page(&mock_server, "/d", &["/e", "/f"], 1).await;
    mount_page(&mock_server, "/e", &[], 0).await;
    mount_page(&mock_server, "/f", &[], 0).await;

    let result = create_crawler(2)
        .crawl(&base_url)
        .await
        .expect("Crawl failed");

    let dir = TempDir::new().expect("Failed to create temp dir");
    let output_path = dir.path().join("urls.txt");
    let written = save_results(&result.discovered, &output_path).expect("Failed to save");

    let content = std::fs::read_to_string(&output_path).expect("Failed to read output");
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(written, result.total_discovered());
    assert_eq!(lines.len(), result.total_discovered());
    assert_eq!(lines.len(), 7);

    let unique: HashSet<&str> = lines.iter().copied().collect();
    assert_eq!(unique.len(), lines.len());
    assert_eq!(lines[0], format!("{}/", base_url));
}

#[tokio::test]
async fn test_one_shot_crawl_function() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", &["/only"], 1).await;
    mount_page(&mock_server, "/only", &["/"], 1).await;

    let result = depth_crawler::crawler::crawl(&base_url, create_test_config(1))
        .await
        .expect("Crawl failed");

    assert_eq!(result.pages_crawled, 2);
    assert_eq!(result.total_discovered(), 2);
    assert!(!result.interrupted);
}
