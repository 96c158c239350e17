//! End-to-end crawl tests against a local wiremock server.
//!
//! These drive the real HttpFetcher, so status handling, timeouts and the
//! User-Agent header are exercised over actual HTTP.

use pdf_harvester::config::DEFAULT_USER_AGENT;
use pdf_harvester::crawl::FailureKind;
use pdf_harvester::error::FetchError;
use pdf_harvester::{CrawlConfig, Crawler, Fetcher, HttpFetcher, OutputDir};
use std::path::Path;
use std::time::Duration;
use url::Url;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_raw(body.as_bytes().to_vec(), "text/html; charset=utf-8")
}

fn pdf(body: &[u8]) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_raw(body.to_vec(), "application/pdf")
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();
    names
}

fn http_fetcher(timeout: Duration) -> HttpFetcher {
    HttpFetcher::new(timeout, DEFAULT_USER_AGENT).unwrap()
}

async fn crawler_for(server: &MockServer, dir: &Path, max_depth: usize) -> Crawler<HttpFetcher> {
    let mut config = CrawlConfig::new(format!("{}/", server.uri()), dir);
    config.max_depth = max_depth;
    config.delay = Duration::ZERO;
    config.timeout = Duration::from_secs(5);

    let fetcher = http_fetcher(config.timeout);
    let output = OutputDir::create(dir).await.unwrap();
    Crawler::new(config, fetcher, output).unwrap()
}

/// Seed links to an in-scope page and a PDF; the page links back to the seed
#[tokio::test]
async fn test_crawl_site_end_to_end() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(
            r#"<a href="page2.html">Next</a>
               <a href="doc.pdf">Doc</a>
               <a href="https://elsewhere.invalid/page.html">Away</a>"#,
        ))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/page2.html"))
        .respond_with(html(
            r#"<a href="/">Home</a>
               <a href="missing.html">Broken</a>
               <a href="files/report.pdf?v=2">Report</a>"#,
        ))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/doc.pdf"))
        .respond_with(pdf(b"%PDF-1.4 doc"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/files/report.pdf"))
        .respond_with(pdf(b"%PDF-1.4 report"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/missing.html"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let report = crawler_for(&server, dir.path(), 3).await.run().await;

    assert_eq!(file_names(dir.path()), vec!["doc.pdf", "report.pdf"]);
    assert_eq!(
        std::fs::read(dir.path().join("doc.pdf")).unwrap(),
        b"%PDF-1.4 doc"
    );
    assert_eq!(report.pages_visited, 3);
    assert_eq!(report.pages_parsed, 2);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].kind, FailureKind::Page);
    assert!(report.failures[0].url.ends_with("/missing.html"));
}

/// With max_depth = 0 only the seed page is requested
#[tokio::test]
async fn test_depth_zero_fetches_only_seed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(r#"<a href="page2.html">Next</a>"#))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/page2.html"))
        .respond_with(html(""))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let report = crawler_for(&server, dir.path(), 0).await.run().await;

    assert_eq!(report.pages_visited, 1);
    assert!(file_names(dir.path()).is_empty());
}

/// A seed that is itself a PDF is saved, not parsed
#[tokio::test]
async fn test_seed_served_as_pdf() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(pdf(b"%PDF-seed"))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let report = crawler_for(&server, dir.path(), 3).await.run().await;

    assert_eq!(report.pdfs_saved(), 1);
    assert_eq!(report.pages_parsed, 0);
    assert_eq!(file_names(dir.path()), vec![".pdf"]);
}

/// Every request carries the fixed User-Agent
#[tokio::test]
async fn test_fetcher_sends_user_agent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ua"))
        .and(header("user-agent", DEFAULT_USER_AGENT))
        .respond_with(html("ok"))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = http_fetcher(Duration::from_secs(5));
    let url = Url::parse(&format!("{}/ua", server.uri())).unwrap();
    let response = fetcher.fetch(&url).await.unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.body, b"ok");
    assert!(!response.is_pdf());
}

/// Non-2xx statuses come back as FetchError::Status
#[tokio::test]
async fn test_fetcher_reports_http_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let fetcher = http_fetcher(Duration::from_secs(5));
    let url = Url::parse(&format!("{}/broken", server.uri())).unwrap();

    let error = fetcher.fetch(&url).await.unwrap_err();
    assert_eq!(error, FetchError::Status(500));
}

/// Slow responses hit the timeout instead of hanging the crawl
#[tokio::test]
async fn test_fetcher_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(html("late").set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    let fetcher = http_fetcher(Duration::from_millis(200));
    let url = Url::parse(&format!("{}/slow", server.uri())).unwrap();

    let error = fetcher.fetch(&url).await.unwrap_err();
    assert_eq!(error, FetchError::Timeout);
}
