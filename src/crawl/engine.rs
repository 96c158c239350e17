// src/crawl/engine.rs
// =============================================================================
// This module implements the crawl itself: depth-first, one request at a
// time, starting from the seed URL.
//
// How it works:
// 1. Claim the page in the visited set, then fetch it
// 2. If the server says it's a PDF, save it and stop there
// 3. Otherwise extract its links and walk them in document order:
//    - links that look like PDFs are downloaded (from any host)
//    - same-host pages not seen yet are crawled one level deeper, after
//      a short politeness delay
// 4. A child page is explored completely before the parent's next link
//
// Instead of recursion we keep an explicit stack of "frames" (a page plus
// the links we haven't looked at yet). Walking the top frame and pushing a
// child gives exactly the order recursion would, without growing the call
// stack.
//
// Failure isolation:
// - A page or PDF that fails is logged, written into the report, and
//   the loop moves on to the next link
// - Nothing is retried: set membership is never rolled back
// =============================================================================

use std::collections::HashSet;
use tracing::{debug, info, warn};
use url::Url;

use super::pdf::looks_like_pdf;
use super::report::{CrawlFailure, CrawlReport, FailureKind, SavedFile};
use super::scope::{is_in_scope, network_location, resolve_link};
use crate::config::CrawlConfig;
use crate::error::{DownloadError, SetupError};
use crate::fetch::{extract_link_targets, Fetcher, Response};
use crate::storage::OutputDir;

/// A page waiting to be crawled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlTarget {
    pub url: Url,
    pub depth: usize, // Link hops from the seed
}

// Why a page was not fetched (logged only)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SkipReason {
    TooDeep,
    AlreadyVisited,
    OutOfScope,
}

// Where a single page ended up
enum Visit {
    Skipped,
    Errored,
    Downloaded,
    Parsed(Frame),
}

// A parsed page and the links on it still to be walked
struct Frame {
    page: Url,
    depth: usize,
    links: std::vec::IntoIter<String>,
}

/// Owns all the state of one crawl run.
///
/// Nothing here is global: two crawlers never share their visited or
/// downloaded sets.
pub struct Crawler<F> {
    fetcher: F,
    output: OutputDir,
    config: CrawlConfig,
    seed: Url,
    /// Host (and port) of the seed; the crawl never leaves it for pages
    base_domain: String,
    visited: HashSet<String>,
    downloaded: HashSet<String>,
    report: CrawlReport,
}

impl<F: Fetcher> Crawler<F> {
    /// Checks the seed URL and sets up empty visited/downloaded sets.
    pub fn new(config: CrawlConfig, fetcher: F, output: OutputDir) -> Result<Self, SetupError> {
        let mut seed = Url::parse(&config.seed_url).map_err(|e| SetupError::InvalidSeed {
            url: config.seed_url.clone(),
            reason: e.to_string(),
        })?;
        seed.set_fragment(None);

        let base_domain = network_location(&seed);
        if base_domain.is_empty() {
            return Err(SetupError::InvalidSeed {
                url: config.seed_url.clone(),
                reason: "URL has no host".to_string(),
            });
        }

        Ok(Self {
            fetcher,
            output,
            config,
            seed,
            base_domain,
            visited: HashSet::new(),
            downloaded: HashSet::new(),
            report: CrawlReport::default(),
        })
    }

    /// Crawls from the seed until every reachable in-scope page within
    /// `max_depth` has been visited, then hands back the report.
    pub async fn run(mut self) -> CrawlReport {
        info!(
            seed = %self.seed,
            output_dir = %self.output.path().display(),
            max_depth = self.config.max_depth,
            "Starting PDF crawl"
        );

        let seed = CrawlTarget {
            url: self.seed.clone(),
            depth: 0,
        };
        self.crawl(seed).await;

        info!(
            pages = self.report.pages_visited,
            pdfs = self.report.pdfs_saved(),
            failures = self.report.failures.len(),
            "Crawl complete"
        );
        self.report
    }

    /// Crawls `start` and everything reachable from it.
    ///
    /// Calling this again for a URL that was already visited does nothing.
    pub async fn crawl(&mut self, start: CrawlTarget) {
        let mut stack: Vec<Frame> = Vec::new();
        if let Visit::Parsed(frame) = self.visit(start).await {
            stack.push(frame);
        }

        while let Some(frame) = stack.last_mut() {
            let Some(href) = frame.links.next() else {
                // Every link on this page is done, go back to its parent
                stack.pop();
                continue;
            };
            let depth = frame.depth;
            let Some(target) = resolve_link(&frame.page, &href) else {
                continue;
            };

            if looks_like_pdf(&href) {
                // PDFs are grabbed from any host
                self.download(&target).await;
                continue;
            }

            if !is_in_scope(&target, &self.base_domain) || self.is_visited(&target) {
                continue;
            }

            let child = CrawlTarget {
                url: target,
                depth: depth + 1,
            };
            // A child past max_depth is dropped without a request, so
            // there's nothing to be polite about
            if child.depth <= self.config.max_depth && !self.config.delay.is_zero() {
                tokio::time::sleep(self.config.delay).await;
            }
            if let Visit::Parsed(frame) = self.visit(child).await {
                stack.push(frame);
            }
        }
    }

    /// Downloads one PDF unless it was already downloaded (or attempted)
    /// during this run.
    pub async fn download(&mut self, url: &Url) {
        if !self.downloaded.insert(url.as_str().to_string()) {
            debug!(url = %url, "PDF already downloaded, skipping");
            return;
        }

        info!(url = %url, "Downloading");
        match self.fetch_and_save(url).await {
            Ok(saved) => self.record_saved(saved),
            Err(DownloadError::Fetch(e)) => {
                self.record_failure(url, FailureKind::Download, e.to_string())
            }
            Err(DownloadError::Write(e)) => {
                self.record_failure(url, FailureKind::Write, e.to_string())
            }
        }
    }

    pub fn is_visited(&self, url: &Url) -> bool {
        self.visited.contains(url.as_str())
    }

    pub fn is_downloaded(&self, url: &Url) -> bool {
        self.downloaded.contains(url.as_str())
    }

    pub fn report(&self) -> &CrawlReport {
        &self.report
    }

    // One page through the state machine: guards, claim, fetch, classify.
    async fn visit(&mut self, target: CrawlTarget) -> Visit {
        let CrawlTarget { url, depth } = target;

        // Cheapest check first
        let skip = if depth > self.config.max_depth {
            Some(SkipReason::TooDeep)
        } else if self.is_visited(&url) {
            Some(SkipReason::AlreadyVisited)
        } else if !is_in_scope(&url, &self.base_domain) {
            Some(SkipReason::OutOfScope)
        } else {
            None
        };
        if let Some(reason) = skip {
            debug!(url = %url, depth, ?reason, "Skipping page");
            return Visit::Skipped;
        }

        // Claimed before any network I/O
        self.visited.insert(url.as_str().to_string());
        self.report.pages_visited += 1;
        info!(url = %url, depth, "Crawling");

        let response = match self.fetcher.fetch(&url).await {
            Ok(response) => response,
            Err(e) => {
                self.record_failure(&url, FailureKind::Page, e.to_string());
                return Visit::Errored;
            }
        };

        if response.is_pdf() {
            // The page itself is a PDF: keep the body we already have
            // instead of requesting it a second time
            self.save_fetched_pdf(&url, &response).await;
            return Visit::Downloaded;
        }

        let links = extract_link_targets(&response.body);
        debug!(url = %url, links = links.len(), "Parsed page");
        self.report.pages_parsed += 1;

        Visit::Parsed(Frame {
            page: url,
            depth,
            links: links.into_iter(),
        })
    }

    async fn save_fetched_pdf(&mut self, url: &Url, response: &Response) {
        if !self.downloaded.insert(url.as_str().to_string()) {
            debug!(url = %url, "PDF already downloaded, skipping");
            return;
        }

        match self.output.save(url, &response.body).await {
            Ok(path) => self.record_saved(SavedFile {
                url: url.to_string(),
                path,
            }),
            Err(e) => self.record_failure(url, FailureKind::Write, e.to_string()),
        }
    }

    async fn fetch_and_save(&self, url: &Url) -> Result<SavedFile, DownloadError> {
        let response = self.fetcher.fetch(url).await?;
        if !response.is_pdf() {
            debug!(
                url = %url,
                content_type = response.content_type.as_deref().unwrap_or("none"),
                "Saving link that looked like a PDF"
            );
        }

        let path = self.output.save(url, &response.body).await?;
        Ok(SavedFile {
            url: url.to_string(),
            path,
        })
    }

    fn record_saved(&mut self, saved: SavedFile) {
        info!(url = %saved.url, path = %saved.path.display(), "Saved");
        self.report.saved.push(saved);
    }

    fn record_failure(&mut self, url: &Url, kind: FailureKind, reason: String) {
        warn!(url = %url, ?kind, %reason, "Failed");
        self.report.failures.push(CrawlFailure {
            url: url.to_string(),
            kind,
            reason,
        });
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is Crawler generic over F?
//    - F is "any type that implements Fetcher"
//    - The CLI passes HttpFetcher, the tests pass an in-memory FakeWeb
//    - The compiler generates a version of Crawler for each, no runtime cost
//
// 2. What is let-else?
//    - let Some(href) = frame.links.next() else { ... };
//    - Binds href when the pattern matches, otherwise runs the else block
//    - The else block must leave the current flow (continue, return, ...)
//
// 3. Why does HashSet::insert come before the fetch?
//    - insert() returns false if the value was already there
//    - Marking a URL first means a second link to it, found while it is
//      still being processed, sees it as taken
// -----------------------------------------------------------------------------
