// src/crawl/report.rs
// =============================================================================
// What a crawl run produced: counts, saved files and per-URL failures.
//
// #[derive(Serialize)] lets main.rs print the whole report as JSON with
// --json, the same way link results are printed elsewhere.
// =============================================================================

use serde::Serialize;
use std::path::PathBuf;

/// A PDF that was written to the output directory
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SavedFile {
    pub url: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// A page could not be fetched
    Page,
    /// A PDF could not be fetched
    Download,
    /// A PDF was fetched but could not be saved
    Write,
}

/// One URL that failed. The crawl carried on without it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CrawlFailure {
    pub url: String,
    pub kind: FailureKind,
    pub reason: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CrawlReport {
    /// Pages claimed for crawling, whatever happened to them afterwards
    pub pages_visited: usize,
    /// Pages fetched and parsed for links
    pub pages_parsed: usize,
    pub saved: Vec<SavedFile>,
    pub failures: Vec<CrawlFailure>,
}

impl CrawlReport {
    pub fn pdfs_saved(&self) -> usize {
        self.saved.len()
    }
}
