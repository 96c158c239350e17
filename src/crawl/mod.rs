// src/crawl/mod.rs
// =============================================================================
// This module handles the website crawl.
//
// Features:
// - Depth-first crawling starting from a seed URL
// - Same-domain restriction for pages (PDFs are fetched from anywhere)
// - Configurable depth limit
// - Polite crawling with a delay before each new page
// - Deduplication of visited pages and downloaded PDFs
//
// Submodules:
// - engine: the Crawler and its traversal loop
// - scope: link resolution and the same-host rule
// - pdf: "is this a PDF?" checks
// - report: what a run produced
// =============================================================================

mod engine;
mod pdf;
mod report;
mod scope;

pub use engine::{CrawlTarget, Crawler};
pub use pdf::{is_pdf_content_type, looks_like_pdf};
pub use report::{CrawlFailure, CrawlReport, FailureKind, SavedFile};
pub use scope::{is_in_scope, network_location, resolve_link};
