// src/lib.rs
// =============================================================================
// pdf-harvester: crawl one website and download every PDF it links to.
//
// Modules:
// - config: settings for a run
// - fetch: HTTP fetching and link extraction
// - crawl: the depth-first crawler
// - storage: the output directory and file naming
// - error: error kinds
//
// The binary (src/main.rs) wires these together behind a CLI.
// =============================================================================

pub mod config;
pub mod crawl;
pub mod error;
pub mod fetch;
pub mod storage;

pub use config::CrawlConfig;
pub use crawl::{CrawlReport, Crawler};
pub use fetch::{Fetcher, HttpFetcher};
pub use storage::OutputDir;
