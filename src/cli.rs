// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API: the CLI is a plain struct and clap generates the
// parsing, --help and --version from the attributes.
//
// Usage:
//   pdf-harvester https://example.com --output-dir pdfs --max-depth 2
// =============================================================================

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use pdf_harvester::config::{self, CrawlConfig};

#[derive(Parser, Debug)]
#[command(
    name = "pdf-harvester",
    version,
    about = "Crawl a website and download every PDF it links to",
    long_about = "pdf-harvester walks a website depth-first from a seed URL, staying on the \
                  seed's host, and saves every linked PDF (from any host) into an output \
                  directory. Files with the same name are numbered instead of overwritten."
)]
pub struct Cli {
    /// Seed URL to start crawling from (e.g., https://example.com)
    ///
    /// Only pages on this URL's host are crawled
    pub seed_url: String,

    /// Directory to save PDFs into (created if missing)
    #[arg(short, long, default_value = config::DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Maximum crawl depth
    ///
    /// Depth 0 = just the seed page (its PDF links are still downloaded)
    /// Depth 1 = seed page + the pages it links to
    /// etc.
    #[arg(short = 'd', long, default_value_t = config::DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Pause before each new page request, in milliseconds
    #[arg(long, default_value_t = 500)]
    pub delay_ms: u64,

    /// Per-request timeout, in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[arg(long, default_value = config::DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Print the run report as JSON instead of a summary
    #[arg(long)]
    pub json: bool,

    /// Log every skipped link and parsed page (overridden by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn crawl_config(&self) -> CrawlConfig {
        let mut config = CrawlConfig::new(self.seed_url.clone(), self.output_dir.clone());
        config.max_depth = self.max_depth;
        config.delay = Duration::from_millis(self.delay_ms);
        config.timeout = Duration::from_secs(self.timeout_secs);
        config.user_agent = self.user_agent.clone();
        config
    }
}
