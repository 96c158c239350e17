// src/config.rs
// =============================================================================
// Settings for one crawl run.
//
// The CLI (src/cli.rs) fills this struct in; tests build it directly with
// CrawlConfig::new(...) and tweak the fields they care about (usually the
// delay, so tests don't sleep).
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

/// User-Agent sent with every request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Pause before descending into a new page
pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

pub const DEFAULT_MAX_DEPTH: usize = 3;

pub const DEFAULT_OUTPUT_DIR: &str = "downloaded_pdfs";

#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Where the crawl starts. Its host defines the crawl scope.
    pub seed_url: String,
    /// Directory the PDFs are written to (created if missing)
    pub output_dir: PathBuf,
    /// Link hops allowed from the seed. 0 = only the seed page.
    pub max_depth: usize,
    /// Politeness delay before each new page request
    pub delay: Duration,
    pub timeout: Duration,
    pub user_agent: String,
}

impl CrawlConfig {
    pub fn new(seed_url: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            seed_url: seed_url.into(),
            output_dir: output_dir.into(),
            max_depth: DEFAULT_MAX_DEPTH,
            delay: DEFAULT_DELAY,
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
