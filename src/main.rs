// src/main.rs
// =============================================================================
// This is the entry point of the pdf-harvester CLI.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (tracing, to stderr)
// 3. Create the output directory and the HTTP fetcher
// 4. Run the crawl and print a summary (or JSON)
// 5. Exit with proper code (0 = crawl finished, 2 = could not start)
//
// Pages or PDFs that fail during the crawl are reported but do not change
// the exit code: a crawl that ran to the end is a success.
// =============================================================================

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

use pdf_harvester::{CrawlReport, Crawler, HttpFetcher, OutputDir};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run(cli: Cli) -> Result<()> {
    let config = cli.crawl_config();

    let output = OutputDir::create(&config.output_dir)
        .await
        .context("setting up the output directory")?;
    let fetcher = HttpFetcher::new(config.timeout, &config.user_agent)
        .context("setting up the HTTP client")?;
    let crawler = Crawler::new(config, fetcher, output.clone())?;

    let report = crawler.run().await;

    if cli.json {
        let json_output = serde_json::to_string_pretty(&report)?;
        println!("{}", json_output);
    } else {
        print_summary(&report, &output);
    }
    Ok(())
}

// RUST_LOG wins when set; otherwise --verbose picks debug over info.
fn init_logging(verbose: bool) {
    let default_level = if verbose {
        "pdf_harvester=debug,warn"
    } else {
        "pdf_harvester=info,warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_summary(report: &CrawlReport, output: &OutputDir) {
    let output_path = std::fs::canonicalize(output.path())
        .unwrap_or_else(|_| output.path().to_path_buf());

    println!("{}", "=".repeat(60));
    println!("Crawling complete!");
    println!("Total pages visited: {}", report.pages_visited);
    println!("Total PDFs downloaded: {}", report.pdfs_saved());
    if !report.failures.is_empty() {
        println!("Failed URLs: {}", report.failures.len());
        for failure in &report.failures {
            println!("   {} ({})", failure.url, failure.reason);
        }
    }
    println!("Files saved in: {}", output_path.display());
    println!("{}", "=".repeat(60));
}
