//! Medcrawl main entry point
//!
//! This is the command-line interface for the Medcrawl doctor scraper.

use anyhow::Context;
use clap::Parser;
use medcrawl::config::{load_config_with_hash, validate, Config};
use medcrawl::crawler::CrawlTarget;
use medcrawl::output::print_statistics;
use medcrawl::{scrape_site, ScrapeOutcome};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Exit status used when the run is interrupted with Ctrl-C
const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Medcrawl: a polite doctor-listing scraper
///
/// Medcrawl crawls one website breadth-first, staying on the seed's domain and
/// respecting robots.txt, then extracts doctor names, qualifications,
/// specializations and emails into a CSV file.
#[derive(Parser, Debug)]
#[command(name = "medcrawl")]
#[command(version)]
#[command(about = "A polite doctor-listing scraper", long_about = None)]
struct Cli {
    /// Seed URL to start crawling from (prompted for when omitted)
    #[arg(value_name = "URL")]
    seed: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// CSV output path
    #[arg(short, long, value_name = "FILE")]
    output: Option<String>,

    /// Maximum number of pages to visit
    #[arg(long, value_name = "N")]
    max_pages: Option<usize>,

    /// Delay between successful requests, in seconds
    #[arg(long, value_name = "SECS")]
    delay: Option<f64>,

    /// Per-request timeout, in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Show the effective configuration and target without crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = build_config(&cli)?;

    let seed = match &cli.seed {
        Some(seed) => seed.clone(),
        None => prompt_seed().context("Failed to read seed URL")?,
    };

    if cli.dry_run {
        return handle_dry_run(&config, &seed);
    }

    tokio::select! {
        result = handle_scrape(&config, &seed) => result,
        _ = tokio::signal::ctrl_c() => {
            tracing::warn!("Interrupted; discarding partial results");
            std::process::exit(INTERRUPTED_EXIT_CODE)
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("medcrawl=info,warn"),
            1 => EnvFilter::new("medcrawl=debug,info"),
            2 => EnvFilter::new("medcrawl=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the config file (if any) and applies command-line overrides
fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    if let Some(output) = &cli.output {
        config.output.csv_path = output.clone();
    }
    if let Some(max_pages) = cli.max_pages {
        config.crawler.max_pages = max_pages;
    }
    if let Some(delay) = cli.delay {
        config.crawler.request_delay = delay;
    }
    if let Some(timeout) = cli.timeout {
        config.crawler.fetch_timeout = timeout;
    }

    validate(&config).context("Invalid configuration")?;
    Ok(config)
}

/// Asks for the seed URL on stdin
fn prompt_seed() -> io::Result<String> {
    print!("Enter website URL: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Handles the --dry-run mode: shows what would be crawled
fn handle_dry_run(config: &Config, seed: &str) -> anyhow::Result<()> {
    let target = CrawlTarget::from_seed(seed).context("Invalid seed URL")?;

    println!("=== Medcrawl Dry Run ===\n");

    println!("Target:");
    println!("  Seed: {}", target.url);
    println!("  Domain: {}", target.domain);

    println!("\nCrawler Configuration:");
    println!("  Max pages: {}", config.crawler.max_pages);
    println!("  Request delay: {}s", config.crawler.request_delay);
    println!("  Fetch timeout: {}s", config.crawler.fetch_timeout);
    println!("  User agent: {}", config.user_agent.header_value());

    println!("\nExtraction:");
    println!("  Name pattern: {}", config.extraction.name_pattern);
    println!(
        "  Qualification pattern: {}",
        config.extraction.qualification_pattern
    );
    println!("  Email pattern: {}", config.extraction.email_pattern);
    println!(
        "  Specializations: {}",
        config.extraction.specializations.join(", ")
    );

    println!("\nOutput:");
    println!("  CSV: {}", config.output.csv_path);

    println!("\n✓ Configuration is valid");

    Ok(())
}

/// Handles the main scrape operation
async fn handle_scrape(config: &Config, seed: &str) -> anyhow::Result<()> {
    let report = scrape_site(config, seed)
        .await
        .context("Scrape failed")?;

    match &report.outcome {
        ScrapeOutcome::Exported { path, records } => {
            print_statistics(&report.statistics);
            println!("✔ CSV file created: {} ({} records)", path.display(), records);
        }
        ScrapeOutcome::NoRecordsFound => {
            print_statistics(&report.statistics);
            println!("No doctor information found.");
        }
        ScrapeOutcome::SeedDisallowed { url } => {
            println!("Scraping not allowed by robots.txt: {}", url);
        }
    }

    Ok(())
}
