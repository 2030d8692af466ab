//! Depth-Crawler main entry point
//!
//! This is the command-line interface for the depth-bounded web crawler.

use anyhow::Context;
use clap::Parser;
use depth_crawler::config::{read_config, validate, Config};
use depth_crawler::crawler::Crawler;
use depth_crawler::output::{exit_status, report, ConsoleOutput};
use depth_crawler::CrawlError;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Depth-Crawler: crawl a website breadth-first up to a maximum depth
///
/// Starting from URL, every link that stays on the same host is followed
/// until the depth limit is reached. Each page is fetched at most once.
#[derive(Parser, Debug)]
#[command(name = "depth-crawler")]
#[command(version)]
#[command(about = "Web Crawler - Crawl websites recursively", long_about = None)]
struct Cli {
    /// Starting URL to crawl
    #[arg(value_name = "URL")]
    url: String,

    /// Maximum depth to crawl [default: 3]
    #[arg(short, long)]
    depth: Option<u32>,

    /// File to save discovered URLs
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Pause before each request, in milliseconds [default: 100]
    #[arg(long, value_name = "MS")]
    delay_ms: Option<u64>,

    /// Per-request timeout, in seconds [default: 10]
    #[arg(long, value_name = "SECS")]
    timeout_secs: Option<u64>,

    /// User-Agent header to send
    #[arg(long)]
    user_agent: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr; stdout carries only progress lines and the summary.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("depth_crawler=warn,warn"),
            1 => EnvFilter::new("depth_crawler=info,warn"),
            2 => EnvFilter::new("depth_crawler=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the configuration file (if any) and applies command-line overrides
fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            read_config(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?
        }
        None => Config::default(),
    };

    if let Some(depth) = cli.depth {
        config.crawler.max_depth = depth;
    }
    if let Some(delay_ms) = cli.delay_ms {
        config.crawler.request_delay_ms = delay_ms;
    }
    if let Some(timeout_secs) = cli.timeout_secs {
        config.crawler.timeout_secs = timeout_secs;
    }
    if let Some(user_agent) = &cli.user_agent {
        config.crawler.user_agent = user_agent.clone();
    }
    if let Some(output) = &cli.output {
        config.output.path = Some(output.clone());
    }

    validate(&config).context("Invalid configuration")?;
    Ok(config)
}

/// Runs the crawl, prints the summary and saves the results
async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = build_config(&cli)?;

    println!(
        "Starting web crawler at {} with max depth {}",
        cli.url, config.crawler.max_depth
    );

    let shutdown = Arc::new(AtomicBool::new(false));
    spawn_interrupt_listener(shutdown.clone());

    let crawler = Crawler::from_config(config.crawler.clone())
        .context("Failed to build HTTP client")?
        .with_output(Box::new(ConsoleOutput))
        .with_shutdown(shutdown);

    let result = match crawler.crawl(&cli.url).await {
        Ok(result) => result,
        Err(e @ CrawlError::InvalidSeed { .. }) => return Err(e.into()),
        Err(e) => return Err(anyhow::Error::new(e).context("Crawl failed")),
    };

    if let Err(e) = report(&result, config.output.path.as_deref()) {
        tracing::error!("{}", e);
        eprintln!("{}", e);
    }

    Ok(ExitCode::from(exit_status(&result)))
}

/// Raises the shutdown flag on the first Ctrl-C and exits on the second
fn spawn_interrupt_listener(flag: Arc<AtomicBool>) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_err() {
            return;
        }
        tracing::info!("Interrupt received, finishing the current page");
        flag.store(true, Ordering::SeqCst);

        if tokio::signal::ctrl_c().await.is_ok() {
            std::process::exit(130);
        }
    });
}
