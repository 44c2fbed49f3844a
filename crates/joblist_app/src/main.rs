//! Command-line consumer for the joblist query coordinator.
//!
//! Runs one fetch cycle for the given filters and page, waits for both the
//! page data and the next-page probe to settle, and prints the listings.

mod logging;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use joblist_core::QueryState;
use joblist_engine::{FilterParams, HttpListingClient, QueryCoordinator, SearchConfig};
use joblist_logging::fetch_info;
use url::Url;

use crate::logging::LogDestination;

/// Public job-listings search endpoint used when `--base-url` is not given.
const DEFAULT_BASE_URL: &str = "https://jobs.github.com/positions.json";

#[derive(Debug, Parser)]
#[command(name = "joblist", about = "Search a paginated job-listings API")]
struct Args {
    /// Free-text description filter, e.g. "rust".
    #[arg(long)]
    description: Option<String>,

    /// Location filter, e.g. "berlin".
    #[arg(long)]
    location: Option<String>,

    /// Only full-time positions.
    #[arg(long)]
    full_time: bool,

    /// Page to fetch (1-based).
    #[arg(long, default_value_t = 1)]
    page: u32,

    /// Listings endpoint override.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Log to the terminal instead of ./joblist.log.
    #[arg(long)]
    verbose: bool,
}

/// Both requests of the cycle have resolved one way or the other.
fn settled(state: &QueryState) -> bool {
    state.error.is_some() || (!state.loading && state.has_next_page.is_some())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::initialize(if args.verbose {
        LogDestination::Both
    } else {
        LogDestination::File
    });

    let base_url = Url::parse(&args.base_url).context("invalid --base-url")?;
    let client = HttpListingClient::new(SearchConfig::new(base_url))?;
    let coordinator = QueryCoordinator::new(Arc::new(client));
    let mut updates = coordinator.subscribe();

    let mut filters = FilterParams::new();
    if let Some(description) = args.description {
        filters.insert("description".to_string(), description);
    }
    if let Some(location) = args.location {
        filters.insert("location".to_string(), location);
    }
    if args.full_time {
        filters.insert("full_time".to_string(), "true".to_string());
    }

    coordinator.set_query(filters, args.page);

    let state = loop {
        let state = updates.borrow().clone();
        if settled(&state) {
            break state;
        }
        updates.changed().await.context("coordinator closed")?;
    };

    if let Some(error) = &state.error {
        anyhow::bail!("query failed: {error}");
    }

    fetch_info!("page {} settled with {} listing(s)", args.page, state.jobs.len());

    println!("page {}: {} listing(s)", args.page, state.jobs.len());
    for job in &state.jobs {
        let title = job
            .get("title")
            .and_then(|value| value.as_str())
            .unwrap_or("(untitled)");
        let company = job
            .get("company")
            .and_then(|value| value.as_str())
            .unwrap_or("(unknown company)");
        println!("  {title} - {company}");
    }
    if state.has_next_page == Some(true) {
        println!("more listings on page {}", args.page + 1);
    }

    Ok(())
}
