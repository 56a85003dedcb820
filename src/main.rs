use std::path::PathBuf;

use clap::Parser;

use bookflow::config::{constants, HarvestConfig};
use bookflow::pipeline::Pipeline;

/// Harvests title/author/ISBN records from a saved catalog page.
#[derive(Parser, Debug)]
#[command(name = "bookflow", about = "Catalog book-metadata harvester")]
struct Args {
    /// Saved catalog page to read
    #[arg(long, default_value = "catalog.html")]
    input: PathBuf,

    /// Base URL the catalog page was saved from
    #[arg(long)]
    base_url: String,

    /// Intermediate CSV of deduplicated detail URLs
    #[arg(long, default_value = "book_urls.csv")]
    links_out: PathBuf,

    /// Final CSV of extracted book records
    #[arg(long, default_value = "books.csv")]
    books_out: PathBuf,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = constants::FETCH_TIMEOUT_SECS)]
    timeout: u64,

    /// Concurrent detail page fetches
    #[arg(long, default_value_t = constants::FETCH_WORKERS)]
    workers: usize,

    /// Query parameter the redirector stores the destination under
    #[arg(long, default_value = constants::REDIRECT_DEST_PARAM)]
    redirect_param: String,
}

#[tokio::main]
async fn main() {
    // Initialize Telemetry
    tracing_subscriber::fmt()
        .with_env_filter("bookflow=debug,info")
        .with_target(false)
        .json()
        .init();

    let args = Args::parse();

    let mut config = HarvestConfig::new(args.input, args.base_url);
    config.links_out = args.links_out;
    config.books_out = args.books_out;
    config.timeout_secs = args.timeout;
    config.workers = args.workers;
    config.redirect_param = args.redirect_param;

    let outcome = match Pipeline::new(config) {
        Ok(pipeline) => pipeline.run().await,
        Err(err) => Err(err),
    };

    match outcome {
        Ok(summary) => {
            // * Per-record failures are reported but never change the exit
            // * code; only a run that could not proceed at all does.
            tracing::info!(
                links = summary.links_discovered,
                unique = summary.unique_destinations,
                extracted = summary.records_extracted,
                failed = summary.records_failed,
                "harvest complete"
            );
        }
        Err(err) => {
            tracing::error!(error = %err, "harvest aborted");
            std::process::exit(1);
        }
    }
}
