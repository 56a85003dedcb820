// * Stage orchestration: discover -> resolve -> fetch/extract -> export.
// * Control flows strictly forward; per-page failures degrade, they never
// * abort the batch.

use std::path::PathBuf;

use futures::{stream, StreamExt};
use thiserror::Error;

use crate::catalog::{discover_cover_links, unique_destinations};
use crate::config::HarvestConfig;
use crate::export;
use crate::network::{FetchError, PageClient};
use crate::refinery::{BookExtractor, BookRecord};

// * Failures that end the run. Everything per-item degrades instead.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("failed to read catalog snapshot {path:?}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path:?}: {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] FetchError),
}

/// Whether a row carries extracted fields or the error marker, and why.
#[derive(Debug)]
pub enum PageOutcome {
    Extracted,
    FetchFailed(FetchError),
}

/// A processed detail page: always a record, plus the outcome that produced
/// it.
#[derive(Debug)]
pub struct ProcessedPage {
    pub record: BookRecord,
    pub outcome: PageOutcome,
}

/// End-of-run counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub links_discovered: usize,
    pub unique_destinations: usize,
    pub records_extracted: usize,
    pub records_failed: usize,
}

pub struct Pipeline {
    config: HarvestConfig,
    client: PageClient,
}

impl Pipeline {
    pub fn new(config: HarvestConfig) -> Result<Self, PipelineError> {
        let client = PageClient::new(&config.user_agent, config.timeout_secs)?;
        Ok(Self { config, client })
    }

    /// Runs the full harvest. The only fatal points are reading the snapshot
    /// and writing the output tables.
    pub async fn run(&self) -> Result<RunSummary, PipelineError> {
        let html = std::fs::read_to_string(&self.config.input_path).map_err(|source| {
            PipelineError::ReadInput {
                path: self.config.input_path.clone(),
                source,
            }
        })?;

        let links = discover_cover_links(&html, &self.config.base_url);
        tracing::info!(count = links.len(), "cover links discovered");

        let destinations = unique_destinations(&links, &self.config.redirect_param);
        tracing::info!(count = destinations.len(), "unique detail URLs resolved");

        export::write_url_list_file(&self.config.links_out, &destinations).map_err(|source| {
            PipelineError::WriteOutput {
                path: self.config.links_out.clone(),
                source,
            }
        })?;

        let pages = harvest_books(&self.client, &destinations, self.config.workers).await;

        let records: Vec<BookRecord> = pages.iter().map(|p| p.record.clone()).collect();
        export::write_book_records_file(&self.config.books_out, &records).map_err(|source| {
            PipelineError::WriteOutput {
                path: self.config.books_out.clone(),
                source,
            }
        })?;

        let failed = pages
            .iter()
            .filter(|p| matches!(p.outcome, PageOutcome::FetchFailed(_)))
            .count();

        Ok(RunSummary {
            links_discovered: links.len(),
            unique_destinations: destinations.len(),
            records_extracted: pages.len() - failed,
            records_failed: failed,
        })
    }
}

/// Fetches and extracts every destination URL through a bounded worker pool.
/// Total: each URL yields exactly one page, failures included. The ordered
/// stream keeps output rows in input order; `workers = 1` degenerates to a
/// strictly sequential run.
pub async fn harvest_books(
    client: &PageClient,
    urls: &[String],
    workers: usize,
) -> Vec<ProcessedPage> {
    stream::iter(urls)
        .map(|url| process_page(client, url))
        .buffered(workers.max(1))
        .collect::<Vec<_>>()
        .await
}

// * The per-URL failure boundary. Nothing below this function is allowed to
// * abort the batch.
async fn process_page(client: &PageClient, url: &str) -> ProcessedPage {
    match client.fetch(url).await {
        Ok(body) => {
            let fields = BookExtractor::extract(&body);
            tracing::info!(url, title = %fields.title, "book extracted");
            ProcessedPage {
                record: BookRecord::from_fields(fields, url),
                outcome: PageOutcome::Extracted,
            }
        }
        Err(err) => {
            tracing::warn!(url, error = %err, "detail page fetch failed");
            ProcessedPage {
                record: BookRecord::error_marker(url),
                outcome: PageOutcome::FetchFailed(err),
            }
        }
    }
}
