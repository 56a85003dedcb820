pub mod constants;

use std::path::PathBuf;

use crate::config::constants::{
    DESKTOP_USER_AGENT, FETCH_TIMEOUT_SECS, FETCH_WORKERS, REDIRECT_DEST_PARAM,
};

// * Per-run settings for the harvest pipeline. Fixed defaults live in
// * `constants`; the binary overrides individual fields from CLI flags.
#[derive(Debug, Clone)]
pub struct HarvestConfig {
    /// Saved catalog page to read.
    pub input_path: PathBuf,
    /// Base URL the catalog page was saved from; relative hrefs resolve
    /// against it.
    pub base_url: String,
    /// Intermediate CSV of deduplicated detail URLs.
    pub links_out: PathBuf,
    /// Final CSV of extracted book records.
    pub books_out: PathBuf,
    pub timeout_secs: u64,
    pub workers: usize,
    /// Query parameter the redirector stores the real destination under.
    pub redirect_param: String,
    pub user_agent: String,
}

impl HarvestConfig {
    pub fn new(input_path: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            input_path: input_path.into(),
            base_url: base_url.into(),
            links_out: PathBuf::from("book_urls.csv"),
            books_out: PathBuf::from("books.csv"),
            timeout_secs: FETCH_TIMEOUT_SECS,
            workers: FETCH_WORKERS,
            redirect_param: REDIRECT_DEST_PARAM.to_string(),
            user_agent: DESKTOP_USER_AGENT.to_string(),
        }
    }
}
