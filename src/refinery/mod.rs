// * The Refinery: tiered bibliographic extraction over fetched detail pages.
// * Goal: a title/author/ISBN record for every destination URL, degraded but
// * present when the page cannot be read.

pub mod isbn;
pub mod metadata;

// * Re-exports for convenient access
pub use metadata::{BookExtractor, BookFields};

use serde::Serialize;

use crate::config::constants::ERROR_TITLE_MARKER;

/// One row of the final table. Every destination URL produces exactly one
/// record, fetch failure included; field names double as the CSV header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookRecord {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub source_url: String,
}

impl BookRecord {
    pub fn from_fields(fields: BookFields, source_url: &str) -> Self {
        Self {
            title: fields.title,
            author: fields.author,
            isbn: fields.isbn,
            source_url: source_url.to_string(),
        }
    }

    /// Sentinel emitted when a page could not be fetched. The URL is kept so
    /// the row stays attributable.
    pub fn error_marker(source_url: &str) -> Self {
        Self {
            title: ERROR_TITLE_MARKER.to_string(),
            author: String::new(),
            isbn: String::new(),
            source_url: source_url.to_string(),
        }
    }

    pub fn is_error_marker(&self) -> bool {
        self.title == ERROR_TITLE_MARKER
    }
}
