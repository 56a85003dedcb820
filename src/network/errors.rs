use thiserror::Error;

// * Unified error type for detail page fetching. The variants let the
// * pipeline's per-page outcome distinguish failure classes instead of
// * collapsing them into one marker.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request timed out after {0}s")]
    Timeout(u64),

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}
