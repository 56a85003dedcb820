// * Configuration Constants
// * Central location for fixed defaults and extraction constants

// * Detail page fetch timeout in seconds
pub const FETCH_TIMEOUT_SECS: u64 = 10;

// * Concurrent detail page fetches
pub const FETCH_WORKERS: usize = 4;

// * Some catalog hosts reject requests with a non-browser user agent
pub const DESKTOP_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

// * Query parameter the redirector stores the real destination under
pub const REDIRECT_DEST_PARAM: &str = "q";

// * Title written into a record when the page could not be fetched
pub const ERROR_TITLE_MARKER: &str = "-ERROR-";

// * ISBN-13: 978/979 prefix, embedded hyphens allowed, at least thirteen
// * digits-or-hyphens total
pub const ISBN13_PATTERN: &str = r"\b97[89][\d\-]{10,}\b";

// * Visible author markup fallbacks, tried in document order
pub const AUTHOR_FALLBACK_SELECTOR: &str = r#".author, span[itemprop="author"], .byline"#;
