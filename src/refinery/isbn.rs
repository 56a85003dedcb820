use std::sync::LazyLock;

use regex::Regex;

use crate::config::constants::ISBN13_PATTERN;

// * Precompiled pattern; compiled once per process
static PATTERN_ISBN13: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ISBN13_PATTERN).expect("Invalid ISBN-13 regex"));

/// Scans raw page text for the first ISBN-13, hyphens kept as printed.
/// Detail pages rarely mark the ISBN up structurally, so this runs over the
/// unparsed body.
pub fn scan_isbn13(text: &str) -> Option<String> {
    PATTERN_ISBN13.find(text).map(|m| m.as_str().to_string())
}
