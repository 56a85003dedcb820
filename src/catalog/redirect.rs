use std::collections::HashSet;

use url::Url;

use crate::catalog::discover::CoverLink;

// * The site wraps every outbound book link in a redirector that carries the
// * real destination as a query parameter rather than serving it as the href.

/// Extracts the destination a redirector URL carries under `dest_param`.
/// Missing parameter, empty value and unparseable URLs all yield `None`;
/// none of these are faults.
pub fn resolve_destination(detail_url: &str, dest_param: &str) -> Option<String> {
    let url = Url::parse(detail_url).ok()?;
    let dest = url
        .query_pairs()
        .find(|(key, _)| key == dest_param)
        .map(|(_, value)| value.into_owned())?;

    if dest.is_empty() {
        None
    } else {
        Some(dest)
    }
}

/// Resolves every discovered link and collapses the result to unique
/// destinations, first occurrence first. Idempotent over the same input.
pub fn unique_destinations(links: &[CoverLink], dest_param: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut destinations = Vec::new();

    for link in links {
        if let Some(dest) = resolve_destination(&link.detail_url, dest_param) {
            if seen.insert(dest.clone()) {
                destinations.push(dest);
            }
        }
    }

    destinations
}
