use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use url::Url;

// * Precompiled selector; every other lookup is an ancestor walk
static SELECTOR_IMG: LazyLock<Selector> = LazyLock::new(|| Selector::parse("img").unwrap());

/// A cover image paired with the detail page its nearest enclosing anchor
/// points at. Both fields are non-empty by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverLink {
    pub image_source: String,
    pub detail_url: String,
}

// * The catalog markup never wraps hyperlinks directly around visible text;
// * each cover <img> sits somewhere below its clickable <a>. Tracing from
// * leaf image up to the nearest anchored ancestor is the only reliable
// * association.
pub fn discover_cover_links(html: &str, base_url: &str) -> Vec<CoverLink> {
    let base = match Url::parse(base_url) {
        Ok(u) => u,
        Err(e) => {
            tracing::warn!(base_url, error = %e, "unparseable base URL, no links discovered");
            return Vec::new();
        }
    };

    let document = Html::parse_document(html);
    let mut links = Vec::new();

    for img in document.select(&SELECTOR_IMG) {
        let src = match img.value().attr("src") {
            Some(s) if !s.is_empty() => s,
            _ => continue,
        };

        // * An image with no anchored ancestor has no associated link and is
        // * dropped silently.
        let href = match enclosing_anchor_href(img) {
            Some(h) => h,
            None => continue,
        };

        // * Join handles absolute, protocol-relative and path-relative hrefs
        // * uniformly.
        let detail_url = match base.join(&href) {
            Ok(u) => u.to_string(),
            Err(_) => continue,
        };

        links.push(CoverLink {
            image_source: src.to_string(),
            detail_url,
        });
    }

    links
}

// * Iterative upward walk from the image's parent. The first <a> carrying a
// * non-empty href wins; an <a> without one does not stop the climb. The walk
// * ends at <body>/<html> (an anchor at or above the body wrapper never
// * claims an image) or at the document root for fragments.
fn enclosing_anchor_href(img: ElementRef<'_>) -> Option<String> {
    let mut node = img.parent();
    while let Some(current) = node {
        if let Some(el) = ElementRef::wrap(current) {
            match el.value().name() {
                "body" | "html" => return None,
                "a" => {
                    if let Some(href) = el.value().attr("href") {
                        if !href.is_empty() {
                            return Some(href.to_string());
                        }
                    }
                }
                _ => {}
            }
        }
        node = current.parent();
    }
    None
}
