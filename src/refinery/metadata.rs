// * Tiered bibliographic extraction for book detail pages.
// * Chain: structured meta tags -> visible markup fallbacks -> raw-text ISBN
// * scan. A later tier runs only where the earlier one came up empty.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::config::constants::AUTHOR_FALLBACK_SELECTOR;
use crate::refinery::isbn;

// * Precompiled selectors for the extraction tiers
static SELECTOR_META: LazyLock<Selector> = LazyLock::new(|| Selector::parse("meta").unwrap());
static SELECTOR_H1: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h1").unwrap());
static SELECTOR_AUTHOR_FALLBACK: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(AUTHOR_FALLBACK_SELECTOR).expect("Invalid author fallback selector")
});

/// Bibliographic fields pulled from a single detail page. An empty field
/// means every tier came up empty; that is not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFields {
    pub title: String,
    pub author: String,
    pub isbn: String,
}

/// Extracts book fields from page HTML using the prioritized tier chain.
pub struct BookExtractor;

impl BookExtractor {
    pub fn extract(html: &str) -> BookFields {
        let document = Html::parse_document(html);
        let mut fields = BookFields::default();

        // * Tier 1: social-preview title and author meta tags
        Self::extract_meta_tags(&document, &mut fields);

        // * Tier 2: visible markup where meta tags were missing
        Self::extract_visible_fallbacks(&document, &mut fields);

        // * ISBN is never marked up structurally on these pages; scan the
        // * raw text directly.
        fields.isbn = isbn::scan_isbn13(html).unwrap_or_default();

        fields
    }

    fn extract_meta_tags(document: &Html, fields: &mut BookFields) {
        for meta in document.select(&SELECTOR_META) {
            let content = meta.value().attr("content").unwrap_or("");
            if content.is_empty() {
                continue;
            }

            if fields.title.is_empty() && meta.value().attr("property") == Some("og:title") {
                fields.title = content.to_string();
            }

            if fields.author.is_empty() {
                let name = meta.value().attr("name").unwrap_or("");
                if name.eq_ignore_ascii_case("author") {
                    fields.author = content.to_string();
                }
            }
        }
    }

    fn extract_visible_fallbacks(document: &Html, fields: &mut BookFields) {
        if fields.title.is_empty() {
            if let Some(h1) = document.select(&SELECTOR_H1).next() {
                fields.title = visible_text(h1);
            }
        }

        if fields.author.is_empty() {
            if let Some(el) = document.select(&SELECTOR_AUTHOR_FALLBACK).next() {
                fields.author = visible_text(el);
            }
        }
    }
}

fn visible_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}
