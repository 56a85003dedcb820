use bookflow::refinery::{BookExtractor, BookFields, BookRecord};

// * Test Suite for tiered extraction over realistic detail pages

#[test]
fn test_full_detail_page() {
    let html = r#"
        <html lang="en">
        <head>
            <title>A Wizard of Earthsea | Books Example</title>
            <meta property="og:title" content="A Wizard of Earthsea"/>
            <meta name="author" content="Ursula K. Le Guin"/>
            <meta property="og:image" content="https://books.example.org/covers/earthsea.jpg"/>
        </head>
        <body>
            <nav><a href="/">Home</a></nav>
            <h1>A Wizard of Earthsea (50th Anniversary)</h1>
            <div class="product-details">
                <p>Publisher: Example House</p>
                <p>ISBN-13: 978-0-547-72202-1</p>
            </div>
        </body>
        </html>
    "#;

    let fields = BookExtractor::extract(html);

    // * Meta tags outrank the visible heading; the ISBN comes off the raw
    // * body text.
    assert_eq!(fields.title, "A Wizard of Earthsea");
    assert_eq!(fields.author, "Ursula K. Le Guin");
    assert_eq!(fields.isbn, "978-0-547-72202-1");
}

#[test]
fn test_page_with_only_visible_markup() {
    let html = r#"
        <html><body>
            <h1>The Hobbit</h1>
            <div class="book-meta">
                by <span itemprop="author">J.R.R. Tolkien</span>
            </div>
        </body></html>
    "#;

    let fields = BookExtractor::extract(html);

    assert_eq!(
        fields,
        BookFields {
            title: "The Hobbit".to_string(),
            author: "J.R.R. Tolkien".to_string(),
            isbn: String::new(),
        }
    );
}

#[test]
fn test_record_from_fields_keeps_source_url() {
    let fields = BookExtractor::extract(
        r#"<html><head><meta property="og:title" content="Example Book"/></head></html>"#,
    );
    let record = BookRecord::from_fields(fields, "https://books.example.org/1");

    assert_eq!(record.title, "Example Book");
    assert_eq!(record.source_url, "https://books.example.org/1");
    assert!(!record.is_error_marker());
}

#[test]
fn test_error_marker_record_shape() {
    let record = BookRecord::error_marker("https://books.example.org/x");

    assert_eq!(record.title, "-ERROR-");
    assert_eq!(record.author, "");
    assert_eq!(record.isbn, "");
    assert_eq!(record.source_url, "https://books.example.org/x");
    assert!(record.is_error_marker());
}
