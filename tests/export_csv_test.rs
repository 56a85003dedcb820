use bookflow::export::{write_book_records, write_url_list};
use bookflow::refinery::BookRecord;

// * Test Suite for CSV export

fn book(title: &str, author: &str, isbn: &str, source_url: &str) -> BookRecord {
    BookRecord {
        title: title.to_string(),
        author: author.to_string(),
        isbn: isbn.to_string(),
        source_url: source_url.to_string(),
    }
}

#[test]
fn test_url_list_has_header_and_all_rows() {
    let urls = vec![
        "https://books.example.org/a".to_string(),
        "https://books.example.org/b".to_string(),
    ];

    let mut buf = Vec::new();
    write_url_list(&mut buf, &urls).unwrap();
    let out = String::from_utf8(buf).unwrap();

    assert_eq!(
        out,
        "detail_url\nhttps://books.example.org/a\nhttps://books.example.org/b\n"
    );
}

#[test]
fn test_book_table_header_and_rows() {
    let records = vec![book(
        "The Hobbit",
        "J.R.R. Tolkien",
        "978-0-618-00221-4",
        "https://books.example.org/hobbit",
    )];

    let mut buf = Vec::new();
    write_book_records(&mut buf, &records).unwrap();
    let out = String::from_utf8(buf).unwrap();

    let mut lines = out.lines();
    assert_eq!(lines.next(), Some("title,author,isbn,source_url"));
    assert_eq!(
        lines.next(),
        Some("The Hobbit,J.R.R. Tolkien,978-0-618-00221-4,https://books.example.org/hobbit")
    );
    assert_eq!(lines.next(), None);
}

#[test]
fn test_fields_with_delimiters_are_quoted() {
    let records = vec![book(
        r#"Charlotte's Web, "Anniversary" Edition"#,
        "White, E. B.",
        "",
        "https://books.example.org/cw",
    )];

    let mut buf = Vec::new();
    write_book_records(&mut buf, &records).unwrap();
    let out = String::from_utf8(buf).unwrap();

    assert!(out.contains(r#""Charlotte's Web, ""Anniversary"" Edition""#));
    assert!(out.contains(r#""White, E. B.""#));

    // * Quoted fields must survive a read back through the same crate.
    let mut reader = csv::Reader::from_reader(out.as_bytes());
    let row = reader.records().next().unwrap().unwrap();
    assert_eq!(&row[0], r#"Charlotte's Web, "Anniversary" Edition"#);
    assert_eq!(&row[1], "White, E. B.");
}

#[test]
fn test_empty_record_set_still_writes_header() {
    let mut buf = Vec::new();
    write_book_records(&mut buf, &[]).unwrap();

    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "title,author,isbn,source_url\n"
    );
}

#[test]
fn test_no_rows_skipped() {
    let records: Vec<BookRecord> = (0..50)
        .map(|i| {
            book(
                &format!("Title {i}"),
                "",
                "",
                &format!("https://books.example.org/{i}"),
            )
        })
        .collect();

    let mut buf = Vec::new();
    write_book_records(&mut buf, &records).unwrap();
    let out = String::from_utf8(buf).unwrap();

    // * Header plus one line per record.
    assert_eq!(out.lines().count(), 51);
}
