// * Tabular export: the intermediate URL list and the final book table.
// * The csv crate owns quoting and escaping; rows are written in the order
// * given, none skipped.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::refinery::BookRecord;

/// Writes the deduplicated destination URLs as a single-column CSV with a
/// header row.
pub fn write_url_list<W: Write>(wtr: W, urls: &[String]) -> csv::Result<()> {
    let mut writer = csv::Writer::from_writer(wtr);
    writer.write_record(["detail_url"])?;
    for url in urls {
        writer.write_record([url.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the final four-column book table. The header row is written even
/// for an empty record set.
pub fn write_book_records<W: Write>(wtr: W, records: &[BookRecord]) -> csv::Result<()> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(wtr);
    writer.write_record(["title", "author", "isbn", "source_url"])?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_url_list_file(path: &Path, urls: &[String]) -> csv::Result<()> {
    write_url_list(File::create(path)?, urls)
}

pub fn write_book_records_file(path: &Path, records: &[BookRecord]) -> csv::Result<()> {
    write_book_records(File::create(path)?, records)
}
