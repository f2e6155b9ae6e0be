//! CSV quote files: a header row naming `body` and `author` columns.
//!
//! Column lookup is header-driven, not positional, so
//! `author,body` and `body,author,source` files both parse. Rows that do
//! not carry both cells are skipped silently, matching the per-line
//! leniency policy of the line-oriented parsers.

use super::{ensure_claimed, QuoteParser};
use crate::error::Quote2MemeError;
use crate::quote::Quote;
use std::path::Path;
use tracing::debug;

/// Parser for `.csv` files.
pub struct CsvParser;

impl QuoteParser for CsvParser {
    fn can_ingest(&self, path: &Path) -> bool {
        super::has_extension(path, "csv")
    }

    fn parse(&self, path: &Path) -> Result<Vec<Quote>, Quote2MemeError> {
        ensure_claimed(self, path)?;

        let ingestion_err = |detail: String| Quote2MemeError::Ingestion {
            path: path.to_path_buf(),
            detail,
        };

        let mut reader =
            csv::Reader::from_path(path).map_err(|e| ingestion_err(e.to_string()))?;

        let headers = reader
            .headers()
            .map_err(|e| ingestion_err(e.to_string()))?;
        let body_col = headers.iter().position(|h| h == "body");
        let author_col = headers.iter().position(|h| h == "author");

        let (Some(body_col), Some(author_col)) = (body_col, author_col) else {
            // No usable columns at all: every row would be skipped, so an
            // empty result is the honest outcome for a recognised file.
            debug!(
                "csv {} lacks body/author headers; yielding no quotes",
                path.display()
            );
            return Ok(Vec::new());
        };

        let mut quotes = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| ingestion_err(e.to_string()))?;
            match (record.get(body_col), record.get(author_col)) {
                (Some(body), Some(author)) => match Quote::new(body, author) {
                    Ok(q) => quotes.push(q),
                    Err(_) => debug!("skipping csv row with empty cell: {record:?}"),
                },
                _ => debug!("skipping short csv row: {record:?}"),
            }
        }

        debug!("parsed {} quotes from {}", quotes.len(), path.display());
        Ok(quotes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotes.csv");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(content.as_bytes())
            .unwrap();
        (dir, path)
    }

    #[test]
    fn claims_only_exact_lowercase_csv() {
        let p = CsvParser;
        assert!(p.can_ingest(Path::new("quotes.csv")));
        assert!(!p.can_ingest(Path::new("quotes.Csv")));
        assert!(!p.can_ingest(Path::new("quotes.tsv")));
    }

    #[test]
    fn header_driven_column_lookup() {
        // Reversed column order and an extra column both work.
        let (_dir, path) = write_csv("source,author,body\nweb,Unknown,Good dog\n");
        let quotes = CsvParser.parse(&path).unwrap();
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].body(), "Good dog");
        assert_eq!(quotes[0].author(), "Unknown");
    }

    #[test]
    fn rows_with_empty_cells_are_skipped() {
        let (_dir, path) = write_csv("body,author\nGood dog,Unknown\n,Nobody\n");
        let quotes = CsvParser.parse(&path).unwrap();
        assert_eq!(quotes.len(), 1);
    }

    #[test]
    fn missing_headers_yield_empty_result() {
        let (_dir, path) = write_csv("text,who\nGood dog,Unknown\n");
        assert!(CsvParser.parse(&path).unwrap().is_empty());
    }
}
