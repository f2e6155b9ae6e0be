//! PDF quote files: converted to line-oriented text, then treated like
//! plain text.
//!
//! ## Why a subprocess?
//!
//! PDFs carry no paragraph structure this crate could walk directly; the
//! `pdftotext` tool (poppler-utils) already does the layout-to-lines work
//! well. The parser depends only on the narrow [`TextExtractor`] seam —
//! "give me the document as lines" — so an in-process extraction library
//! can be substituted without touching the parsing contract. Spawning and
//! waiting on the subprocess is the one unbounded-latency operation in
//! the crate; callers hosting this in a server should wrap their own
//! timeout around `parse`.

use super::{ensure_claimed, split_quote_line, QuoteParser};
use crate::error::Quote2MemeError;
use crate::quote::Quote;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Converts a PDF document into lines of plain text.
pub trait TextExtractor {
    /// Extract the document's text as lines, in reading order.
    ///
    /// # Errors
    /// A human-readable description of the failure; the caller wraps it
    /// into [`Quote2MemeError::Ingestion`] with the file path attached.
    fn extract_text(&self, path: &Path) -> Result<Vec<String>, String>;
}

/// [`TextExtractor`] backed by the `pdftotext` command-line tool.
///
/// Runs `pdftotext <path> -` and captures standard output.
pub struct PdftotextExtractor;

impl TextExtractor for PdftotextExtractor {
    fn extract_text(&self, path: &Path) -> Result<Vec<String>, String> {
        let output = Command::new("pdftotext")
            .arg(path)
            .arg("-")
            .output()
            .map_err(|e| format!("failed to run pdftotext: {e}"))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(format!(
                "pdftotext exited with {}: {}",
                output.status,
                stderr.trim()
            ));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout.lines().map(str::to_string).collect())
    }
}

/// Parser for `.pdf` files.
pub struct PdfParser {
    extractor: Box<dyn TextExtractor>,
}

impl PdfParser {
    /// Create a parser using the default `pdftotext` subprocess extractor.
    pub fn new() -> Self {
        Self::with_extractor(Box::new(PdftotextExtractor))
    }

    /// Create a parser with a custom text-extraction backend.
    pub fn with_extractor(extractor: Box<dyn TextExtractor>) -> Self {
        Self { extractor }
    }
}

impl Default for PdfParser {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteParser for PdfParser {
    fn can_ingest(&self, path: &Path) -> bool {
        super::has_extension(path, "pdf")
    }

    fn parse(&self, path: &Path) -> Result<Vec<Quote>, Quote2MemeError> {
        ensure_claimed(self, path)?;

        let lines =
            self.extractor
                .extract_text(path)
                .map_err(|detail| Quote2MemeError::Ingestion {
                    path: path.to_path_buf(),
                    detail,
                })?;

        let quotes: Vec<Quote> = lines.iter().filter_map(|l| split_quote_line(l)).collect();
        debug!("parsed {} quotes from {}", quotes.len(), path.display());
        Ok(quotes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Extractor returning canned lines, no subprocess involved.
    struct StubExtractor(Vec<String>);

    impl TextExtractor for StubExtractor {
        fn extract_text(&self, _path: &Path) -> Result<Vec<String>, String> {
            Ok(self.0.clone())
        }
    }

    struct FailingExtractor;

    impl TextExtractor for FailingExtractor {
        fn extract_text(&self, _path: &Path) -> Result<Vec<String>, String> {
            Err("pdftotext exited with exit status: 1: Syntax Error".into())
        }
    }

    #[test]
    fn claims_only_exact_lowercase_pdf() {
        let p = PdfParser::new();
        assert!(p.can_ingest(Path::new("quotes.pdf")));
        assert!(!p.can_ingest(Path::new("quotes.PDF")));
        assert!(!p.can_ingest(Path::new("quotes.ps")));
    }

    #[test]
    fn parse_rejects_unclaimed_path() {
        let err = PdfParser::new().parse(Path::new("quotes.txt")).unwrap_err();
        assert!(matches!(err, Quote2MemeError::UnsupportedFormat { .. }));
    }

    #[test]
    fn extracted_lines_use_last_occurrence_split() {
        let parser = PdfParser::with_extractor(Box::new(StubExtractor(vec![
            "Life is like peanut butter - crunchy - Peanut".to_string(),
            "a page header with no quote".to_string(),
            String::new(),
        ])));
        let quotes = parser.parse(Path::new("quotes.pdf")).unwrap();
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].body(), "Life is like peanut butter - crunchy");
        assert_eq!(quotes[0].author(), "Peanut");
    }

    #[test]
    fn extractor_failure_surfaces_as_ingestion_error() {
        let parser = PdfParser::with_extractor(Box::new(FailingExtractor));
        let err = parser.parse(Path::new("quotes.pdf")).unwrap_err();
        match err {
            Quote2MemeError::Ingestion { detail, .. } => {
                assert!(detail.contains("Syntax Error"), "got: {detail}");
            }
            other => panic!("expected Ingestion, got {other:?}"),
        }
    }
}
