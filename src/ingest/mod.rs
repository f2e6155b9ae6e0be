//! Quote ingestion: one parser per source format behind a single trait.
//!
//! Each submodule handles exactly one file format. Keeping the formats
//! separate makes each independently testable and lets us swap an
//! implementation (e.g. replace the `pdftotext` subprocess with an
//! in-process extractor) without touching the others.
//!
//! ## Data Flow
//!
//! ```text
//! path ──▶ Ingestor ──▶ parser ──▶ Vec<Quote>
//!          (dispatch)   (format-specific extraction)
//! ```
//!
//! Dispatch is by file extension, case-sensitive and mutually exclusive
//! across the baseline set, so registration order never decides an
//! outcome. A path no parser claims fails with
//! [`Quote2MemeError::UnsupportedFormat`].

pub mod csv;
pub mod docx;
pub mod pdf;
pub mod txt;

use crate::error::Quote2MemeError;
use crate::quote::Quote;
use std::path::Path;
use tracing::debug;

/// The `" - "` sequence separating a quote body from its author in
/// line-oriented sources.
pub(crate) const SEPARATOR: &str = " - ";

/// One file-format-specific extraction strategy.
///
/// Implementations are stateless; `parse` performs read-only filesystem
/// (and, for PDF, subprocess) access.
pub trait QuoteParser {
    /// Whether this parser claims the given path. True iff the path's
    /// extension exactly matches this parser's format, case-sensitively.
    fn can_ingest(&self, path: &Path) -> bool;

    /// Extract all quotes from the file, in source order.
    ///
    /// An empty vector is a valid result (no quotes found). Lines or rows
    /// that do not yield a quote are skipped; file-level failures surface
    /// as errors.
    ///
    /// # Errors
    /// [`Quote2MemeError::UnsupportedFormat`] when called on a path this
    /// parser does not claim; [`Quote2MemeError::Ingestion`] when the file
    /// cannot be read or its external conversion tool fails.
    fn parse(&self, path: &Path) -> Result<Vec<Quote>, Quote2MemeError>;
}

/// Split a source line into `(body, author)` at the **last** occurrence of
/// the `" - "` separator.
///
/// Quote bodies are free text that may itself contain `word - word`;
/// treating the final separator as the author boundary is the only
/// convention that correctly peels a trailing `- Author` suffix off such
/// lines. Returns `None` for lines without the separator or lines whose
/// halves trim to empty — both are per-line anomalies the caller skips.
pub(crate) fn split_quote_line(line: &str) -> Option<Quote> {
    let (body, author) = line.rsplit_once(SEPARATOR)?;
    match Quote::new(body, author) {
        Ok(quote) => Some(quote),
        Err(_) => {
            debug!("skipping line with empty body or author: {line:?}");
            None
        }
    }
}

/// Check a parser's precondition, producing the uniform violation error.
pub(crate) fn ensure_claimed(
    parser: &dyn QuoteParser,
    path: &Path,
) -> Result<(), Quote2MemeError> {
    if parser.can_ingest(path) {
        Ok(())
    } else {
        Err(Quote2MemeError::UnsupportedFormat {
            path: path.to_path_buf(),
        })
    }
}

/// Format-dispatching entry point over the registered parsers.
///
/// # Example
/// ```rust,no_run
/// use quote2meme::Ingestor;
///
/// let quotes = Ingestor::new().parse("quotes/dogs.csv".as_ref())?;
/// for q in &quotes {
///     println!("{q}");
/// }
/// # Ok::<(), quote2meme::Quote2MemeError>(())
/// ```
pub struct Ingestor {
    parsers: Vec<Box<dyn QuoteParser>>,
}

impl Ingestor {
    /// Create an ingestor with the four baseline parsers registered.
    pub fn new() -> Self {
        Self {
            parsers: vec![
                Box::new(csv::CsvParser),
                Box::new(docx::DocxParser),
                Box::new(pdf::PdfParser::new()),
                Box::new(txt::TxtParser),
            ],
        }
    }

    /// Parse the file with the first parser that claims its extension.
    ///
    /// # Errors
    /// [`Quote2MemeError::UnsupportedFormat`] when no parser claims the
    /// path; otherwise whatever the delegated parser returns.
    pub fn parse(&self, path: &Path) -> Result<Vec<Quote>, Quote2MemeError> {
        for parser in &self.parsers {
            if parser.can_ingest(path) {
                return parser.parse(path);
            }
        }
        Err(Quote2MemeError::UnsupportedFormat {
            path: path.to_path_buf(),
        })
    }
}

impl Default for Ingestor {
    fn default() -> Self {
        Self::new()
    }
}

/// True iff `path` has exactly the given extension, case-sensitively.
///
/// `Path::extension` compares raw bytes, so `photo.TXT` does not match
/// `txt`.
pub(crate) fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension().is_some_and(|e| e == ext)
}
