//! Error types for the quote2meme library.
//!
//! One fatal error type covers both halves of the crate: quote ingestion
//! and image compositing. Per-line anomalies inside a recognised quote
//! file (a line without the `" - "` separator, a CSV row missing a cell)
//! are deliberately NOT errors — parsers skip them and keep going, so a
//! single malformed line never loses the rest of the file. Everything
//! that reaches [`Quote2MemeError`] is a file-level or system-level
//! failure the caller must hear about: unreadable file, undecodable
//! image, unwritable directory, unclaimed extension.
//!
//! There is no retry logic anywhere in the crate; every failure is
//! reported once and propagated immediately.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the quote2meme library.
///
/// Per-line parse anomalies are skipped inside the parsers (logged at
/// `debug!`) rather than surfaced here.
#[derive(Debug, Error)]
pub enum Quote2MemeError {
    // ── Ingestion errors ──────────────────────────────────────────────────
    /// No registered parser claims the path's extension, or a parser's
    /// `parse` was invoked on a path its `can_ingest` rejects.
    #[error("Unsupported quote file: '{path}'\nSupported extensions: .csv, .docx, .pdf, .txt (case-sensitive).")]
    UnsupportedFormat { path: PathBuf },

    /// A recognised quote file could not be read, or its external
    /// text-extraction tool failed.
    #[error("Failed to ingest '{path}': {detail}")]
    Ingestion { path: PathBuf, detail: String },

    /// A quote was constructed with an empty body or author.
    #[error("Quote {field} must not be empty after trimming")]
    Validation { field: &'static str },

    // ── Compositing errors ────────────────────────────────────────────────
    /// The image at the given path is missing or not a decodable raster
    /// format.
    #[error("Failed to load image '{path}': {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The output directory could not be created or written.
    #[error("Failed to create output directory '{path}': {source}")]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_format_display_names_path() {
        let e = Quote2MemeError::UnsupportedFormat {
            path: PathBuf::from("quotes.dat"),
        };
        let msg = e.to_string();
        assert!(msg.contains("quotes.dat"), "got: {msg}");
        assert!(msg.contains(".csv"));
    }

    #[test]
    fn ingestion_display_carries_detail() {
        let e = Quote2MemeError::Ingestion {
            path: PathBuf::from("broken.pdf"),
            detail: "pdftotext exited with status 1".into(),
        };
        assert!(e.to_string().contains("status 1"));
    }

    #[test]
    fn validation_display_names_field() {
        let e = Quote2MemeError::Validation { field: "author" };
        assert!(e.to_string().contains("author"));
    }
}
