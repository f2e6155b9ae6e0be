//! Plain-text quote files: one quote per line, `body - author`.

use super::{ensure_claimed, split_quote_line, QuoteParser};
use crate::error::Quote2MemeError;
use crate::quote::Quote;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Parser for `.txt` files.
pub struct TxtParser;

impl QuoteParser for TxtParser {
    fn can_ingest(&self, path: &Path) -> bool {
        super::has_extension(path, "txt")
    }

    fn parse(&self, path: &Path) -> Result<Vec<Quote>, Quote2MemeError> {
        ensure_claimed(self, path)?;

        let content = fs::read_to_string(path).map_err(|e| Quote2MemeError::Ingestion {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })?;

        let quotes: Vec<Quote> = content.lines().filter_map(split_quote_line).collect();
        debug!("parsed {} quotes from {}", quotes.len(), path.display());
        Ok(quotes)
    }
}
