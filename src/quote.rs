//! The normalised quote value type.
//!
//! Every source format — plain text, CSV, DOCX, PDF — funnels into
//! [`Quote`]. Construction is the single validation point: both fields
//! are trimmed and must be non-empty afterwards, so a `Quote` in hand is
//! always displayable. The type is a value object; fields are private and
//! there is no mutation after construction.

use crate::error::Quote2MemeError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A quotation: the text itself and who said it.
///
/// # Example
/// ```rust
/// use quote2meme::Quote;
///
/// let q = Quote::new("To bork or not to bork", "Bork").unwrap();
/// assert_eq!(q.to_string(), r#""To bork or not to bork" - Bork"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    body: String,
    author: String,
}

impl Quote {
    /// Create a quote, trimming surrounding whitespace from both fields.
    ///
    /// # Errors
    /// Returns [`Quote2MemeError::Validation`] if either field is empty
    /// after trimming.
    pub fn new(body: impl AsRef<str>, author: impl AsRef<str>) -> Result<Self, Quote2MemeError> {
        let body = body.as_ref().trim();
        let author = author.as_ref().trim();

        if body.is_empty() {
            return Err(Quote2MemeError::Validation { field: "body" });
        }
        if author.is_empty() {
            return Err(Quote2MemeError::Validation { field: "author" });
        }

        Ok(Self {
            body: body.to_string(),
            author: author.to_string(),
        })
    }

    /// The text of the quotation.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Who said it.
    pub fn author(&self) -> &str {
        &self.author
    }
}

impl fmt::Display for Quote {
    /// Canonical form: `"body" - author`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" - {}", self.body, self.author)
    }
}
