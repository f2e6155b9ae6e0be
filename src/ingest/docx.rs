//! DOCX quote files: one quote per paragraph, `body - author`.
//!
//! A DOCX file is a ZIP archive whose main content lives in
//! `word/document.xml`. The only structure this parser needs is the
//! paragraph: text runs (`<w:t>`) are concatenated per `<w:p>` element and
//! each completed paragraph goes through the shared last-occurrence split.
//! Styling, numbering, tables, and everything else Word stores are
//! irrelevant to the `body - author` convention and are ignored.

use super::{ensure_claimed, split_quote_line, QuoteParser};
use crate::error::Quote2MemeError;
use crate::quote::Quote;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;
use zip::ZipArchive;

/// Parser for `.docx` files.
pub struct DocxParser;

impl QuoteParser for DocxParser {
    fn can_ingest(&self, path: &Path) -> bool {
        super::has_extension(path, "docx")
    }

    fn parse(&self, path: &Path) -> Result<Vec<Quote>, Quote2MemeError> {
        ensure_claimed(self, path)?;

        let ingestion_err = |detail: String| Quote2MemeError::Ingestion {
            path: path.to_path_buf(),
            detail,
        };

        let file = File::open(path).map_err(|e| ingestion_err(e.to_string()))?;
        let mut archive = ZipArchive::new(file).map_err(|e| ingestion_err(e.to_string()))?;

        let xml_content = {
            let mut document_xml = archive
                .by_name("word/document.xml")
                .map_err(|e| ingestion_err(format!("missing word/document.xml: {e}")))?;
            let mut content = String::new();
            document_xml
                .read_to_string(&mut content)
                .map_err(|e| ingestion_err(e.to_string()))?;
            content
        };

        let paragraphs = extract_paragraphs(&xml_content).map_err(ingestion_err)?;
        let quotes: Vec<Quote> = paragraphs
            .iter()
            .filter_map(|p| split_quote_line(p))
            .collect();

        debug!("parsed {} quotes from {}", quotes.len(), path.display());
        Ok(quotes)
    }
}

/// Walk `word/document.xml` and return the text of each paragraph.
///
/// Text is captured only inside `<w:t>` elements so inter-tag whitespace
/// (pretty-printed XML) never leaks into paragraph text.
fn extract_paragraphs(xml: &str) -> Result<Vec<String>, String> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();

    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => in_text_run = true,
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => paragraphs.push(std::mem::take(&mut current)),
                _ => {}
            },
            Ok(Event::Text(t)) if in_text_run => {
                let text = t.unescape().map_err(|e| e.to_string())?;
                current.push_str(&text);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(format!("malformed document.xml: {e}")),
        }
        buf.clear();
    }

    Ok(paragraphs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claims_only_exact_lowercase_docx() {
        let p = DocxParser;
        assert!(p.can_ingest(Path::new("quotes.docx")));
        assert!(!p.can_ingest(Path::new("quotes.DOCX")));
        assert!(!p.can_ingest(Path::new("quotes.doc")));
    }

    #[test]
    fn parse_rejects_unclaimed_path() {
        let err = DocxParser.parse(Path::new("quotes.txt")).unwrap_err();
        assert!(matches!(err, Quote2MemeError::UnsupportedFormat { .. }));
    }

    #[test]
    fn paragraph_text_spans_multiple_runs() {
        let xml = r#"<w:document><w:body>
            <w:p><w:r><w:t>Bark like </w:t></w:r><w:r><w:t>no one is listening - Rex</w:t></w:r></w:p>
            <w:p><w:r><w:t>no attribution paragraph</w:t></w:r></w:p>
        </w:body></w:document>"#;
        let paragraphs = extract_paragraphs(xml).unwrap();
        assert_eq!(paragraphs.len(), 2);
        assert_eq!(paragraphs[0], "Bark like no one is listening - Rex");
    }

    #[test]
    fn entities_are_unescaped() {
        let xml = "<w:document><w:body><w:p><w:r><w:t>Treats &amp; naps - Fluffles</w:t></w:r></w:p></w:body></w:document>";
        let paragraphs = extract_paragraphs(xml).unwrap();
        assert_eq!(paragraphs[0], "Treats & naps - Fluffles");
    }

    #[test]
    fn not_a_zip_is_an_ingestion_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotes.docx");
        std::fs::write(&path, b"plain bytes, not a zip").unwrap();
        let err = DocxParser.parse(&path).unwrap_err();
        assert!(matches!(err, Quote2MemeError::Ingestion { .. }));
    }
}
