//! Report text extraction.
//!
//! Turns a source document into the raw text payload the analyzers read.
//! Digital PDFs go through the embedded text layer; everything else is
//! treated as UTF-8 plain text. Extraction either succeeds or fails with
//! an [`ExtractionError`]; the caller decides how to degrade.

pub mod pdf;

use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF parsing failed: {0}")]
    PdfParsing(String),

    #[error("Text encoding error: {0}")]
    Encoding(String),
}

/// Extract the raw text of a report document.
pub fn extract_text(path: &Path) -> Result<String, ExtractionError> {
    let bytes = std::fs::read(path)?;
    if is_pdf(path, &bytes) {
        pdf::extract_pdf_text(&bytes)
    } else {
        String::from_utf8(bytes).map_err(|e| ExtractionError::Encoding(e.to_string()))
    }
}

/// A document counts as PDF on either signal: magic bytes or extension.
/// Magic bytes win for extensionless uploads, the extension covers PDFs
/// with leading junk before the header.
fn is_pdf(path: &Path, bytes: &[u8]) -> bool {
    bytes.starts_with(b"%PDF-")
        || path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}
