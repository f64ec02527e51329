//! PDF text extraction via the embedded text layer.
//!
//! Handles digital PDFs only. Scanned pages have no text layer and come
//! back as empty strings rather than errors; the analyzers treat empty
//! text as a valid "no signal" input.

use super::ExtractionError;

/// Extract the concatenated text of every page.
pub fn extract_pdf_text(pdf_bytes: &[u8]) -> Result<String, ExtractionError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(pdf_bytes)
        .map_err(|e| ExtractionError::PdfParsing(e.to_string()))?;
    Ok(pages.join("\n"))
}
