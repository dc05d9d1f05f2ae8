//! Text extraction from uploaded document bytes

use crate::error::{Error, Result};
use crate::types::Page;

/// External-collaborator seam for turning raw file bytes into ordered
/// pages of text. Extraction failures are ingestion errors, never
/// retrieval errors.
pub trait DocumentExtractor: Send + Sync {
    /// Extract ordered pages from raw bytes. `filename` is used for error
    /// reporting only.
    fn extract(&self, filename: &str, data: &[u8]) -> Result<Vec<Page>>;
}

/// PDF extractor backed by lopdf, with a whole-document pdf-extract
/// fallback for files lopdf cannot read page by page.
pub struct PdfExtractor;

impl PdfExtractor {
    /// Extract text page by page with lopdf
    fn extract_by_pages(filename: &str, data: &[u8]) -> Result<Vec<Page>> {
        let doc = lopdf::Document::load_mem(data)
            .map_err(|e| Error::extraction(filename, format!("Failed to load PDF: {}", e)))?;

        let mut pages = Vec::new();
        for (page_number, _object_id) in doc.get_pages() {
            match doc.extract_text(&[page_number]) {
                Ok(text) => pages.push(Page::new(page_number, clean_page_text(&text))),
                Err(e) => {
                    tracing::debug!("No text on page {} of '{}': {}", page_number, filename, e);
                    pages.push(Page::new(page_number, String::new()));
                }
            }
        }

        Ok(pages)
    }

    /// Whole-document extraction with pdf-extract, treated as one page
    fn extract_whole(filename: &str, data: &[u8]) -> Result<Vec<Page>> {
        let text = pdf_extract::extract_text_from_mem(data)
            .map_err(|e| Error::extraction(filename, format!("PDF extraction failed: {}", e)))?;
        Ok(vec![Page::new(1, clean_page_text(&text))])
    }
}

impl DocumentExtractor for PdfExtractor {
    fn extract(&self, filename: &str, data: &[u8]) -> Result<Vec<Page>> {
        if data.is_empty() {
            return Err(Error::extraction(filename, "empty file"));
        }

        let pages = match Self::extract_by_pages(filename, data) {
            Ok(pages) if pages.iter().any(|p| !p.raw_text.trim().is_empty()) => pages,
            Ok(_) => {
                tracing::warn!(
                    "Page-level extraction of '{}' produced no text, trying whole-document fallback",
                    filename
                );
                Self::extract_whole(filename, data)?
            }
            Err(e) => {
                tracing::warn!("lopdf failed on '{}' ({}), trying pdf-extract fallback", filename, e);
                Self::extract_whole(filename, data)?
            }
        };

        if pages.iter().all(|p| p.raw_text.trim().is_empty()) {
            return Err(Error::extraction(
                filename,
                "no text content could be extracted; the PDF may be image-based or encrypted",
            ));
        }

        Ok(pages)
    }
}

/// Strip null bytes and collapse leading/trailing line whitespace while
/// preserving blank-line paragraph boundaries for the chunker.
fn clean_page_text(text: &str) -> String {
    text.replace('\0', "")
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}
