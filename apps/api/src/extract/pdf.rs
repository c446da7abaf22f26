use std::panic;

use tracing::{error, warn};

use super::{ExtractError, ExtractedText};

const PAGE_SEPARATOR: &str = "\n\n";

/// Extracts text page by page. A PDF that parses but yields no text (scanned
/// images) is reported as `ImageOnlyPdf`, not as an error.
pub(super) fn extract_pdf(content: &[u8]) -> Result<ExtractedText, ExtractError> {
    // pdf-extract panics on some malformed inputs instead of returning an error.
    let pages = panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(content))
        .map_err(|_| {
            error!("PDF parser panicked");
            ExtractError::ExtractionFailed("Failed to parse PDF: malformed document".to_string())
        })?
        .map_err(|e| {
            error!("Error extracting PDF text: {e}");
            ExtractError::ExtractionFailed(format!("Failed to parse PDF: {e}"))
        })?;

    let text = join_pages(&pages);
    if text.is_empty() {
        warn!("PDF appears to be empty or contains only images");
        return Ok(ExtractedText::ImageOnlyPdf);
    }

    Ok(ExtractedText::Content(text))
}

fn join_pages(pages: &[String]) -> String {
    pages
        .iter()
        .map(|page| page.trim())
        .filter(|page| !page.is_empty())
        .collect::<Vec<_>>()
        .join(PAGE_SEPARATOR)
}
