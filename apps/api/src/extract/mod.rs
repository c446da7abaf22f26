//! Text extraction: turns an uploaded resume into plain text.
//!
//! Dispatch order: PDF → DOCX → legacy `.doc` (rejected) → text with encoding fallback.
//! Pure computation: no disk or network I/O. Callers on the async runtime should
//! run `extract` through `spawn_blocking`, PDF parsing can take a while.

use bytes::Bytes;
use thiserror::Error;
use tracing::{info, warn};

mod docx;
mod pdf;
mod text;

#[cfg(test)]
pub(crate) use pdf::test_support::single_page_pdf;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

pub const IMAGE_ONLY_PDF_SENTINEL: &str =
    "[PDF contains no extractable text - may be image-based]";
pub const EMPTY_DOCUMENT_SENTINEL: &str = "[Document contains no extractable text]";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("{0}")]
    UnsupportedFormat(String),

    #[error("{0}")]
    ExtractionFailed(String),
}

/// A file received in a multipart upload. Lives for one request only.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub content: Bytes,
    pub filename: String,
    pub mime_type: Option<String>,
}

/// Result of a successful extraction.
///
/// The two sentinel variants mean "parsed fine, but nothing to read", as opposed
/// to an `ExtractError`, which means the parser could not process the bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractedText {
    Content(String),
    ImageOnlyPdf,
    EmptyDocument,
}

impl ExtractedText {
    pub fn as_str(&self) -> &str {
        match self {
            ExtractedText::Content(text) => text,
            ExtractedText::ImageOnlyPdf => IMAGE_ONLY_PDF_SENTINEL,
            ExtractedText::EmptyDocument => EMPTY_DOCUMENT_SENTINEL,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        !matches!(self, ExtractedText::Content(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocumentFormat {
    Pdf,
    Docx,
    LegacyDoc,
    Text,
}

fn detect_format(filename: &str, mime_type: Option<&str>) -> DocumentFormat {
    let filename = filename.to_lowercase();

    if filename.ends_with(".pdf") || mime_type == Some(PDF_MIME) {
        DocumentFormat::Pdf
    } else if filename.ends_with(".docx") || mime_type == Some(DOCX_MIME) {
        DocumentFormat::Docx
    } else if filename.ends_with(".doc") {
        DocumentFormat::LegacyDoc
    } else {
        // .txt, .md, .markdown and anything unrecognised
        DocumentFormat::Text
    }
}

/// Extracts plain text from an uploaded document.
pub fn extract(document: &UploadedDocument) -> Result<ExtractedText, ExtractError> {
    let filename = document.filename.as_str();

    match detect_format(filename, document.mime_type.as_deref()) {
        DocumentFormat::Pdf => {
            info!("Parsing PDF resume: {filename}");
            pdf::extract_pdf(&document.content)
        }
        DocumentFormat::Docx => {
            info!("Parsing DOCX resume: {filename}");
            docx::extract_docx(&document.content)
        }
        DocumentFormat::LegacyDoc => {
            warn!("Legacy .doc format detected: {filename}");
            Err(ExtractError::UnsupportedFormat(
                "Legacy .doc format not supported. Please convert to .docx or .pdf".to_string(),
            ))
        }
        DocumentFormat::Text => {
            info!("Parsing text resume: {filename}");
            let decoded = text::decode_text(&document.content);
            if decoded.is_empty() {
                warn!("Text upload is empty: {filename}");
                return Ok(ExtractedText::EmptyDocument);
            }
            Ok(ExtractedText::Content(decoded))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(content: &[u8], filename: &str, mime_type: Option<&str>) -> UploadedDocument {
        UploadedDocument {
            content: Bytes::copy_from_slice(content),
            filename: filename.to_string(),
            mime_type: mime_type.map(String::from),
        }
    }

    #[test]
    fn test_detect_format_by_extension_is_case_insensitive() {
        assert_eq!(detect_format("CV.PDF", None), DocumentFormat::Pdf);
        assert_eq!(detect_format("cv.Docx", None), DocumentFormat::Docx);
        assert_eq!(detect_format("cv.DOC", None), DocumentFormat::LegacyDoc);
        assert_eq!(detect_format("cv.md", None), DocumentFormat::Text);
        assert_eq!(detect_format("cv", None), DocumentFormat::Text);
    }

    #[test]
    fn test_detect_format_by_mime_type() {
        assert_eq!(detect_format("upload", Some(PDF_MIME)), DocumentFormat::Pdf);
        assert_eq!(detect_format("upload", Some(DOCX_MIME)), DocumentFormat::Docx);
        assert_eq!(
            detect_format("resume.txt", Some("text/plain")),
            DocumentFormat::Text
        );
    }

    #[test]
    fn test_legacy_doc_is_always_rejected() {
        for content in [&b""[..], b"plain text", b"\xD0\xCF\x11\xE0\xA1\xB1\x1A\xE1"] {
            let err = extract(&upload(content, "resume.doc", Some("application/msword")))
                .unwrap_err();
            match err {
                ExtractError::UnsupportedFormat(msg) => assert!(msg.contains(".docx")),
                other => panic!("expected UnsupportedFormat, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_text_file_is_decoded() {
        let result = extract(&upload(
            "  John Doe\nSenior Engineer  ".as_bytes(),
            "resume.txt",
            Some("text/plain"),
        ))
        .unwrap();
        assert_eq!(result, ExtractedText::Content("John Doe\nSenior Engineer".into()));
        assert!(!result.is_sentinel());
    }

    #[test]
    fn test_blank_text_file_is_empty_document() {
        for content in [&b""[..], b"   \n\t  "] {
            let result = extract(&upload(content, "resume.txt", Some("text/plain"))).unwrap();
            assert_eq!(result, ExtractedText::EmptyDocument);
        }
    }

    #[test]
    fn test_unknown_extension_falls_back_to_text() {
        let result = extract(&upload(b"# Jane\n\nRust, Go", "resume.rtfx", None)).unwrap();
        assert_eq!(result.as_str(), "# Jane\n\nRust, Go");
    }

    #[test]
    fn test_corrupt_pdf_fails_extraction() {
        let err = extract(&upload(b"definitely not a pdf", "resume.pdf", None)).unwrap_err();
        assert!(matches!(err, ExtractError::ExtractionFailed(_)));
    }

    #[test]
    fn test_sentinels_render_fixed_strings() {
        assert_eq!(ExtractedText::ImageOnlyPdf.as_str(), IMAGE_ONLY_PDF_SENTINEL);
        assert_eq!(ExtractedText::EmptyDocument.as_str(), EMPTY_DOCUMENT_SENTINEL);
        assert!(ExtractedText::ImageOnlyPdf.is_sentinel());
    }
}
