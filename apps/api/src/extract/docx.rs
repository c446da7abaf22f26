use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::{error, warn};
use zip::ZipArchive;

use super::{ExtractError, ExtractedText};

const DOCUMENT_PART: &str = "word/document.xml";
const CELL_SEPARATOR: &str = " | ";

/// Extracts body paragraphs followed by table rows from a DOCX container.
pub(super) fn extract_docx(content: &[u8]) -> Result<ExtractedText, ExtractError> {
    let xml = read_document_part(content).map_err(|e| {
        error!("Error extracting DOCX text: {e}");
        ExtractError::ExtractionFailed(format!("Failed to parse DOCX: {e}"))
    })?;

    let parsed = parse_document_xml(&xml).map_err(|e| {
        error!("Error extracting DOCX text: {e}");
        ExtractError::ExtractionFailed(format!("Failed to parse DOCX: {e}"))
    })?;

    let text = parsed
        .paragraphs
        .into_iter()
        .chain(parsed.table_rows)
        .collect::<Vec<_>>()
        .join("\n");
    let text = text.trim();

    if text.is_empty() {
        warn!("DOCX appears to be empty");
        return Ok(ExtractedText::EmptyDocument);
    }

    Ok(ExtractedText::Content(text.to_string()))
}

fn read_document_part(content: &[u8]) -> anyhow::Result<String> {
    let mut archive = ZipArchive::new(Cursor::new(content))?;
    let mut part = archive.by_name(DOCUMENT_PART)?;
    let mut xml = String::new();
    part.read_to_string(&mut xml)?;
    Ok(xml)
}

#[derive(Debug, Default)]
struct ParsedDocument {
    /// Non-blank paragraphs outside any table, in document order.
    paragraphs: Vec<String>,
    /// One line per non-blank top-level table row, cells joined with " | ".
    table_rows: Vec<String>,
}

/// Walks WordprocessingML. Nested tables are flattened into their parent cell.
fn parse_document_xml(xml: &str) -> anyhow::Result<ParsedDocument> {
    let mut reader = Reader::from_str(xml);
    let mut parsed = ParsedDocument::default();

    let mut table_depth = 0usize;
    let mut in_run = false;
    let mut in_text = false;
    let mut paragraph = String::new();
    let mut cell = String::new();
    let mut row: Vec<String> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"tbl" => table_depth += 1,
                b"tr" if table_depth == 1 => row.clear(),
                b"tc" if table_depth == 1 => cell.clear(),
                b"p" => paragraph.clear(),
                b"r" => in_run = true,
                b"t" => in_text = true,
                _ => {}
            },
            Event::End(e) => match e.local_name().as_ref() {
                b"tbl" => table_depth = table_depth.saturating_sub(1),
                b"tr" if table_depth == 1 => {
                    let line = row
                        .iter()
                        .map(|c| c.trim())
                        .filter(|c| !c.is_empty())
                        .collect::<Vec<_>>()
                        .join(CELL_SEPARATOR);
                    if !line.is_empty() {
                        parsed.table_rows.push(line);
                    }
                }
                b"tc" if table_depth == 1 => row.push(std::mem::take(&mut cell)),
                b"p" if table_depth == 0 => {
                    if !paragraph.trim().is_empty() {
                        parsed.paragraphs.push(std::mem::take(&mut paragraph));
                    }
                }
                b"p" => {
                    if !cell.is_empty() {
                        cell.push('\n');
                    }
                    cell.push_str(&paragraph);
                }
                b"r" => in_run = false,
                b"t" => in_text = false,
                _ => {}
            },
            Event::Empty(e) if in_run => match e.local_name().as_ref() {
                b"tab" => paragraph.push('\t'),
                b"br" | b"cr" => paragraph.push('\n'),
                _ => {}
            },
            Event::Text(e) if in_text => paragraph.push_str(&e.unescape()?),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(parsed)
}
