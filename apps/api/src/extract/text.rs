use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8, WINDOWS_1252};
use tracing::{debug, warn};

/// Encodings tried in order. Every decoder is strict: it either reproduces the
/// text exactly or declines.
const FALLBACK_ENCODINGS: &[TextEncoding] = &[
    TextEncoding::Utf8,
    TextEncoding::Utf16,
    TextEncoding::Latin1,
    TextEncoding::Windows1252,
];

/// Bytes with no mapping in Windows-1252.
const WINDOWS_1252_UNDEFINED: &[u8] = &[0x81, 0x8D, 0x8F, 0x90, 0x9D];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextEncoding {
    Utf8,
    Utf16,
    Latin1,
    Windows1252,
}

impl TextEncoding {
    fn decode<'a>(&self, bytes: &'a [u8]) -> Option<Cow<'a, str>> {
        match self {
            TextEncoding::Utf8 => {
                let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
                UTF_8.decode_without_bom_handling_and_without_replacement(bytes)
            }
            // Without a BOM any even-length byte string "decodes" as UTF-16,
            // so only trust it when the file says so.
            TextEncoding::Utf16 => match Encoding::for_bom(bytes) {
                Some((encoding, bom_len)) if encoding == UTF_16LE || encoding == UTF_16BE => {
                    encoding.decode_without_bom_handling_and_without_replacement(&bytes[bom_len..])
                }
                _ => None,
            },
            // C1 controls never appear in real text; their presence means Windows-1252.
            TextEncoding::Latin1 => {
                if bytes.iter().any(|b| (0x80..=0x9F).contains(b)) {
                    None
                } else {
                    Some(encoding_rs::mem::decode_latin1(bytes))
                }
            }
            TextEncoding::Windows1252 => {
                if bytes.iter().any(|b| WINDOWS_1252_UNDEFINED.contains(b)) {
                    return None;
                }
                let (decoded, had_errors) = WINDOWS_1252.decode_without_bom_handling(bytes);
                (!had_errors).then_some(decoded)
            }
        }
    }
}

/// Decodes a plain-text upload. Never fails: when no encoding fits, invalid
/// bytes are replaced with U+FFFD.
pub(super) fn decode_text(bytes: &[u8]) -> String {
    for encoding in FALLBACK_ENCODINGS {
        if let Some(text) = encoding.decode(bytes) {
            debug!("Decoded text upload as {encoding:?}");
            return text.trim().to_string();
        }
    }

    warn!("No encoding matched text upload, decoding lossily");
    let (text, _, _) = UTF_8.decode(bytes);
    text.trim().to_string()
}
