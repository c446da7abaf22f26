//! Model response normalization: turns loosely structured model output into typed results.
//!
//! Every payload goes through `parse_model_json` first, then through one of the
//! per-use-case normalizers. Nothing downstream reads raw model JSON.

use serde_json::Value;
use thiserror::Error;

mod jobs;
mod matching;
mod profile;

pub use jobs::normalize_jobs;
pub use matching::{normalize_cover_letter, normalize_match};
pub use profile::normalize_profile;

const FENCE: &str = "```";

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("model output is not valid JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("model output has unexpected shape: {0}")]
    UnexpectedShape(String),
}

/// Returns the content of the first fenced block, or the whole text when there is none.
///
/// Handles a language label on the opening fence (```json) and a missing closing fence.
pub fn strip_code_fence(text: &str) -> &str {
    let Some(open) = text.find(FENCE) else {
        return text.trim();
    };
    let mut inner = &text[open + FENCE.len()..];

    // Drop a language label such as `json` sitting on the fence line.
    let label_len = inner
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(inner.len());
    if label_len > 0 && inner[label_len..].starts_with(&['\n', '\r', ' '][..]) {
        inner = &inner[label_len..];
    }

    match inner.find(FENCE) {
        Some(close) => inner[..close].trim(),
        None => inner.trim(),
    }
}

/// Strips fences and parses the remainder as JSON.
pub fn parse_model_json(text: &str) -> Result<Value, NormalizeError> {
    Ok(serde_json::from_str(strip_code_fence(text))?)
}

/// Reads `key` as a list of strings. Non-string members are dropped; a missing
/// or non-array value yields `None`.
pub(crate) fn string_list(value: &Value, key: &str) -> Option<Vec<String>> {
    value.get(key).and_then(Value::as_array).map(|items| {
        items
            .iter()
            .filter_map(Value::as_str)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    })
}

pub(crate) fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(|s| s.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_labeled_fence() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_code_fence(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_unlabeled_fence() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_code_fence(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_no_fence_is_trimmed() {
        assert_eq!(strip_code_fence("  {\"a\": 1}\n"), "{\"a\": 1}");
    }

    #[test]
    fn test_fence_after_preamble_uses_first_block() {
        let input =
            "Here are the jobs I found:\n```json\n{\"jobs\": []}\n```\nand a second ```{}```";
        assert_eq!(strip_code_fence(input), "{\"jobs\": []}");
    }

    #[test]
    fn test_unclosed_fence_takes_rest() {
        assert_eq!(strip_code_fence("```json\n{\"a\": 1}"), "{\"a\": 1}");
    }

    #[test]
    fn test_fence_on_single_line_keeps_payload() {
        assert_eq!(strip_code_fence("```{\"a\": 1}```"), "{\"a\": 1}");
    }

    #[test]
    fn test_parse_model_json_accepts_fenced_and_bare() {
        let fenced = parse_model_json("```json\n{\"name\": \"Ada\"}\n```").unwrap();
        let bare = parse_model_json("{\"name\": \"Ada\"}").unwrap();
        assert_eq!(fenced, bare);
    }

    #[test]
    fn test_parse_model_json_rejects_prose() {
        let err = parse_model_json("Sorry, I could not find any jobs.").unwrap_err();
        assert!(matches!(err, NormalizeError::MalformedJson(_)));
    }

    #[test]
    fn test_string_list_drops_non_strings() {
        let value = serde_json::json!({"skills": ["Rust", 3, " ", null, " Go "]});
        assert_eq!(
            string_list(&value, "skills"),
            Some(vec!["Rust".to_string(), "Go".to_string()])
        );
        assert_eq!(string_list(&value, "missing"), None);
    }
}
