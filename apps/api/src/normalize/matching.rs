use serde_json::Value;

use super::{string_field, string_list, NormalizeError};
use crate::models::{CoverLetter, MatchResult};

/// Passes match fields through. `matchScore` may arrive as an integer, a float
/// or a numeric string; it is rounded and clamped to 0..=100.
pub fn normalize_match(value: &Value) -> Result<MatchResult, NormalizeError> {
    if !value.is_object() {
        return Err(NormalizeError::UnexpectedShape(
            "match analysis must be a JSON object".to_string(),
        ));
    }

    Ok(MatchResult {
        missing_keywords: string_list(value, "missingKeywords").unwrap_or_default(),
        match_score: value.get("matchScore").map(score_from).unwrap_or(0),
        advice: string_field(value, "advice").unwrap_or_default(),
    })
}

fn score_from(value: &Value) -> u8 {
    let raw = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('%').trim().parse::<f64>().ok(),
        _ => None,
    };
    raw.filter(|score| score.is_finite())
        .map(|score| score.round().clamp(0.0, 100.0) as u8)
        .unwrap_or(0)
}

pub fn normalize_cover_letter(value: &Value) -> Result<CoverLetter, NormalizeError> {
    let cover_letter = value
        .get("coverLetter")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            NormalizeError::UnexpectedShape("missing string field `coverLetter`".to_string())
        })?;

    Ok(CoverLetter {
        cover_letter: cover_letter.trim().to_string(),
    })
}
