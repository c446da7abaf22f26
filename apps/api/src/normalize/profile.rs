use serde_json::Value;
use tracing::warn;

use super::{string_field, string_list, NormalizeError};
use crate::models::CandidateProfile;

const UNKNOWN: &str = "Unknown";

/// Fills missing profile fields with defaults instead of failing the request.
/// A wrong-typed field counts as missing.
pub fn normalize_profile(value: &Value) -> Result<CandidateProfile, NormalizeError> {
    if !value.is_object() {
        return Err(NormalizeError::UnexpectedShape(
            "profile must be a JSON object".to_string(),
        ));
    }

    let name = string_field(value, "name").unwrap_or_else(|| {
        warn!("Missing field in profile: name");
        UNKNOWN.to_string()
    });
    let summary = string_field(value, "summary").unwrap_or_else(|| {
        warn!("Missing field in profile: summary");
        UNKNOWN.to_string()
    });
    let skills = string_list(value, "skills").unwrap_or_else(|| {
        warn!("Missing field in profile: skills");
        Vec::new()
    });
    let suggested_roles = string_list(value, "suggestedRoles").unwrap_or_else(|| {
        warn!("Missing field in profile: suggestedRoles");
        Vec::new()
    });

    Ok(CandidateProfile {
        name,
        summary,
        skills,
        suggested_roles,
    })
}
