use serde::{Deserialize, Serialize};

/// Resume/job compatibility analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub missing_keywords: Vec<String>,
    /// Always within 0..=100.
    pub match_score: u8,
    pub advice: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetter {
    pub cover_letter: String,
}
