use serde::{Deserialize, Serialize};

/// Structured summary of a resume, produced once per analyze-resume request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    pub name: String,
    pub summary: String,
    /// 6 to 10 entries expected; not enforced.
    pub skills: Vec<String>,
    /// 3 entries expected; not enforced.
    pub suggested_roles: Vec<String>,
}
