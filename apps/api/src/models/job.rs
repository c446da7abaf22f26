use serde::{Deserialize, Serialize};

/// Job board a listing was found on. Free-text platform names from the model
/// are bucketed into these via `Platform::normalize`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "104")]
    Tw104,
    #[serde(rename = "1111")]
    Tw1111,
    CakeResume,
    LinkedIn,
    Indeed,
    #[default]
    Other,
}

impl Platform {
    #[cfg(test)]
    pub const ALL: [Platform; 6] = [
        Platform::Tw104,
        Platform::Tw1111,
        Platform::CakeResume,
        Platform::LinkedIn,
        Platform::Indeed,
        Platform::Other,
    ];

    /// Case-insensitive substring match, first pattern wins.
    pub fn normalize(raw: &str) -> Self {
        let raw = raw.to_lowercase();
        if raw.contains("104") {
            Platform::Tw104
        } else if raw.contains("1111") {
            Platform::Tw1111
        } else if raw.contains("cake") {
            Platform::CakeResume
        } else if raw.contains("linkedin") {
            Platform::LinkedIn
        } else if raw.contains("indeed") {
            Platform::Indeed
        } else {
            Platform::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Tw104 => "104",
            Platform::Tw1111 => "1111",
            Platform::CakeResume => "CakeResume",
            Platform::LinkedIn => "LinkedIn",
            Platform::Indeed => "Indeed",
            Platform::Other => "Other",
        }
    }
}

/// One discovered job posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobListing {
    pub id: String,
    pub title: String,
    pub company: String,
    pub platform: Platform,
    pub link: String,
    pub salary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body of `POST /api/search-jobs`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobSearchRequest {
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
}
