use std::collections::HashSet;

use serde_json::Value;
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use super::{string_field, string_list, NormalizeError};
use crate::models::{JobListing, Platform};

pub const MAX_JOB_LISTINGS: usize = 8;
const LINK_DIGEST_LEN: usize = 12;
const SALARY_NOT_DISCLOSED: &str = "Not disclosed";

/// Normalizes the `jobs` array of a search response.
///
/// A missing `jobs` key is an empty result; a `jobs` value that is not an array
/// is an error. Entries that are not objects are skipped.
pub fn normalize_jobs(value: &Value) -> Result<Vec<JobListing>, NormalizeError> {
    let object = value.as_object().ok_or_else(|| {
        NormalizeError::UnexpectedShape("job search result must be a JSON object".to_string())
    })?;

    let entries = match object.get("jobs") {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(entries)) => entries,
        Some(_) => {
            return Err(NormalizeError::UnexpectedShape(
                "`jobs` must be an array".to_string(),
            ))
        }
    };

    let listings = entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            if !entry.is_object() {
                warn!("Skipping job entry {index}: not an object");
                return None;
            }
            Some(normalize_job(index, entry))
        })
        .take(MAX_JOB_LISTINGS)
        .collect();

    Ok(listings)
}

fn normalize_job(index: usize, entry: &Value) -> JobListing {
    let link = string_field(entry, "link").unwrap_or_default();
    let raw_platform = string_field(entry, "platform").unwrap_or_default();
    let platform = Platform::normalize(&raw_platform);
    if platform == Platform::Other && !raw_platform.is_empty() {
        debug!("Unrecognised platform {raw_platform:?}, listing as {}", platform.as_str());
    }
    let salary = string_field(entry, "salary")
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| SALARY_NOT_DISCLOSED.to_string());

    JobListing {
        id: job_id(index, &link),
        title: string_field(entry, "title").unwrap_or_default(),
        company: string_field(entry, "company").unwrap_or_default(),
        platform,
        link,
        salary,
        location: string_field(entry, "location").filter(|s| !s.is_empty()),
        tags: dedup_tags(string_list(entry, "tags").unwrap_or_default()),
        description: string_field(entry, "description").filter(|s| !s.is_empty()),
    }
}

/// `job-<index>-<digest>`, where the digest is a SHA-256 prefix of the link,
/// so the same listing keeps its id across requests and restarts.
pub(crate) fn job_id(index: usize, link: &str) -> String {
    let digest = hex::encode(Sha256::digest(link.as_bytes()));
    format!("job-{index}-{}", &digest[..LINK_DIGEST_LEN])
}

/// Case-insensitive dedup that keeps the first spelling and original order.
fn dedup_tags(tags: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    tags.into_iter()
        .filter(|tag| seen.insert(tag.to_lowercase()))
        .collect()
}
