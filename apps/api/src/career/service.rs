//! Career service: one pipeline per use case:
//! build prompt → one model call → normalize.
//!
//! Stateless: every function takes the model client by reference and touches
//! nothing else.

use tracing::{debug, info};

use crate::career::prompts::{
    build_cover_letter_prompt, build_match_prompt, build_profile_prompt, build_search_query,
    ANALYSIS_TEMPERATURE, COVER_LETTER_SYSTEM, COVER_LETTER_TEMPERATURE, JOB_SEARCH_SYSTEM,
    MATCH_SYSTEM, PROFILE_SYSTEM,
};
use crate::errors::AppError;
use crate::llm_client::{CompletionRequest, ModelClient, Task};
use crate::models::{CandidateProfile, CoverLetter, JobListing, MatchResult};
use crate::normalize::{
    normalize_cover_letter, normalize_jobs, normalize_match, normalize_profile, parse_model_json,
};

/// Criteria for a job search, with the location already resolved.
#[derive(Debug, Clone)]
pub struct SearchCriteria<'a> {
    pub roles: &'a [String],
    pub skills: &'a [String],
    pub location: &'a str,
}

async fn complete_json(
    model: &dyn ModelClient,
    request: CompletionRequest,
) -> Result<serde_json::Value, AppError> {
    let raw = model.complete(&request).await?;
    parse_model_json(&raw).map_err(|e| {
        debug!("Raw {:?} response: {raw}", request.task);
        AppError::InvalidModelOutput(e)
    })
}

/// Extracts a candidate profile. Parse failures are fatal for this request.
pub async fn analyze_resume(
    model: &dyn ModelClient,
    resume_text: &str,
) -> Result<CandidateProfile, AppError> {
    info!("Analyzing resume content...");

    let value = complete_json(
        model,
        CompletionRequest {
            task: Task::Profile,
            system: PROFILE_SYSTEM,
            prompt: build_profile_prompt(resume_text),
            temperature: Some(ANALYSIS_TEMPERATURE),
            json_mode: true,
            web_search: false,
        },
    )
    .await?;

    let profile = normalize_profile(&value)?;
    info!("Successfully analyzed resume for: {}", profile.name);
    Ok(profile)
}

/// Searches for job listings. The handler degrades any error here to `[]`.
pub async fn search_jobs(
    model: &dyn ModelClient,
    criteria: &SearchCriteria<'_>,
) -> Result<Vec<JobListing>, AppError> {
    info!(
        "Searching jobs for roles: {:?}, location: {}",
        criteria.roles, criteria.location
    );

    let value = complete_json(
        model,
        CompletionRequest {
            task: Task::JobSearch,
            system: JOB_SEARCH_SYSTEM,
            prompt: build_search_query(criteria.roles, criteria.skills, criteria.location),
            temperature: None,
            json_mode: false,
            web_search: true,
        },
    )
    .await?;

    let jobs = normalize_jobs(&value)?;
    info!("Found {} job listings", jobs.len());
    Ok(jobs)
}

pub async fn analyze_match(
    model: &dyn ModelClient,
    resume_text: &str,
    job_description: &str,
) -> Result<MatchResult, AppError> {
    info!("Analyzing job match...");

    let value = complete_json(
        model,
        CompletionRequest {
            task: Task::JobMatch,
            system: MATCH_SYSTEM,
            prompt: build_match_prompt(resume_text, job_description),
            temperature: Some(ANALYSIS_TEMPERATURE),
            json_mode: true,
            web_search: false,
        },
    )
    .await?;

    Ok(normalize_match(&value)?)
}

pub async fn generate_cover_letter(
    model: &dyn ModelClient,
    resume_text: &str,
    job_description: &str,
) -> Result<CoverLetter, AppError> {
    info!("Generating cover letter...");

    let value = complete_json(
        model,
        CompletionRequest {
            task: Task::CoverLetter,
            system: COVER_LETTER_SYSTEM,
            prompt: build_cover_letter_prompt(resume_text, job_description),
            temperature: Some(COVER_LETTER_TEMPERATURE),
            json_mode: true,
            web_search: false,
        },
    )
    .await?;

    Ok(normalize_cover_letter(&value)?)
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::llm_client::{CompletionRequest, LlmError, ModelClient};

    /// Replays a fixed answer and records every request it receives.
    #[derive(Default)]
    pub struct FixtureModelClient {
        response: Option<String>,
        pub requests: Mutex<Vec<CompletionRequest>>,
    }

    impl FixtureModelClient {
        pub fn replying(response: &str) -> Self {
            Self {
                response: Some(response.to_string()),
                requests: Mutex::new(Vec::new()),
            }
        }

        /// Every call fails as if the API were unreachable.
        pub fn failing() -> Self {
            Self::default()
        }

        pub fn call_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }

        pub fn last_request(&self) -> CompletionRequest {
            self.requests.lock().unwrap().last().cloned().unwrap()
        }
    }

    #[async_trait]
    impl ModelClient for FixtureModelClient {
        async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
            self.requests.lock().unwrap().push(request.clone());
            self.response.clone().ok_or(LlmError::Api {
                status: 503,
                message: "service unavailable".to_string(),
            })
        }

        fn model_name(&self) -> &str {
            "fixture"
        }
    }
}
