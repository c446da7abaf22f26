//! Axum route handlers for the career API.

use axum::{
    extract::{multipart::MultipartError, rejection::JsonRejection, Multipart, State},
    http::StatusCode,
    Json,
};
use tracing::{error, info, warn};

use crate::career::service::{
    analyze_match, analyze_resume, generate_cover_letter, search_jobs, SearchCriteria,
};
use crate::errors::AppError;
use crate::extract::{extract, UploadedDocument};
use crate::models::{CandidateProfile, CoverLetter, JobListing, JobSearchRequest, MatchResult};
use crate::state::AppState;

const FILE_FIELD: &str = "file";
const JOB_DESCRIPTION_FIELD: &str = "jobDescription";

/// Below this many characters an upload is not treated as a resume.
const MIN_RESUME_CHARS: usize = 50;

const NO_MEANINGFUL_CONTENT: &str =
    "Could not extract meaningful content from the file. Please ensure it's a valid resume.";

// ────────────────────────────────────────────────────────────────────────────
// Multipart helpers
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct UploadForm {
    file: Option<UploadedDocument>,
    job_description: Option<String>,
}

impl UploadForm {
    async fn read(mut multipart: Multipart, max_upload_bytes: usize) -> Result<Self, AppError> {
        let mut form = UploadForm::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| multipart_error(e, "Invalid multipart body", max_upload_bytes))?
        {
            let name = field.name().unwrap_or("").to_string();
            match name.as_str() {
                FILE_FIELD => {
                    let filename = field.file_name().unwrap_or("").to_string();
                    let mime_type = field.content_type().map(String::from);
                    let content = field.bytes().await.map_err(|e| {
                        multipart_error(e, "Failed to read upload", max_upload_bytes)
                    })?;
                    form.file = Some(UploadedDocument {
                        content,
                        filename,
                        mime_type,
                    });
                }
                JOB_DESCRIPTION_FIELD => {
                    let text = field.text().await.map_err(|e| {
                        multipart_error(e, "Failed to read job description", max_upload_bytes)
                    })?;
                    form.job_description = Some(text);
                }
                _ => {}
            }
        }

        Ok(form)
    }

    fn require_file(&mut self) -> Result<UploadedDocument, AppError> {
        let file = self
            .file
            .take()
            .ok_or_else(|| AppError::Validation("No file uploaded".to_string()))?;
        if file.filename.trim().is_empty() {
            return Err(AppError::Validation("No file selected".to_string()));
        }
        Ok(file)
    }

    fn require_job_description(&mut self) -> Result<String, AppError> {
        self.job_description
            .take()
            .filter(|jd| !jd.trim().is_empty())
            .ok_or_else(|| AppError::Validation("Job description is required".to_string()))
    }
}

/// Oversized bodies surface here as a multipart stream error once
/// `DefaultBodyLimit` cuts the body off.
fn multipart_error(err: MultipartError, context: &str, max_upload_bytes: usize) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        warn!("Upload rejected: {}", err.body_text());
        return AppError::PayloadTooLarge(format!(
            "File too large. Maximum upload size is {} MB",
            max_upload_bytes / (1024 * 1024)
        ));
    }
    AppError::Validation(format!("{context}: {err}"))
}

/// Runs extraction on the blocking pool and refuses sentinel results, so an
/// unreadable upload never reaches a prompt.
async fn extract_resume_text(document: UploadedDocument) -> Result<String, AppError> {
    info!(
        "Processing resume: {} ({})",
        document.filename,
        document.mime_type.as_deref().unwrap_or("unknown type")
    );

    let extracted = tokio::task::spawn_blocking(move || extract(&document))
        .await
        .map_err(|e| AppError::Internal(e.into()))??;

    if extracted.is_sentinel() || extracted.as_str().trim().is_empty() {
        warn!("No usable text in upload: {}", extracted.as_str());
        return Err(AppError::Validation(NO_MEANINGFUL_CONTENT.to_string()));
    }
    Ok(extracted.as_str().to_string())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/analyze-resume
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<CandidateProfile>, AppError> {
    let mut form = UploadForm::read(multipart, state.config.max_upload_bytes).await?;
    let file = form.require_file()?;

    let resume_text = extract_resume_text(file).await?;
    if resume_text.trim().chars().count() < MIN_RESUME_CHARS {
        return Err(AppError::Validation(NO_MEANINGFUL_CONTENT.to_string()));
    }

    let profile = analyze_resume(state.model.as_ref(), &resume_text).await?;
    Ok(Json(profile))
}

/// POST /api/search-jobs
///
/// Degrades to an empty list on any model or normalization failure, so the
/// client can render "no results" instead of an error.
pub async fn handle_search_jobs(
    State(state): State<AppState>,
    payload: Result<Json<JobSearchRequest>, JsonRejection>,
) -> Result<Json<Vec<JobListing>>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected search body: {}", rejection.body_text());
        AppError::Validation("Request body is required".to_string())
    })?;
    let roles = non_blank(request.roles);
    let skills = non_blank(request.skills);
    if roles.is_empty() && skills.is_empty() {
        return Err(AppError::Validation(
            "At least one role or skill is required".to_string(),
        ));
    }

    let location = request
        .location
        .as_deref()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .unwrap_or(state.config.default_location.as_str());

    let criteria = SearchCriteria {
        roles: &roles,
        skills: &skills,
        location,
    };

    match search_jobs(state.model.as_ref(), &criteria).await {
        Ok(jobs) => Ok(Json(jobs)),
        Err(e) => {
            error!("Job search error: {e}");
            Ok(Json(Vec::new()))
        }
    }
}

/// POST /api/analyze-job-match
pub async fn handle_analyze_job_match(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<MatchResult>, AppError> {
    let mut form = UploadForm::read(multipart, state.config.max_upload_bytes).await?;
    let file = form.require_file()?;
    let job_description = form.require_job_description()?;

    let resume_text = extract_resume_text(file).await?;
    let result = analyze_match(state.model.as_ref(), &resume_text, &job_description).await?;
    Ok(Json(result))
}

/// POST /api/generate-cover-letter
pub async fn handle_generate_cover_letter(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<CoverLetter>, AppError> {
    let mut form = UploadForm::read(multipart, state.config.max_upload_bytes).await?;
    let file = form.require_file()?;
    let job_description = form.require_job_description()?;

    let resume_text = extract_resume_text(file).await?;
    let letter =
        generate_cover_letter(state.model.as_ref(), &resume_text, &job_description).await?;
    Ok(Json(letter))
}

fn non_blank(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
