//! System prompts and user prompt templates per use case.

use crate::llm_client::prompts::{JSON_ONLY_INSTRUCTION, NO_FABRICATION_INSTRUCTION};

pub const TRUNCATION_MARKER: &str = "\n[Content truncated...]";

pub const PROFILE_RESUME_LIMIT: usize = 6000;
pub const JOB_DESCRIPTION_LIMIT: usize = 2000;
pub const RESUME_SNIPPET_LIMIT: usize = 3000;

const MAX_QUERY_ROLES: usize = 3;
const MAX_QUERY_SKILLS: usize = 5;

// ────────────────────────────────────────────────────────────────────────────
// System prompts
// ────────────────────────────────────────────────────────────────────────────

pub const PROFILE_SYSTEM: &str = "You are an expert career consultant and resume analyst. \
    Analyze resumes thoroughly and extract key information accurately. \
    Always respond with valid JSON matching this schema: \
    {\"name\": string, \"summary\": string, \"skills\": [string], \"suggestedRoles\": [string]}";

pub const JOB_SEARCH_SYSTEM: &str = r#"You are a professional job search agent. Your task is to:
1. Search the web for real, current job openings
2. Extract accurate job information including title, company, platform, and URL
3. Return ONLY real jobs with valid URLs that exist right now

CRITICAL: Only return jobs you find through web search. Do NOT make up or hallucinate job listings.

For the platform field, use one of: "104", "1111", "CakeResume", "LinkedIn", "Indeed", "Other"

Return your findings as a JSON object with this exact structure:
{
  "jobs": [
    {
      "title": "Job Title",
      "company": "Company Name",
      "platform": "Platform Name",
      "link": "https://actual-job-url.com/job/123",
      "salary": "Salary range or 'Not disclosed'",
      "location": "City, Country",
      "tags": ["skill1", "skill2", "skill3"],
      "description": "Brief 1-2 sentence description"
    }
  ],
  "search_summary": "Brief summary of search performed"
}"#;

pub const MATCH_SYSTEM: &str = "You are an expert career coach. \
    Compare resumes against job descriptions honestly. \
    Always respond with valid JSON matching this schema: \
    {\"missingKeywords\": [string], \"matchScore\": integer 0-100, \"advice\": string}";

pub const COVER_LETTER_SYSTEM: &str = "You are an expert cover letter writer. \
    Always respond with valid JSON matching this schema: {\"coverLetter\": string}";

// ────────────────────────────────────────────────────────────────────────────
// Sampling settings
// ────────────────────────────────────────────────────────────────────────────

/// Extraction-style tasks want consistency.
pub const ANALYSIS_TEMPERATURE: f32 = 0.3;
/// Writing wants some variety.
pub const COVER_LETTER_TEMPERATURE: f32 = 0.7;

// ────────────────────────────────────────────────────────────────────────────
// Builders
// ────────────────────────────────────────────────────────────────────────────

/// Cuts `text` to at most `max_chars` characters and appends a visible marker
/// when anything was dropped. Never splits a character.
pub fn truncate_with_marker(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{TRUNCATION_MARKER}", &text[..cut]),
        None => text.to_string(),
    }
}

pub fn build_profile_prompt(resume_text: &str) -> String {
    let resume_text = truncate_with_marker(resume_text, PROFILE_RESUME_LIMIT);
    format!(
        r#"Analyze this resume and extract the following information:

RESUME CONTENT:
{resume_text}

---

Please extract:
1. **Name**: The candidate's full name. If not clearly stated, use "Candidate"
2. **Summary**: A 2-3 sentence professional summary highlighting their key strengths, experience level, and career focus
3. **Skills**: 6-10 distinct technical skills, tools, or professional competencies (prioritize hard skills)
4. **Suggested Roles**: 3 specific job titles that best match this profile

{NO_FABRICATION_INSTRUCTION}

Return this structure:
{{
  "name": "Full Name",
  "summary": "Professional summary...",
  "skills": ["skill1", "skill2", ...],
  "suggestedRoles": ["Role 1", "Role 2", "Role 3"]
}}

{JSON_ONLY_INSTRUCTION}"#
    )
}

/// Roles are combined disjunctively (first 3), skills conjunctively (first 5).
pub fn build_search_query(roles: &[String], skills: &[String], location: &str) -> String {
    let role_str = roles
        .iter()
        .take(MAX_QUERY_ROLES)
        .map(|role| format!("\"{role}\""))
        .collect::<Vec<_>>()
        .join(" OR ");
    let skill_str = skills
        .iter()
        .take(MAX_QUERY_SKILLS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"Search for current job openings with these criteria:
- Job Titles: {role_str}
- Required Skills: {skill_str}
- Location: {location}

Focus on job boards like:
- 104.com.tw (Taiwan)
- CakeResume
- LinkedIn Jobs
- 1111.com.tw (Taiwan)
- Indeed

Find 6-8 REAL, CURRENTLY OPEN positions.

{JSON_ONLY_INSTRUCTION}"#
    )
}

pub fn build_match_prompt(resume_text: &str, job_description: &str) -> String {
    let job_description = truncate_with_marker(job_description, JOB_DESCRIPTION_LIMIT);
    let resume_text = truncate_with_marker(resume_text, RESUME_SNIPPET_LIMIT);
    format!(
        r#"Analyze how well this resume matches the job description.

JOB DESCRIPTION:
{job_description}

RESUME:
{resume_text}

---

Provide:
1. **Missing Keywords**: Skills/qualifications mentioned in the job but missing from resume
2. **Match Score**: 0-100 score based on skills, experience, and qualification alignment
3. **Advice**: Specific suggestions to improve the resume for this role

{NO_FABRICATION_INSTRUCTION}

Return this structure:
{{
  "missingKeywords": ["keyword1", "keyword2", ...],
  "matchScore": 75,
  "advice": "Specific advice..."
}}

{JSON_ONLY_INSTRUCTION}"#
    )
}

pub fn build_cover_letter_prompt(resume_text: &str, job_description: &str) -> String {
    let job_description = truncate_with_marker(job_description, JOB_DESCRIPTION_LIMIT);
    let resume_text = truncate_with_marker(resume_text, RESUME_SNIPPET_LIMIT);
    format!(
        r#"Write a professional, compelling cover letter for this job application.

JOB DESCRIPTION:
{job_description}

CANDIDATE'S RESUME:
{resume_text}

---

Guidelines:
- Professional yet personable tone
- Highlight relevant experience from the resume
- Show enthusiasm for the specific role and company
- Keep it concise (300-400 words)
- Include a strong opening and call to action

{NO_FABRICATION_INSTRUCTION}

Return this structure: {{"coverLetter": "Your cover letter text..."}}

{JSON_ONLY_INSTRUCTION}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_untouched() {
        assert_eq!(truncate_with_marker("short", 10), "short");
        assert_eq!(truncate_with_marker("exact", 5), "exact");
    }

    #[test]
    fn test_long_text_gets_marker() {
        let out = truncate_with_marker("abcdefghij", 4);
        assert_eq!(out, format!("abcd{TRUNCATION_MARKER}"));
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        let out = truncate_with_marker("履歷表工程師", 3);
        assert_eq!(out, format!("履歷表{TRUNCATION_MARKER}"));
    }

    #[test]
    fn test_profile_prompt_truncates_resume() {
        let resume = "x".repeat(PROFILE_RESUME_LIMIT + 500);
        let prompt = build_profile_prompt(&resume);
        assert!(prompt.contains(TRUNCATION_MARKER));
        assert!(!prompt.contains(&"x".repeat(PROFILE_RESUME_LIMIT + 1)));
        assert!(prompt.contains("\"suggestedRoles\""));
    }

    #[test]
    fn test_search_query_limits_roles_and_skills() {
        let roles: Vec<String> = ["A", "B", "C", "D"].iter().map(|s| s.to_string()).collect();
        let skills: Vec<String> = ["s1", "s2", "s3", "s4", "s5", "s6"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let query = build_search_query(&roles, &skills, "Remote");

        assert!(query.contains(r#"- Job Titles: "A" OR "B" OR "C""#));
        assert!(!query.contains(r#""D""#));
        assert!(query.contains("- Required Skills: s1, s2, s3, s4, s5\n"));
        assert!(!query.contains("s6"));
        assert!(query.contains("- Location: Remote"));
    }

    #[test]
    fn test_match_prompt_truncates_both_inputs() {
        let jd = "j".repeat(JOB_DESCRIPTION_LIMIT + 1);
        let resume = "r".repeat(RESUME_SNIPPET_LIMIT + 1);
        let prompt = build_match_prompt(&resume, &jd);
        assert_eq!(prompt.matches(TRUNCATION_MARKER).count(), 2);
        assert!(prompt.contains("\"matchScore\""));
    }

    #[test]
    fn test_cover_letter_prompt_embeds_inputs() {
        let prompt = build_cover_letter_prompt("Jane, Rust developer", "Acme is hiring");
        assert!(prompt.contains("Jane, Rust developer"));
        assert!(prompt.contains("Acme is hiring"));
        assert!(prompt.contains("\"coverLetter\""));
        assert!(!prompt.contains(TRUNCATION_MARKER));
    }
}
