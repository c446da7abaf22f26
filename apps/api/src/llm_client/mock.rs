//! Canned responses for mock mode: exercises the full request path without
//! reaching the external service.

use async_trait::async_trait;
use tracing::debug;

use super::{CompletionRequest, LlmError, ModelClient, Task};

pub const MOCK_MODEL_NAME: &str = "mock";

const PROFILE_FIXTURE: &str = r#"{
  "name": "Alex Chen",
  "summary": "Full-stack engineer with 5 years of experience building web platforms in React and Python. Comfortable owning features from API design to deployment.",
  "skills": ["React", "TypeScript", "Python", "Django", "PostgreSQL", "Docker", "AWS"],
  "suggestedRoles": ["Full Stack Engineer", "Senior Frontend Engineer", "Backend Engineer"]
}"#;

// Wrapped in a fence on purpose: web-search answers usually are.
const JOB_SEARCH_FIXTURE: &str = r#"```json
{
  "jobs": [
    {
      "title": "Senior Full Stack Engineer",
      "company": "Appier",
      "platform": "104.com.tw",
      "link": "https://www.104.com.tw/job/mock-1",
      "salary": "NT$1,400,000 - 2,000,000 / year",
      "location": "Taipei, Taiwan",
      "tags": ["React", "Python", "AWS"],
      "description": "Build data products used by marketers across APAC."
    },
    {
      "title": "Frontend Engineer",
      "company": "Dcard",
      "platform": "CakeResume",
      "link": "https://www.cakeresume.com/jobs/mock-2",
      "salary": "Not disclosed",
      "location": "Taipei, Taiwan",
      "tags": ["React", "TypeScript"],
      "description": "Own the web client of a large community platform."
    },
    {
      "title": "Backend Engineer",
      "company": "Gogoro",
      "platform": "LinkedIn Jobs",
      "link": "https://www.linkedin.com/jobs/view/mock-3",
      "salary": "Not disclosed",
      "location": "Taoyuan, Taiwan",
      "tags": ["Python", "PostgreSQL", "Docker"],
      "description": "Design services behind the battery swapping network."
    }
  ],
  "search_summary": "Mock search results"
}
```"#;

const MATCH_FIXTURE: &str = r#"{
  "missingKeywords": ["Kubernetes", "GraphQL", "CI/CD"],
  "matchScore": 72,
  "advice": "Your React and Python experience lines up well. Add concrete examples of deployment pipelines and any container orchestration work to close the remaining gaps."
}"#;

const COVER_LETTER_FIXTURE: &str = r#"{
  "coverLetter": "Dear Hiring Manager,\n\nI am excited to apply for this role. Over the past five years I have built and shipped web products end to end, from React front ends to Python services running on AWS.\n\nI would welcome the chance to discuss how my experience can help your team.\n\nSincerely,\nAlex Chen"
}"#;

/// Returns a fixed fixture per `Task`.
#[derive(Debug, Clone, Default)]
pub struct CannedModelClient;

impl CannedModelClient {
    pub fn fixture(task: Task) -> &'static str {
        match task {
            Task::Profile => PROFILE_FIXTURE,
            Task::JobSearch => JOB_SEARCH_FIXTURE,
            Task::JobMatch => MATCH_FIXTURE,
            Task::CoverLetter => COVER_LETTER_FIXTURE,
        }
    }
}

#[async_trait]
impl ModelClient for CannedModelClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        debug!("Mock mode: returning canned {:?} response", request.task);
        Ok(Self::fixture(request.task).to_string())
    }

    fn model_name(&self) -> &str {
        MOCK_MODEL_NAME
    }
}
