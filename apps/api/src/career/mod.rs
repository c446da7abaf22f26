// Career features: resume analysis, job search, job match, cover letters.
// All model calls go through llm_client. Nothing here talks to OpenAI directly.

pub mod handlers;
pub mod prompts;
pub mod service;
