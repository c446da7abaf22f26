// Shared prompt fragments.
// Each use case defines its own prompts alongside it (career::prompts).
// This file contains cross-cutting fragments only.

/// Appended to every system prompt that expects a JSON answer.
pub const JSON_ONLY_INSTRUCTION: &str = "\
    You MUST respond with a single valid JSON object only. \
    Do NOT include any text outside the JSON object. \
    Do NOT include explanations or apologies.";

/// Appended to every user prompt that reads a resume or job posting.
pub const NO_FABRICATION_INSTRUCTION: &str = "\
    CRITICAL: Only use facts present in the provided text. \
    Do NOT invent employers, dates, skills, or job listings. \
    If something is not stated, leave it out.";
