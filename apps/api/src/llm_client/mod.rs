//! LLM client: the single point of entry for all model calls in CareerHarvester.
//!
//! ARCHITECTURAL RULE: No other module may call the OpenAI API directly.
//! All model interactions go through a `ModelClient`.
//!
//! One call per request: there is no retry or backoff here. The only timeout is
//! the HTTP client's.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod mock;
pub mod prompts;

pub use mock::CannedModelClient;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// The use case a completion serves. The live client ignores it; the canned
/// client uses it to pick a fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    Profile,
    JobSearch,
    JobMatch,
    CoverLetter,
}

#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub task: Task,
    pub system: &'static str,
    pub prompt: String,
    pub temperature: Option<f32>,
    /// Ask for a bare JSON object (chat `response_format`).
    pub json_mode: bool,
    /// Give the model the web search tool. Routed through the Responses API.
    pub web_search: bool,
}

/// The external generative-model collaborator.
///
/// Carried in `AppState` as `Arc<dyn ModelClient>`; swapped for
/// `CannedModelClient` when mock mode is on.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Returns the raw text of the model's answer. No schema is guaranteed.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError>;

    fn model_name(&self) -> &str;
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
    usage: Option<ChatUsage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Debug, Serialize)]
struct Tool {
    #[serde(rename = "type")]
    tool_type: &'static str,
}

#[derive(Debug, Serialize)]
struct ResponsesRequest<'a> {
    model: &'a str,
    tools: Vec<Tool>,
    input: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct ResponsesResponse {
    #[serde(default)]
    output: Vec<OutputItem>,
}

#[derive(Debug, Deserialize)]
struct OutputItem {
    #[serde(rename = "type")]
    item_type: String,
    #[serde(default)]
    content: Vec<OutputContent>,
}

#[derive(Debug, Deserialize)]
struct OutputContent {
    #[serde(rename = "type")]
    content_type: String,
    text: Option<String>,
}

impl ResponsesResponse {
    /// First `output_text` block of the first message item.
    fn output_text(&self) -> Option<&str> {
        self.output
            .iter()
            .filter(|item| item.item_type == "message")
            .flat_map(|item| item.content.iter())
            .find(|c| c.content_type == "output_text")
            .and_then(|c| c.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct OpenAiError {
    error: OpenAiErrorBody,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorBody {
    message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Live client
// ────────────────────────────────────────────────────────────────────────────

/// Live client for the OpenAI HTTP API.
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAiClient {
    pub fn new(
        api_key: String,
        model: String,
        base_url: String,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn chat_completion(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: request.system,
                },
                ChatMessage {
                    role: "user",
                    content: &request.prompt,
                },
            ],
            temperature: request.temperature,
            response_format: request.json_mode.then_some(ResponseFormat {
                format_type: "json_object",
            }),
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;
        let response = check_status(response).await?;
        let completion: ChatCompletionResponse = response.json().await?;

        if let Some(usage) = &completion.usage {
            debug!(
                "LLM call succeeded: input_tokens={}, output_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|text| !text.trim().is_empty())
            .ok_or(LlmError::EmptyContent)
    }

    async fn web_search_response(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        let body = ResponsesRequest {
            model: &self.model,
            tools: vec![Tool {
                tool_type: "web_search_preview",
            }],
            input: vec![
                ChatMessage {
                    role: "system",
                    content: request.system,
                },
                ChatMessage {
                    role: "user",
                    content: &request.prompt,
                },
            ],
            temperature: request.temperature,
        };

        let response = self
            .client
            .post(format!("{}/responses", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;
        let response = check_status(response).await?;
        let parsed: ResponsesResponse = response.json().await?;

        parsed
            .output_text()
            .filter(|text| !text.trim().is_empty())
            .map(String::from)
            .ok_or(LlmError::EmptyContent)
    }
}

#[async_trait]
impl ModelClient for OpenAiClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        if request.web_search {
            self.web_search_response(request).await
        } else {
            self.chat_completion(request).await
        }
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

/// Maps non-2xx responses to `LlmError::Api`, preferring the API's own message.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, LlmError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<OpenAiError>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body);
    Err(LlmError::Api {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client_for(server: &MockServer) -> OpenAiClient {
        OpenAiClient::new(
            "test-key".to_string(),
            "gpt-4o-mini".to_string(),
            server.uri(),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    fn request(web_search: bool) -> CompletionRequest {
        CompletionRequest {
            task: Task::Profile,
            system: "Respond in JSON.",
            prompt: "Analyze this resume".to_string(),
            temperature: Some(0.3),
            json_mode: !web_search,
            web_search,
        }
    }

    #[tokio::test]
    async fn test_chat_completion_returns_message_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_partial_json(json!({
                "model": "gpt-4o-mini",
                "response_format": {"type": "json_object"}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"role": "assistant", "content": "{\"name\": \"Ada\"}"}}],
                "usage": {"prompt_tokens": 12, "completion_tokens": 5}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let text = client_for(&server).complete(&request(false)).await.unwrap();
        assert_eq!(text, "{\"name\": \"Ada\"}");
    }

    #[tokio::test]
    async fn test_web_search_uses_responses_api() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/responses"))
            .and(body_partial_json(json!({
                "tools": [{"type": "web_search_preview"}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "output": [
                    {"type": "web_search_call", "id": "ws_1", "status": "completed"},
                    {"type": "message", "content": [
                        {"type": "output_text", "text": "```json\n{\"jobs\": []}\n```"}
                    ]}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let text = client_for(&server).complete(&request(true)).await.unwrap();
        assert_eq!(text, "```json\n{\"jobs\": []}\n```");
    }

    #[tokio::test]
    async fn test_api_error_message_is_surfaced() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server).complete(&request(false)).await.unwrap_err();
        match err {
            LlmError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Incorrect API key provided");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_server_error_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server).complete(&request(false)).await.unwrap_err();
        assert!(matches!(err, LlmError::Api { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_empty_choices_is_empty_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
            .mount(&server)
            .await;

        let err = client_for(&server).complete(&request(false)).await.unwrap_err();
        assert!(matches!(err, LlmError::EmptyContent));
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = OpenAiClient::new(
            "k".into(),
            "m".into(),
            "https://api.openai.com/v1/".into(),
            Duration::from_secs(1),
        )
        .unwrap();
        assert_eq!(client.base_url, "https://api.openai.com/v1");
        assert_eq!(client.model_name(), "m");
    }
}
