//! LLM Client: the single point of entry for all text-generation calls.
//!
//! ARCHITECTURAL RULE: No other module may call the Gemini API directly.
//! All question generation and answer evaluation MUST go through this module.
//!
//! Models: gemini-2.5-flash, falling back to gemini-1.5-flash when the primary is not found.
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const PRIMARY_MODEL: &str = "gemini-2.5-flash";
pub const FALLBACK_MODEL: &str = "gemini-1.5-flash";
const MAX_OUTPUT_TOKENS: u32 = 8192;
const TEMPERATURE: f32 = 0.7;
const TOP_P: f32 = 0.9;
const MAX_RETRIES: u32 = 3;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Generation failed after {retries} attempts")]
    Exhausted { retries: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    system_instruction: SystemInstruction<'a>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct SystemInstruction<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_p: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LlmResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

impl LlmResponse {
    /// Concatenated text parts of the first candidate.
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        (!text.is_empty()).then_some(text)
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// The single LLM client used by all services.
/// Wraps the Gemini `generateContent` API with retry, model fallback and structured output helpers.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// Makes a raw generation call, returning the full response object.
    /// Retries on transport errors, 429, 5xx and "model not found" with exponential backoff.
    /// A "not found" failure switches to `FALLBACK_MODEL` for the remaining attempts.
    pub async fn call(&self, prompt: &str, system: &str) -> Result<LlmResponse, LlmError> {
        let request_body = GenerateRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
            system_instruction: SystemInstruction {
                parts: vec![RequestPart { text: system }],
            },
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                top_p: TOP_P,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        let mut model = PRIMARY_MODEL;
        let mut last_error: Option<LlmError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                let delay = backoff_delay(attempt);
                warn!(
                    "LLM call attempt {} failed, retrying with {} after {}ms...",
                    attempt,
                    model,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(format!("{GEMINI_API_BASE}/{model}:generateContent"))
                .header("x-goog-api-key", &self.api_key)
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(LlmError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let message = error_message(body);
                let action = classify_failure(status.as_u16(), &message);
                let error = LlmError::Api {
                    status: status.as_u16(),
                    message,
                };

                match action {
                    FailureAction::SwitchModel => {
                        if model != FALLBACK_MODEL {
                            warn!("Model {model} not found, switching to fallback {FALLBACK_MODEL}");
                            model = FALLBACK_MODEL;
                        }
                    }
                    FailureAction::Retry => warn!("LLM API returned {}: {}", status, error),
                    FailureAction::Fail => return Err(error),
                }
                last_error = Some(error);
                continue;
            }

            let llm_response: LlmResponse = response.json().await?;

            if let Some(usage) = &llm_response.usage_metadata {
                debug!(
                    "LLM call succeeded: model={}, prompt_tokens={}, output_tokens={}",
                    model, usage.prompt_token_count, usage.candidates_token_count
                );
            }

            return Ok(llm_response);
        }

        Err(last_error.unwrap_or(LlmError::Exhausted {
            retries: MAX_RETRIES,
        }))
    }

    /// Convenience method that calls the LLM and deserializes the text response as JSON.
    /// The prompt must instruct the model to return valid JSON.
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        prompt: &str,
        system: &str,
    ) -> Result<T, LlmError> {
        let response = self.call(prompt, system).await?;

        let text = response.text().ok_or(LlmError::EmptyContent)?;

        // Strip markdown code fences if the model wraps JSON in them
        serde_json::from_str(strip_json_fences(&text)).map_err(LlmError::Parse)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FailureAction {
    SwitchModel,
    Retry,
    Fail,
}

/// A 404 status or any error text mentioning "not found" means the model is unavailable.
fn classify_failure(status: u16, message: &str) -> FailureAction {
    if status == 404 || message.to_lowercase().contains("not found") {
        FailureAction::SwitchModel
    } else if status == 429 || (500..600).contains(&status) {
        FailureAction::Retry
    } else {
        FailureAction::Fail
    }
}

/// 1s, 2s, 4s, ...
fn backoff_delay(attempt: u32) -> std::time::Duration {
    std::time::Duration::from_millis(1000 * (1 << (attempt - 1)))
}

/// Prefers the API's structured error message, falling back to the raw body.
fn error_message(body: String) -> String {
    serde_json::from_str::<GeminiError>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body)
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
