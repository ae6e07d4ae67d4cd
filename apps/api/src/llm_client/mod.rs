/// LLM Client — the single point of entry for all generative-model calls.
///
/// ARCHITECTURAL RULE: No other module may call the Ollama generate API
/// directly. All LLM interactions MUST go through this module.
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

const GENERATE_PATH: &str = "/api/generate";
const MAX_RETRIES: u32 = 3;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Backend unavailable after {retries} retries")]
    Exhausted { retries: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("LLM output contains no {0}")]
    MissingStructure(&'static str),
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    system: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

#[derive(Debug, Deserialize)]
struct OllamaError {
    error: String,
}

/// The single LLM client used by all services.
/// Wraps the Ollama generate API with retry logic and structured output helpers.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    generate_url: String,
    model: String,
}

impl LlmClient {
    pub fn new(base_url: &str, model: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            generate_url: format!("{base_url}{GENERATE_PATH}"),
            model,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Makes a raw call to the generate API, returning the trimmed response text.
    /// Retries on connection errors, 429, and 5xx with exponential backoff.
    pub async fn call(&self, prompt: &str, system: &str) -> Result<String, LlmError> {
        let request_body = GenerateRequest {
            model: &self.model,
            prompt,
            system,
            stream: false,
        };

        let mut last_error: Option<LlmError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "LLM call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(&self.generate_url)
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

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("LLM API returned {}: {}", status, body);
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                // Try to parse error message
                let message = serde_json::from_str::<OllamaError>(&body)
                    .map(|e| e.error)
                    .unwrap_or(body);
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let generated: GenerateResponse = response.json().await?;
            let text = generated.response.trim().to_string();

            if text.is_empty() {
                return Err(LlmError::EmptyContent);
            }

            debug!("LLM call succeeded: {} chars", text.len());

            return Ok(text);
        }

        Err(last_error.unwrap_or(LlmError::Exhausted {
            retries: MAX_RETRIES,
        }))
    }

    /// Calls the LLM and deserializes the response as a JSON object.
    /// Tolerates markdown code fences and surrounding prose; the extracted
    /// payload is serde-validated so schema violations fail with a tagged
    /// error instead of propagating garbage downstream.
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        prompt: &str,
        system: &str,
    ) -> Result<T, LlmError> {
        let text = self.call(prompt, system).await?;
        parse_json_object(&text)
    }

    /// Calls the LLM and parses a bracket-delimited JSON string array out of
    /// the response, tolerating surrounding explanatory prose. Entries are
    /// trimmed; duplicates collapse to the first occurrence, order preserved.
    pub async fn call_list(&self, prompt: &str, system: &str) -> Result<Vec<String>, LlmError> {
        let text = self.call(prompt, system).await?;
        parse_string_list(&text)
    }
}

/// Extracts and deserializes the first brace-delimited JSON object in `text`.
pub fn parse_json_object<T: DeserializeOwned>(text: &str) -> Result<T, LlmError> {
    let text = strip_json_fences(text);
    let payload =
        extract_balanced(text, '{', '}').ok_or(LlmError::MissingStructure("JSON object"))?;
    serde_json::from_str(payload).map_err(LlmError::Parse)
}

/// Extracts and deserializes the first bracket-delimited JSON string array in
/// `text`, then trims and deduplicates the entries.
pub fn parse_string_list(text: &str) -> Result<Vec<String>, LlmError> {
    let text = strip_json_fences(text);
    let payload =
        extract_balanced(text, '[', ']').ok_or(LlmError::MissingStructure("JSON array"))?;
    let raw: Vec<String> = serde_json::from_str(payload).map_err(LlmError::Parse)?;

    let mut seen = std::collections::HashSet::new();
    let mut items = Vec::new();
    for entry in raw {
        let entry = entry.trim().to_string();
        if !entry.is_empty() && seen.insert(entry.clone()) {
            items.push(entry);
        }
    }
    Ok(items)
}

/// Returns the first balanced `open`..`close` region of `text`, inclusive.
fn extract_balanced(text: &str, open: char, close: char) -> Option<&str> {
    let start = text.find(open)?;
    let mut depth = 0usize;
    for (offset, c) in text[start..].char_indices() {
        if c == open {
            depth += 1;
        } else if c == close {
            depth -= 1;
            if depth == 0 {
                return Some(&text[start..start + offset + close.len_utf8()]);
            }
        }
    }
    None
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
