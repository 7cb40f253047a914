//! Gemini generateContent API client.
//!
//! Thin HTTP wrapper for the Google generative language REST API. Pure
//! parsing in `parse_response` for testability.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::config::LlmTimeouts;
use super::types::{GenerationParams, LlmError};

// =============================================================================
// CLIENT
// =============================================================================

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    /// # Errors
    ///
    /// Returns [`LlmError::HttpClientBuild`] if the reqwest client cannot be
    /// constructed.
    pub fn new(api_key: String, base_url: String, timeouts: LlmTimeouts) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_key, base_url })
    }

    /// Send one generateContent request and return the generated text.
    ///
    /// # Errors
    ///
    /// [`LlmError::ApiRequest`] for transport failures,
    /// [`LlmError::ApiResponse`] for non-200 statuses, and the
    /// `parse_response` errors for unusable bodies.
    pub async fn generate_content(
        &self,
        model: &str,
        prompt: &str,
        params: GenerationParams,
    ) -> Result<String, LlmError> {
        let body = build_request(prompt, params);

        // The API key travels in the query string, not a header.
        let url = format!("{}/{}:generateContent?key={}", self.base_url, model, self.api_key);

        let response = self
            .http
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        if status != 200 {
            return Err(LlmError::ApiResponse { status, body: text });
        }

        parse_response(&text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Serialize)]
struct ApiRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f64,
    #[serde(rename = "topP")]
    top_p: f64,
    #[serde(rename = "topK")]
    top_k: u32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(rename = "promptFeedback")]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
    #[serde(rename = "finishReason")]
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct PromptFeedback {
    #[serde(rename = "blockReason")]
    block_reason: Option<String>,
}

fn build_request(prompt: &str, params: GenerationParams) -> ApiRequest<'_> {
    ApiRequest {
        contents: vec![Content { role: "user", parts: vec![Part { text: prompt }] }],
        generation_config: GenerationConfig {
            temperature: params.temperature,
            top_p: params.top_p,
            top_k: params.top_k,
            max_output_tokens: params.max_output_tokens,
        },
    }
}

// =============================================================================
// PARSING
// =============================================================================

/// Extract the generated text from a generateContent response body.
///
/// Concatenates the text parts of the first candidate, mirroring the SDK
/// `response.text` accessor. A well-formed response with no text (empty
/// candidate list, safety block) is an error, never an empty string.
fn parse_response(json: &str) -> Result<String, LlmError> {
    let api: ApiResponse = serde_json::from_str(json).map_err(|e| LlmError::ApiParse(e.to_string()))?;

    if let Some(reason) = api.prompt_feedback.as_ref().and_then(|f| f.block_reason.as_deref()) {
        return Err(LlmError::EmptyCompletion(format!("prompt blocked: {reason}")));
    }

    let Some(Candidate { content, finish_reason }) = api.candidates.into_iter().next() else {
        return Err(LlmError::EmptyCompletion("no candidates returned".into()));
    };

    let text: String = content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.is_empty() {
        let reason = finish_reason.unwrap_or_else(|| "unknown".into());
        return Err(LlmError::EmptyCompletion(format!("candidate has no text (finish reason: {reason})")));
    }

    Ok(text)
}

#[cfg(test)]
#[path = "gemini_test.rs"]
mod tests;
