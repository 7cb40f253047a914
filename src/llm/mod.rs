//! Gemini-backed completion client for diagram generation.
//!
//! DESIGN
//! ======
//! One provider (Google Gemini generateContent), wrapped behind the
//! [`LlmComplete`] trait so the generation pipeline and the routes can be
//! exercised with deterministic stubs. Configured from environment variables.

pub mod config;
pub mod gemini;
pub mod types;

use config::GeminiConfig;
pub use types::LlmComplete;
use types::{GenerationParams, LlmError};

// =============================================================================
// CLIENT
// =============================================================================

/// Concrete completion client backed by the Gemini API.
///
/// Configured from environment variables by [`LlmClient::from_env`].
pub struct LlmClient {
    inner: gemini::GeminiClient,
    model: String,
}

impl LlmClient {
    /// Build an LLM client from environment variables.
    ///
    /// - `GEMINI_API_KEY`: required
    /// - `GEMINI_MODEL`: model name (default "gemini-2.5-flash")
    /// - `GEMINI_BASE_URL`: override for the API base URL
    /// - `GEMINI_REQUEST_TIMEOUT_SECS` / `GEMINI_CONNECT_TIMEOUT_SECS`
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client fails
    /// to build.
    pub fn from_env() -> Result<Self, LlmError> {
        let config = GeminiConfig::from_env()?;
        Self::from_config(config)
    }

    /// Build an LLM client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider HTTP client fails to build.
    pub fn from_config(config: GeminiConfig) -> Result<Self, LlmError> {
        let model = config.model.clone();
        let inner = gemini::GeminiClient::new(config.api_key, config.base_url, config.timeouts)?;
        Ok(Self { inner, model })
    }

    /// Return the configured model name (e.g. `"gemini-2.5-flash"`).
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait::async_trait]
impl LlmComplete for LlmClient {
    async fn complete(&self, prompt: &str, params: GenerationParams) -> Result<String, LlmError> {
        self.inner.generate_content(&self.model, prompt, params).await
    }
}
