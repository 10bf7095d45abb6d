//! Chat-completion client (Groq, or any OpenAI-compatible endpoint).

use analysis_spi::{NarrativeError, NarrativeProvider, NarrativeRequest};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::NarrativeConfig;
use crate::prompt::build_prompt;

/// Chat completion request body.
#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    temperature: f64,
    max_completion_tokens: u32,
    top_p: f64,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

/// Chat completion response structures
#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Narrative provider backed by a chat-completion HTTP API.
#[derive(Debug, Clone)]
pub struct GroqNarrator {
    config: NarrativeConfig,
    client: reqwest::Client,
}

impl GroqNarrator {
    /// Create a client; fails only if the HTTP client cannot be built.
    pub fn new(config: NarrativeConfig) -> Result<Self, NarrativeError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| NarrativeError::RequestFailed(e.to_string()))?;
        Ok(Self { config, client })
    }

    /// Create a client configured from the environment.
    pub fn from_env() -> Result<Self, NarrativeError> {
        Self::new(NarrativeConfig::from_env())
    }

    pub fn config(&self) -> &NarrativeConfig {
        &self.config
    }

    pub fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Extract the first choice's text from a completion response body.
    fn parse_response(json: &str) -> Result<String, NarrativeError> {
        let response: CompletionResponse =
            serde_json::from_str(json).map_err(|e| NarrativeError::ParseError(e.to_string()))?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|text| text.trim().to_string())
            .unwrap_or_default();

        if content.is_empty() {
            return Err(NarrativeError::EmptyResponse);
        }
        Ok(content)
    }

    /// Best human-readable message from an error body.
    fn error_message(body: &str) -> String {
        serde_json::from_str::<ErrorEnvelope>(body)
            .map(|envelope| envelope.error.message)
            .unwrap_or_else(|_| body.trim().to_string())
    }
}

#[async_trait]
impl NarrativeProvider for GroqNarrator {
    fn name(&self) -> &str {
        &self.config.model
    }

    async fn narrate(&self, request: &NarrativeRequest) -> Result<String, NarrativeError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(NarrativeError::MissingApiKey)?;

        let prompt = build_prompt(request, &self.config.language);
        let body = CompletionRequest {
            model: &self.config.model,
            messages: vec![Message {
                role: "user",
                content: &prompt,
            }],
            temperature: self.config.temperature,
            max_completion_tokens: self.config.max_tokens,
            top_p: 1.0,
            stream: false,
        };

        let url = self.config.completions_url();
        debug!(%url, model = %self.config.model, "requesting narrative");

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| NarrativeError::RequestFailed(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| NarrativeError::RequestFailed(e.to_string()))?;

        if !status.is_success() {
            return Err(NarrativeError::ApiError {
                status: status.as_u16(),
                message: Self::error_message(&text),
            });
        }

        Self::parse_response(&text)
    }
}
