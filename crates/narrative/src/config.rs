//! Narrative service configuration.

use std::env;
use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Connection and generation settings for the chat-completion service.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrativeConfig {
    /// Bearer token; without it every call fails fast with `MissingApiKey`.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Base URL of an OpenAI-compatible API, without the trailing path.
    pub base_url: String,
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub timeout_secs: u64,
    /// Language the narrative is written in.
    pub language: String,
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.groq.com/openai/v1".to_string(),
            model: "llama-3.3-70b-versatile".to_string(),
            temperature: 0.7,
            max_tokens: 1024,
            timeout_secs: 30,
            language: "English".to_string(),
        }
    }
}

impl NarrativeConfig {
    /// Read `GROQ_API_KEY`, `NARRATIVE_BASE_URL`, `NARRATIVE_MODEL` and
    /// `NARRATIVE_LANGUAGE`, keeping defaults for anything unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_key: env::var("GROQ_API_KEY").ok().filter(|k| !k.trim().is_empty()),
            base_url: env::var("NARRATIVE_BASE_URL").unwrap_or(defaults.base_url),
            model: env::var("NARRATIVE_MODEL").unwrap_or(defaults.model),
            language: env::var("NARRATIVE_LANGUAGE").unwrap_or(defaults.language),
            ..defaults
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

impl fmt::Debug for NarrativeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NarrativeConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("timeout_secs", &self.timeout_secs)
            .field("language", &self.language)
            .finish()
    }
}
