//! Narrative feedback error types.

use thiserror::Error;

/// Failures of the external narrative-feedback service.
#[derive(Debug, Clone, Error)]
pub enum NarrativeError {
    /// No API key configured
    #[error("Narrative service is not configured: missing API key")]
    MissingApiKey,

    /// HTTP request failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Non-success status from the provider
    #[error("API error [{status}]: {message}")]
    ApiError { status: u16, message: String },

    /// Provider answered without any text
    #[error("Narrative service returned an empty response")]
    EmptyResponse,
}
