//! Narrative feedback provider trait definition.

use async_trait::async_trait;

use crate::error::NarrativeError;
use crate::model::NarrativeRequest;

/// External, best-effort service that interprets analysis numbers as text.
#[async_trait]
pub trait NarrativeProvider: Send + Sync {
    /// Provider name, used in logs.
    fn name(&self) -> &str;

    /// Produce a narrative for the given coefficients.
    async fn narrate(&self, request: &NarrativeRequest) -> Result<String, NarrativeError>;
}
