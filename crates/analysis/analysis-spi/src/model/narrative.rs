//! Narrative feedback request and response bodies.

use serde::{Deserialize, Serialize};

use super::LagCoefficient;

/// Inputs handed to the narrative collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NarrativeRequest {
    pub autocorrelations: Vec<LagCoefficient>,
    #[serde(default)]
    pub trend_coefficient: f64,
}

impl NarrativeRequest {
    /// ACF value at `lag`, or 0 when the lag was not reported.
    pub fn autocorrelation_at(&self, lag: usize) -> f64 {
        self.autocorrelations
            .iter()
            .find(|c| c.lag == lag)
            .map(|c| c.value)
            .unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeResponse {
    pub feedback: String,
}
