//! Aggregate analysis result.

use serde::{Deserialize, Serialize};

use super::{LagCoefficient, NarrativeRequest, TrendResult};

/// Ljung–Box portmanteau test over the reported autocorrelations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LjungBox {
    /// Q statistic.
    pub statistic: f64,
    pub p_value: f64,
    /// Number of lags entering the statistic (chi-squared degrees of freedom).
    pub lags: usize,
    /// Whether the white-noise null is rejected at the configured level.
    pub is_significant: bool,
}

/// Everything computed for one series, plus an optional narrative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Number of observations analysed.
    pub observations: usize,
    /// ACF for lags 1..L, ascending.
    pub autocorrelations: Vec<LagCoefficient>,
    /// PACF for lags 1..L, ascending.
    pub pacf: Vec<LagCoefficient>,
    #[serde(flatten)]
    pub trend: TrendResult,
    /// Half-width of the white-noise band for the ACF/PACF plots.
    pub confidence_bound: f64,
    pub ljung_box: LjungBox,
    /// Narrative supplied by an external collaborator after the fact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

impl AnalysisResult {
    pub fn trend_coefficient(&self) -> f64 {
        self.trend.coefficient
    }

    pub fn has_trend(&self) -> bool {
        self.trend.has_trend
    }

    /// Merge a narrative into the result, leaving every statistic untouched.
    pub fn with_narrative(self, feedback: impl Into<String>) -> Self {
        Self {
            feedback: Some(feedback.into()),
            ..self
        }
    }

    /// The inputs the narrative collaborator is allowed to see.
    pub fn narrative_request(&self) -> NarrativeRequest {
        NarrativeRequest {
            autocorrelations: self.autocorrelations.clone(),
            trend_coefficient: self.trend.coefficient,
        }
    }

    /// ACF lags whose magnitude exceeds the confidence band.
    pub fn significant_lags(&self) -> Vec<usize> {
        self.autocorrelations
            .iter()
            .filter(|c| c.exceeds(self.confidence_bound))
            .map(|c| c.lag)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AnalysisResult {
        AnalysisResult {
            observations: 10,
            autocorrelations: vec![LagCoefficient::new(1, 0.7), LagCoefficient::new(2, 0.1)],
            pacf: vec![LagCoefficient::new(1, 0.7), LagCoefficient::new(2, -0.2)],
            trend: TrendResult {
                coefficient: 0.95,
                intercept: 0.27,
                has_trend: true,
                standard_error: Some(0.1),
                t_statistic: Some(9.5),
                critical_value: Some(2.306),
            },
            confidence_bound: 0.62,
            ljung_box: LjungBox {
                statistic: 7.0,
                p_value: 0.03,
                lags: 2,
                is_significant: true,
            },
            feedback: None,
        }
    }

    #[test]
    fn test_serializes_flat_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["trendCoefficient"], 0.95);
        assert_eq!(json["hasTrend"], true);
        assert_eq!(json["autocorrelations"][0]["lag"], 1);
        assert_eq!(json["pacf"][1]["value"], -0.2);
        assert_eq!(json["ljungBox"]["pValue"], 0.03);
        assert!(json.get("feedback").is_none());
    }

    #[test]
    fn test_with_narrative_keeps_statistics() {
        let original = sample();
        let enriched = original.clone().with_narrative("Strong persistence.");
        assert_eq!(enriched.feedback.as_deref(), Some("Strong persistence."));
        assert_eq!(enriched.autocorrelations, original.autocorrelations);
        assert_eq!(enriched.trend, original.trend);
    }

    #[test]
    fn test_narrative_request_carries_acf_and_slope() {
        let request = sample().narrative_request();
        assert_eq!(request.autocorrelations.len(), 2);
        assert_eq!(request.trend_coefficient, 0.95);
    }

    #[test]
    fn test_significant_lags() {
        assert_eq!(sample().significant_lags(), vec![1]);
    }
}
