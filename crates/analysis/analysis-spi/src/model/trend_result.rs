//! Linear trend estimate.

use serde::{Deserialize, Serialize};

/// OLS trend of a series against its 1-based index.
///
/// `has_trend` is decided by the estimator from the slope, the sample size
/// and the significance rule; it is never set independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendResult {
    /// Slope per index step.
    #[serde(rename = "trendCoefficient")]
    pub coefficient: f64,
    pub intercept: f64,
    pub has_trend: bool,
    /// Standard error of the slope; `None` when the residual variance is undefined.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard_error: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub t_statistic: Option<f64>,
    /// Two-sided Student-t critical value at the configured level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical_value: Option<f64>,
}
