//! Linear trend estimation with a slope significance test.

use analysis_api::{validate_significance_level, DEFAULT_SIGNIFICANCE_LEVEL};
use analysis_spi::{Result, Series, TrendResult};
use statrs::distribution::{ContinuousCDF, StudentsT};
use tracing::{debug, warn};

use crate::acf::{is_constant, normalized};

/// Estimate the trend at the default significance level.
pub fn estimate_trend(series: &Series) -> TrendResult {
    TrendEstimator::default().estimate(series)
}

/// OLS slope of a series against the index `1..=n`, with a two-sided
/// t-test of the null hypothesis that the slope is zero.
#[derive(Debug, Clone, Copy)]
pub struct TrendEstimator {
    significance_level: f64,
}

impl Default for TrendEstimator {
    fn default() -> Self {
        Self {
            significance_level: DEFAULT_SIGNIFICANCE_LEVEL,
        }
    }
}

impl TrendEstimator {
    /// Fails with `InvalidParameter` unless `0 < significance_level < 1`.
    pub fn new(significance_level: f64) -> Result<Self> {
        validate_significance_level(significance_level)?;
        Ok(Self { significance_level })
    }

    pub fn significance_level(&self) -> f64 {
        self.significance_level
    }

    pub fn estimate(&self, series: &Series) -> TrendResult {
        let data = series.values();
        let n = data.len();

        if n < 2 || is_constant(data) {
            return TrendResult {
                coefficient: 0.0,
                intercept: data.first().copied().unwrap_or(0.0),
                has_trend: false,
                standard_error: None,
                t_statistic: None,
                critical_value: None,
            };
        }

        // The fit runs on values scaled into [-1, 1]; slope, intercept and
        // standard error are scaled back, the t statistic is unchanged.
        let (scaled, scale) = normalized(data);

        let nf = n as f64;
        let mean_x = (nf + 1.0) / 2.0;
        let mean_y = scaled.iter().sum::<f64>() / nf;

        let mut sxx = 0.0;
        let mut sxy = 0.0;
        for (i, &y) in scaled.iter().enumerate() {
            let dx = (i + 1) as f64 - mean_x;
            sxx += dx * dx;
            sxy += dx * (y - mean_y);
        }
        let slope = sxy / sxx;
        let intercept = mean_y - slope * mean_x;

        // No residual degrees of freedom.
        if n == 2 {
            return TrendResult {
                coefficient: slope * scale,
                intercept: intercept * scale,
                has_trend: slope != 0.0,
                standard_error: None,
                t_statistic: None,
                critical_value: None,
            };
        }

        let df = n - 2;
        let sse: f64 = scaled
            .iter()
            .enumerate()
            .map(|(i, &y)| {
                let fitted = intercept + slope * (i + 1) as f64;
                (y - fitted).powi(2)
            })
            .sum();
        let standard_error = (sse / df as f64 / sxx).sqrt();
        let critical_value = self.critical_value(df);

        let (has_trend, t_statistic) = if slope == 0.0 {
            (false, Some(0.0))
        } else if standard_error == 0.0 {
            // Perfect fit with a non-zero slope.
            (true, None)
        } else {
            let t = slope / standard_error;
            let significant = match critical_value {
                Some(critical) => t.abs() > critical,
                None => false,
            };
            (significant, Some(t))
        };

        let coefficient = slope * scale;
        debug!(n, slope = coefficient, ?t_statistic, has_trend, "estimated trend");

        TrendResult {
            coefficient,
            intercept: intercept * scale,
            has_trend,
            standard_error: Some(standard_error * scale),
            t_statistic,
            critical_value,
        }
    }

    /// Upper `1 - alpha/2` quantile of Student's t with `df` degrees of freedom.
    fn critical_value(&self, df: usize) -> Option<f64> {
        match StudentsT::new(0.0, 1.0, df as f64) {
            Ok(dist) => Some(dist.inverse_cdf(1.0 - self.significance_level / 2.0)),
            Err(e) => {
                warn!(df, error = %e, "cannot build Student-t distribution");
                None
            }
        }
    }
}
