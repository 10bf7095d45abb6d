//! Orchestrates the engines over one series.

use analysis_api::AnalysisConfig;
use analysis_spi::{AnalysisError, AnalysisResult, Result, Series, SeriesAnalyzer};
use tracing::debug;

use crate::acf::compute_acf;
use crate::ingest::MIN_OBSERVATIONS;
use crate::pacf::compute_pacf_with_epsilon;
use crate::trend::TrendEstimator;
use crate::white_noise::{confidence_bound, ljung_box};

/// Runs ACF, trend and PACF over a series and assembles the result.
///
/// Stateless apart from its configuration; one coordinator can serve any
/// number of concurrent requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalysisCoordinator {
    config: AnalysisConfig,
}

impl AnalysisCoordinator {
    /// Create a coordinator, validating the configuration.
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyse bare values labelled by position.
    pub fn analyze_values(&self, values: Vec<f64>) -> Result<AnalysisResult> {
        self.analyze(&Series::from_values(values)?)
    }
}

impl SeriesAnalyzer for AnalysisCoordinator {
    fn analyze(&self, series: &Series) -> Result<AnalysisResult> {
        let n = series.len();
        if n < MIN_OBSERVATIONS {
            return Err(AnalysisError::InsufficientData {
                required: MIN_OBSERVATIONS,
                got: n,
            });
        }

        let level = self.config.significance_level;
        let lags = self.config.lags_for(n);

        let autocorrelations = compute_acf(series, lags);
        let trend = TrendEstimator::new(level)?.estimate(series);
        // PACF needs the complete ACF table.
        let pacf = compute_pacf_with_epsilon(&autocorrelations, lags, self.config.pacf_epsilon);
        let ljung_box = ljung_box(&autocorrelations, n, level);

        debug!(
            n,
            lags,
            slope = trend.coefficient,
            has_trend = trend.has_trend,
            "analysis complete"
        );

        Ok(AnalysisResult {
            observations: n,
            autocorrelations,
            pacf,
            trend,
            confidence_bound: confidence_bound(n, level)?,
            ljung_box,
            feedback: None,
        })
    }
}
