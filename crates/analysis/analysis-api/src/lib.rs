//! Time Series Analysis API
//!
//! Configuration types and builders for the statistics engine.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use analysis_spi::{
    AnalysisError, AnalysisResult, Cell, LagCoefficient, LjungBox, NarrativeRequest,
    NarrativeResponse, RawRow, Result, Series, TrendResult,
};

/// Default number of lags reported for ACF and PACF.
pub const DEFAULT_MAX_LAG: usize = 10;

/// Default two-sided significance level.
pub const DEFAULT_SIGNIFICANCE_LEVEL: f64 = 0.05;

/// Default floor for the Durbin–Levinson denominator.
pub const DEFAULT_PACF_EPSILON: f64 = 1e-10;

// ============================================================================
// Analysis Configuration
// ============================================================================

/// Policy constants of the statistics engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalysisConfig {
    /// Lag cap; the effective lag count is `min(max_lag, n - 1)` (default: 10).
    pub max_lag: usize,
    /// Two-sided significance level for the trend test and the ACF band (default: 0.05).
    pub significance_level: f64,
    /// Durbin–Levinson denominator floor (default: 1e-10).
    pub pacf_epsilon: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_lag: DEFAULT_MAX_LAG,
            significance_level: DEFAULT_SIGNIFICANCE_LEVEL,
            pacf_epsilon: DEFAULT_PACF_EPSILON,
        }
    }
}

impl AnalysisConfig {
    pub fn new(max_lag: usize, significance_level: f64) -> Self {
        Self {
            max_lag,
            significance_level,
            ..Self::default()
        }
    }

    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::new()
    }

    /// Number of lags to report for a series of length `n`.
    pub fn lags_for(&self, n: usize) -> usize {
        self.max_lag.min(n.saturating_sub(1))
    }

    /// Check every field is usable.
    pub fn validate(&self) -> Result<()> {
        if self.max_lag == 0 {
            return Err(AnalysisError::invalid_parameter(
                "max_lag",
                "must be at least 1",
            ));
        }
        validate_significance_level(self.significance_level)?;
        if !(self.pacf_epsilon.is_finite() && self.pacf_epsilon > 0.0) {
            return Err(AnalysisError::invalid_parameter(
                "pacf_epsilon",
                "must be a positive finite number",
            ));
        }
        Ok(())
    }
}

/// Reject significance levels outside the open interval (0, 1).
pub fn validate_significance_level(level: f64) -> Result<()> {
    if level > 0.0 && level < 1.0 {
        Ok(())
    } else {
        Err(AnalysisError::invalid_parameter(
            "significance_level",
            "must be in the open interval (0, 1)",
        ))
    }
}

/// Builder for AnalysisConfig.
#[derive(Debug, Default)]
pub struct AnalysisConfigBuilder {
    max_lag: Option<usize>,
    significance_level: Option<f64>,
    pacf_epsilon: Option<f64>,
}

impl AnalysisConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_lag(mut self, max_lag: usize) -> Self {
        self.max_lag = Some(max_lag);
        self
    }

    pub fn significance_level(mut self, level: f64) -> Self {
        self.significance_level = Some(level);
        self
    }

    pub fn pacf_epsilon(mut self, epsilon: f64) -> Self {
        self.pacf_epsilon = Some(epsilon);
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<AnalysisConfig> {
        let defaults = AnalysisConfig::default();
        let config = AnalysisConfig {
            max_lag: self.max_lag.unwrap_or(defaults.max_lag),
            significance_level: self
                .significance_level
                .unwrap_or(defaults.significance_level),
            pacf_epsilon: self.pacf_epsilon.unwrap_or(defaults.pacf_epsilon),
        };
        config.validate()?;
        Ok(config)
    }
}

// ============================================================================
// MA(1) Simulation Configuration
// ============================================================================

/// Parameters of a synthetic MA(1) series `x_t = e_t + phi1 * e_{t-1}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Ma1Config {
    /// Number of samples (default: 100).
    pub n_samples: usize,
    /// Moving-average coefficient (default: 0.5).
    pub phi1: f64,
    /// Innovation variance (default: 1.0).
    pub variance: f64,
    /// RNG seed; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for Ma1Config {
    fn default() -> Self {
        Self {
            n_samples: 100,
            phi1: 0.5,
            variance: 1.0,
            seed: None,
        }
    }
}

impl Ma1Config {
    pub fn new(n_samples: usize, phi1: f64, variance: f64) -> Self {
        Self {
            n_samples,
            phi1,
            variance,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.n_samples == 0 {
            return Err(AnalysisError::invalid_parameter(
                "n_samples",
                "must be positive",
            ));
        }
        if !self.phi1.is_finite() {
            return Err(AnalysisError::invalid_parameter("phi1", "must be finite"));
        }
        if !(self.variance.is_finite() && self.variance >= 0.0) {
            return Err(AnalysisError::invalid_parameter(
                "variance",
                "must be a non-negative finite number",
            ));
        }
        Ok(())
    }
}
