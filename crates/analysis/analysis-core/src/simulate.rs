//! Synthetic MA(1) series for exploring correlogram shapes.

use analysis_api::Ma1Config;
use analysis_spi::{AnalysisError, Result, Series};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use tracing::debug;

/// Draw an MA(1) series as configured, seeding the generator when a seed is
/// given.
pub fn simulate_ma1(config: &Ma1Config) -> Result<Series> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    simulate_ma1_with(config, &mut rng)
}

/// Draw `x_t = e_t + phi1 * e_{t-1}` for `t = 1..=n` with
/// `e ~ N(0, variance)`, using the caller's generator.
pub fn simulate_ma1_with<R: Rng + ?Sized>(config: &Ma1Config, rng: &mut R) -> Result<Series> {
    config.validate()?;

    let noise = Normal::new(0.0, config.variance.sqrt())
        .map_err(|e| AnalysisError::invalid_parameter("variance", e.to_string()))?;

    let mut previous: f64 = noise.sample(rng);
    let values: Vec<f64> = (0..config.n_samples)
        .map(|_| {
            let current: f64 = noise.sample(rng);
            let x = current + config.phi1 * previous;
            previous = current;
            x
        })
        .collect();

    debug!(n = values.len(), phi1 = config.phi1, "simulated MA(1) series");
    Series::from_values(values)
}
