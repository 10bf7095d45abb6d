//! Sample autocorrelation function.

use analysis_spi::{LagCoefficient, Series};
use tracing::debug;

/// Biased sample ACF for lags `1..=max_lag`.
///
/// Every lag is centred on the mean of the whole series and divided by the
/// lag-0 sum of squares, which keeps each value in `[-1, 1]`. Requests
/// beyond `n - 1` are clamped since such lags have no overlapping pairs.
/// A constant series has no variance to normalise by and reports 0 at
/// every lag.
pub fn compute_acf(series: &Series, max_lag: usize) -> Vec<LagCoefficient> {
    let data = series.values();
    let n = data.len();
    let max_lag = max_lag.min(n.saturating_sub(1));

    if is_constant(data) {
        debug!(n, "zero-variance series, ACF reported as 0");
        return zeros(max_lag);
    }

    // ACF is scale-invariant; work in [-1, 1] so the sums cannot overflow.
    let (scaled, _) = normalized(data);
    let mean = scaled.iter().sum::<f64>() / n as f64;
    let centered: Vec<f64> = scaled.iter().map(|x| x - mean).collect();
    let sum_squares: f64 = centered.iter().map(|x| x * x).sum();

    if sum_squares == 0.0 {
        debug!(n, "zero-variance series, ACF reported as 0");
        return zeros(max_lag);
    }

    (1..=max_lag)
        .map(|lag| {
            let covariance: f64 = centered[..n - lag]
                .iter()
                .zip(&centered[lag..])
                .map(|(a, b)| a * b)
                .sum();
            LagCoefficient::new(lag, (covariance / sum_squares).clamp(-1.0, 1.0))
        })
        .collect()
}

fn zeros(max_lag: usize) -> Vec<LagCoefficient> {
    (1..=max_lag).map(|lag| LagCoefficient::new(lag, 0.0)).collect()
}

pub(crate) fn is_constant(data: &[f64]) -> bool {
    data.windows(2).all(|w| w[0] == w[1])
}

/// Divide every value by the largest magnitude in the series.
///
/// Returns the scaled values and the scale factor; an all-zero series
/// keeps a scale of 1.
pub(crate) fn normalized(data: &[f64]) -> (Vec<f64>, f64) {
    let scale = data.iter().fold(0.0_f64, |m, x| m.max(x.abs()));
    if scale == 0.0 {
        return (data.to_vec(), 1.0);
    }
    (data.iter().map(|x| x / scale).collect(), scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[f64]) -> Series {
        Series::from_values(values.to_vec()).unwrap()
    }

    #[test]
    fn test_lag_count_and_order() {
        let s = series(&[1.0, 3.0, 2.0, 5.0, 4.0, 7.0, 6.0, 9.0, 8.0, 10.0]);
        let acf = compute_acf(&s, 5);
        let lags: Vec<usize> = acf.iter().map(|c| c.lag).collect();
        assert_eq!(lags, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_clamps_to_n_minus_one() {
        let s = series(&[1.0, 2.0, 4.0]);
        assert_eq!(compute_acf(&s, 10).len(), 2);
    }

    #[test]
    fn test_known_values() {
        // mean 2.5, sum of squares 5.0
        let s = series(&[1.0, 2.0, 3.0, 4.0]);
        let acf = compute_acf(&s, 3);
        assert!((acf[0].value - 0.25).abs() < 1e-12);
        assert!((acf[1].value - (-0.3)).abs() < 1e-12);
        assert!((acf[2].value - (-0.45)).abs() < 1e-12);
    }

    #[test]
    fn test_alternating_series_is_negative_at_lag_one() {
        let s = series(&[1.0, -1.0, 1.0, -1.0, 1.0, -1.0]);
        let acf = compute_acf(&s, 2);
        assert!(acf[0].value < -0.8);
        assert!(acf[1].value > 0.6);
    }

    #[test]
    fn test_constant_series_is_zero() {
        let s = series(&[5.0, 5.0, 5.0, 5.0, 5.0]);
        let acf = compute_acf(&s, 3);
        assert_eq!(
            acf,
            vec![
                LagCoefficient::new(1, 0.0),
                LagCoefficient::new(2, 0.0),
                LagCoefficient::new(3, 0.0),
            ]
        );
    }

    #[test]
    fn test_constant_with_inexact_mean_is_zero() {
        // 0.1 * 3 / 3 is not exactly 0.1 in binary floating point
        let s = series(&[0.1, 0.1, 0.1]);
        assert!(compute_acf(&s, 2).iter().all(|c| c.value == 0.0));
    }

    #[test]
    fn test_values_bounded() {
        let s = series(&[3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0, 5.0, 3.0, 5.0]);
        for c in compute_acf(&s, 10) {
            assert!(c.value >= -1.0 && c.value <= 1.0, "lag {} = {}", c.lag, c.value);
        }
    }

    #[test]
    fn test_huge_magnitudes_stay_finite() {
        let s = series(&[1e200, -1e200, 3e200, -2e200, 5e200, 1e200]);
        let acf = compute_acf(&s, 5);
        assert_eq!(acf.len(), 5);
        for c in &acf {
            assert!(c.value.is_finite() && c.value.abs() <= 1.0, "lag {} = {}", c.lag, c.value);
        }
        let unit = compute_acf(&series(&[1.0, -1.0, 3.0, -2.0, 5.0, 1.0]), 5);
        for (big, small) in acf.iter().zip(&unit) {
            assert!((big.value - small.value).abs() < 1e-12);
        }
    }

    #[test]
    fn test_tiny_magnitudes_keep_precision() {
        let s = series(&[1e-160, -1e-160, 3e-160, -2e-160, 5e-160, 1e-160]);
        let unit = compute_acf(&series(&[1.0, -1.0, 3.0, -2.0, 5.0, 1.0]), 5);
        for (tiny, expected) in compute_acf(&s, 5).iter().zip(&unit) {
            assert!(tiny.value.is_finite() && tiny.value.abs() <= 1.0);
            assert!((tiny.value - expected.value).abs() < 1e-12);
        }
    }

    #[test]
    fn test_normalized_scale() {
        let (scaled, scale) = normalized(&[2.0, -8.0, 4.0]);
        assert_eq!(scale, 8.0);
        assert_eq!(scaled, vec![0.25, -1.0, 0.5]);
        assert_eq!(normalized(&[0.0, 0.0]).1, 1.0);
    }
}
