//! White-noise reference statistics for correlograms.

use analysis_api::validate_significance_level;
use analysis_spi::{LagCoefficient, LjungBox, Result};
use statrs::distribution::{ChiSquared, ContinuousCDF, Normal};

/// Half-width of the two-sided white-noise band `z_{1-alpha/2} / sqrt(n)`.
///
/// ACF and PACF values outside `±bound` are distinguishable from zero at
/// the given level. Fails with `InvalidParameter` unless
/// `0 < significance_level < 1`.
pub fn confidence_bound(n: usize, significance_level: f64) -> Result<f64> {
    validate_significance_level(significance_level)?;
    if n == 0 {
        return Ok(f64::INFINITY);
    }
    let z = Normal::standard().inverse_cdf(1.0 - significance_level / 2.0);
    Ok(z / (n as f64).sqrt())
}

/// Ljung–Box test that the reported autocorrelations are jointly zero.
///
/// `Q = n(n+2) * sum(r_k^2 / (n-k))`, compared against chi-squared with one
/// degree of freedom per lag.
pub fn ljung_box(acf: &[LagCoefficient], n: usize, significance_level: f64) -> LjungBox {
    let lags = acf.len();
    if lags == 0 {
        return LjungBox {
            statistic: 0.0,
            p_value: 1.0,
            lags,
            is_significant: false,
        };
    }

    let nf = n as f64;
    let sum: f64 = acf
        .iter()
        .filter(|c| c.lag < n)
        .map(|c| c.value * c.value / (n - c.lag) as f64)
        .sum();
    let statistic = nf * (nf + 2.0) * sum;

    let p_value = match ChiSquared::new(lags as f64) {
        Ok(chi2) => chi2.sf(statistic),
        Err(_) => 1.0,
    };

    LjungBox {
        statistic,
        p_value,
        lags,
        is_significant: p_value < significance_level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bound_for_hundred_observations() {
        let bound = confidence_bound(100, 0.05).unwrap();
        assert!((bound - 0.196).abs() < 1e-3);
    }

    #[test]
    fn test_bound_shrinks_with_n() {
        assert!(confidence_bound(400, 0.05).unwrap() < confidence_bound(100, 0.05).unwrap());
    }

    #[test]
    fn test_bound_rejects_out_of_range_level() {
        for level in [0.0, 1.0, 1.5, -0.1] {
            assert!(confidence_bound(50, level).is_err());
        }
    }

    #[test]
    fn test_ljung_box_zero_acf() {
        let acf = vec![LagCoefficient::new(1, 0.0), LagCoefficient::new(2, 0.0)];
        let result = ljung_box(&acf, 10, 0.05);
        assert_eq!(result.statistic, 0.0);
        assert!((result.p_value - 1.0).abs() < 1e-12);
        assert!(!result.is_significant);
    }

    #[test]
    fn test_ljung_box_statistic() {
        // Q = 10 * 12 * (0.25/9 + 0.04/8)
        let acf = vec![LagCoefficient::new(1, 0.5), LagCoefficient::new(2, 0.2)];
        let result = ljung_box(&acf, 10, 0.05);
        let expected = 120.0 * (0.25 / 9.0 + 0.04 / 8.0);
        assert!((result.statistic - expected).abs() < 1e-10);
        assert_eq!(result.lags, 2);
        assert!(result.p_value > 0.0 && result.p_value < 1.0);
    }

    #[test]
    fn test_ljung_box_strong_correlation_is_significant() {
        let acf: Vec<LagCoefficient> = (1..=5)
            .map(|lag| LagCoefficient::new(lag, 0.9_f64.powi(lag as i32)))
            .collect();
        assert!(ljung_box(&acf, 200, 0.05).is_significant);
    }

    #[test]
    fn test_ljung_box_without_lags() {
        let result = ljung_box(&[], 1, 0.05);
        assert_eq!(result.lags, 0);
        assert!(!result.is_significant);
    }
}
