//! Partial autocorrelation via the Durbin–Levinson recursion.

use analysis_api::DEFAULT_PACF_EPSILON;
use analysis_spi::LagCoefficient;
use tracing::debug;

/// PACF for lags `1..=max_lag` from an ACF table starting at lag 1.
///
/// Uses the default denominator floor; see [`compute_pacf_with_epsilon`].
pub fn compute_pacf(acf: &[LagCoefficient], max_lag: usize) -> Vec<LagCoefficient> {
    compute_pacf_with_epsilon(acf, max_lag, DEFAULT_PACF_EPSILON)
}

/// PACF for lags `1..=max_lag`, short-circuiting once the recursion
/// denominator drops below `epsilon`.
///
/// `acf[i]` must hold the autocorrelation at lag `i + 1`. The order-k
/// coefficients `phi_k[1..=k]` are derived from `phi_{k-1}` kept in a second
/// working array; the value reported at lag k is `phi_k[k]`. The
/// denominator is the innovation variance ratio
/// `v_k = v_{k-1} * (1 - phi_k[k]^2)` with `v_0 = 1`. When it vanishes (a
/// highly persistent series) the remaining lags are reported as 0.
pub fn compute_pacf_with_epsilon(
    acf: &[LagCoefficient],
    max_lag: usize,
    epsilon: f64,
) -> Vec<LagCoefficient> {
    let max_lag = max_lag.min(acf.len());

    // r[k] is the autocorrelation at lag k; r[0] is never read.
    let mut r = vec![0.0; max_lag + 1];
    for (i, coefficient) in acf.iter().take(max_lag).enumerate() {
        debug_assert_eq!(coefficient.lag, i + 1, "ACF must start at lag 1 without gaps");
        r[i + 1] = coefficient.value;
    }

    let mut phi = vec![0.0; max_lag + 1];
    let mut prev = vec![0.0; max_lag + 1];
    let mut denominator = 1.0;
    let mut pacf = Vec::with_capacity(max_lag);

    for k in 1..=max_lag {
        if denominator < epsilon {
            debug!(lag = k, denominator, "PACF recursion degenerate, remaining lags set to 0");
            pacf.extend((k..=max_lag).map(|lag| LagCoefficient::new(lag, 0.0)));
            break;
        }

        let mut numerator = r[k];
        for j in 1..k {
            numerator -= prev[j] * r[k - j];
        }

        let phi_kk = numerator / denominator;
        phi[k] = phi_kk;
        for j in 1..k {
            phi[j] = prev[j] - phi_kk * prev[k - j];
        }

        denominator *= 1.0 - phi_kk * phi_kk;
        pacf.push(LagCoefficient::new(k, phi_kk));
        prev[..=k].copy_from_slice(&phi[..=k]);
    }

    pacf
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acf_from(values: &[f64]) -> Vec<LagCoefficient> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| LagCoefficient::new(i + 1, v))
            .collect()
    }

    #[test]
    fn test_lag_one_equals_acf() {
        let acf = acf_from(&[0.6, 0.2, -0.1]);
        let pacf = compute_pacf(&acf, 3);
        assert_eq!(pacf[0].value, acf[0].value);
    }

    #[test]
    fn test_ar1_pattern_cuts_off_after_lag_one() {
        // Theoretical AR(1) with phi = 0.5: rho_k = 0.5^k
        let acf = acf_from(&[0.5, 0.25, 0.125, 0.0625]);
        let pacf = compute_pacf(&acf, 4);
        assert!((pacf[0].value - 0.5).abs() < 1e-12);
        for c in &pacf[1..] {
            assert!(c.value.abs() < 1e-12, "lag {} = {}", c.lag, c.value);
        }
    }

    #[test]
    fn test_lag_two_closed_form() {
        // phi_22 = (r2 - r1^2) / (1 - r1^2)
        let acf = acf_from(&[0.6, 0.5]);
        let pacf = compute_pacf(&acf, 2);
        let expected = (0.5 - 0.36) / (1.0 - 0.36);
        assert!((pacf[1].value - expected).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_denominator_short_circuits() {
        let acf = acf_from(&[1.0, 1.0, 1.0, 1.0]);
        let pacf = compute_pacf(&acf, 4);
        assert_eq!(pacf.len(), 4);
        assert_eq!(pacf[0].value, 1.0);
        assert!(pacf[1..].iter().all(|c| c.value == 0.0));
        assert!(pacf.iter().all(|c| c.value.is_finite()));
    }

    #[test]
    fn test_custom_epsilon_triggers_earlier() {
        // v_1 = 1 - 0.99^2 = 0.0199
        let acf = acf_from(&[0.99, 0.98, 0.97]);
        let strict = compute_pacf_with_epsilon(&acf, 3, 0.05);
        assert_eq!(strict[0].value, 0.99);
        assert_eq!(strict[1].value, 0.0);
        assert_eq!(strict[2].value, 0.0);

        let loose = compute_pacf_with_epsilon(&acf, 3, 1e-10);
        assert!(loose[1].value != 0.0);
    }

    #[test]
    fn test_zero_acf_gives_zero_pacf() {
        let acf = acf_from(&[0.0, 0.0, 0.0]);
        assert!(compute_pacf(&acf, 3).iter().all(|c| c.value == 0.0));
    }

    #[test]
    fn test_max_lag_clamped_to_acf_length() {
        let acf = acf_from(&[0.3]);
        let pacf = compute_pacf(&acf, 5);
        assert_eq!(pacf.len(), 1);
        assert_eq!(pacf[0].lag, 1);
    }
}
