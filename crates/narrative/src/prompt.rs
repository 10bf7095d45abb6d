//! Prompt construction.

use analysis_spi::NarrativeRequest;

/// Lags quoted in the prompt.
pub const PROMPT_LAGS: usize = 5;

/// Build the instruction sent to the language model.
pub fn build_prompt(request: &NarrativeRequest, language: &str) -> String {
    let lags: String = (1..=PROMPT_LAGS)
        .map(|lag| format!("- lag{}: {:.4}\n", lag, request.autocorrelation_at(lag)))
        .collect();

    format!(
        "You are an expert in time series analysis. Based on the data below, \
         give a concise interpretation of this series.\n\n\
         Autocorrelation coefficients:\n{lags}\n\
         Trend coefficient (slope per observation): {trend:.4}\n\n\
         Cover briefly:\n\
         1. What the autocorrelation coefficients and their pattern indicate\n\
         2. The trend coefficient and its direction\n\
         3. A short conclusion about the behaviour of the series\n\n\
         Answer in {language}, professionally. Reply with the analysis only.",
        lags = lags,
        trend = request.trend_coefficient,
        language = language,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use analysis_spi::LagCoefficient;

    #[test]
    fn test_prompt_quotes_first_five_lags() {
        let request = NarrativeRequest {
            autocorrelations: (1..=8)
                .map(|lag| LagCoefficient::new(lag, lag as f64 / 10.0))
                .collect(),
            trend_coefficient: 0.95154,
        };
        let prompt = build_prompt(&request, "English");
        assert!(prompt.contains("- lag1: 0.1000"));
        assert!(prompt.contains("- lag5: 0.5000"));
        assert!(!prompt.contains("lag6"));
        assert!(prompt.contains("0.9515"));
        assert!(prompt.contains("Answer in English"));
    }

    #[test]
    fn test_missing_lags_are_zero() {
        let request = NarrativeRequest {
            autocorrelations: vec![LagCoefficient::new(1, -0.25)],
            trend_coefficient: 0.0,
        };
        let prompt = build_prompt(&request, "Persian");
        assert!(prompt.contains("- lag1: -0.2500"));
        assert!(prompt.contains("- lag3: 0.0000"));
    }
}
