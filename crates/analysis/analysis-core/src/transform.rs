//! Series transforms.

use analysis_spi::{AnalysisError, Result, Series};

use crate::ingest::MIN_OBSERVATIONS;

/// First difference `x_t - x_{t-1}`.
///
/// The result is one observation shorter and keeps the labels from the
/// second observation onward, so each difference is labelled by the later
/// of its two points.
pub fn difference(series: &Series) -> Result<Series> {
    if series.len() < MIN_OBSERVATIONS {
        return Err(AnalysisError::InsufficientData {
            required: MIN_OBSERVATIONS,
            got: series.len(),
        });
    }

    let values = series.values().windows(2).map(|w| w[1] - w[0]).collect();
    let labels = series.labels()[1..].to_vec();
    Series::new(values, labels)
}
