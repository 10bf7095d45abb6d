//! Raw rows to clean series.

use analysis_spi::{AnalysisError, RawRow, Result, Series};
use tracing::debug;

/// Fewest numeric observations any statistic is computed from.
pub const MIN_OBSERVATIONS: usize = 2;

/// Coerce raw rows into a [`Series`].
///
/// Cells that do not parse to a finite number are dropped together with
/// their label. Gaps are never interpolated, so no synthetic correlation
/// enters the later statistics.
pub fn ingest<I>(rows: I) -> Result<Series>
where
    I: IntoIterator<Item = RawRow>,
{
    let mut values = Vec::new();
    let mut labels = Vec::new();
    let mut dropped = 0usize;

    for row in rows {
        match row.cell.as_number() {
            Some(value) => {
                values.push(value);
                labels.push(row.label);
            }
            None => dropped += 1,
        }
    }

    if values.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }
    if values.len() < MIN_OBSERVATIONS {
        return Err(AnalysisError::InsufficientData {
            required: MIN_OBSERVATIONS,
            got: values.len(),
        });
    }

    debug!(kept = values.len(), dropped, "ingested series");
    Series::new(values, labels)
}
