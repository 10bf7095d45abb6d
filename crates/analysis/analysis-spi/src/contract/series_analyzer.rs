//! Series analyzer trait definition.

use crate::error::Result;
use crate::model::{AnalysisResult, Series};

/// Turns one clean series into its full statistics table.
///
/// Implementations are pure: the same series always yields the same result.
pub trait SeriesAnalyzer: Send + Sync {
    /// Compute ACF, PACF and trend for `series`.
    fn analyze(&self, series: &Series) -> Result<AnalysisResult>;
}
