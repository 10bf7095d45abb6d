//! Data models for time series analysis.
//!
//! All records are immutable values; nothing is mutated after construction.

mod analysis_result;
mod lag_coefficient;
mod narrative;
mod raw_row;
mod series;
mod trend_result;

pub use analysis_result::{AnalysisResult, LjungBox};
pub use lag_coefficient::LagCoefficient;
pub use narrative::{NarrativeRequest, NarrativeResponse};
pub use raw_row::{Cell, RawRow};
pub use series::Series;
pub use trend_result::TrendResult;
