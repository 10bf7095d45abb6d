//! Time Series Analysis Service Provider Interface
//!
//! Defines the value records, error types and traits shared by the
//! statistics engine, the narrative client and the outer surfaces.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{NarrativeProvider, SeriesAnalyzer};
pub use error::{AnalysisError, NarrativeError, Result};
pub use model::{
    AnalysisResult, Cell, LagCoefficient, LjungBox, NarrativeRequest, NarrativeResponse, RawRow,
    Series, TrendResult,
};
