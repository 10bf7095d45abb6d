//! Error types for time series analysis.
//!
//! This module contains error types and the Result alias.

mod analysis_error;
mod narrative_error;

pub use analysis_error::{AnalysisError, Result};
pub use narrative_error::NarrativeError;
