//! Contract definitions for time series analysis.
//!
//! This module contains trait definitions that providers must implement.

mod narrative_provider;
mod series_analyzer;

pub use narrative_provider::NarrativeProvider;
pub use series_analyzer::SeriesAnalyzer;
