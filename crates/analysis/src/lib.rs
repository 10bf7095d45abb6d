//! # autocorr-analysis
//!
//! Exploratory statistics for a univariate time series: sample ACF, PACF
//! by the Durbin–Levinson recursion, and an OLS trend with a significance
//! test.
//!
//! ## Example
//!
//! ```rust
//! use analysis::{AnalysisCoordinator, SeriesAnalyzer, Series};
//!
//! let series = Series::from_values((1..=10).map(|x| x as f64).collect()).unwrap();
//! let result = AnalysisCoordinator::default().analyze(&series).unwrap();
//! assert!(result.has_trend());
//! assert_eq!(result.pacf[0].value, result.autocorrelations[0].value);
//! ```

pub use analysis_facade::*;
