//! Time Series Analysis Core
//!
//! Implementations of the statistics engine: ingestion, ACF, PACF, trend,
//! the coordinator that ties them together, and a few supporting
//! transforms used by the outer surfaces.

mod acf;
mod coordinator;
mod enrich;
mod ingest;
mod pacf;
mod parse;
mod simulate;
mod transform;
mod trend;
mod white_noise;

pub use acf::compute_acf;
pub use coordinator::AnalysisCoordinator;
pub use enrich::enrich;
pub use ingest::{ingest, MIN_OBSERVATIONS};
pub use pacf::{compute_pacf, compute_pacf_with_epsilon};
pub use parse::{parse_delimited, parse_delimited_with, parse_series};
pub use simulate::{simulate_ma1, simulate_ma1_with};
pub use transform::difference;
pub use trend::{estimate_trend, TrendEstimator};
pub use white_noise::{confidence_bound, ljung_box};
