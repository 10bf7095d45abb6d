//! Time Series Analysis Facade
//!
//! Unified re-exports for the analysis module.
//!
//! This facade provides a single entry point to all analysis functionality:
//! - `Series`, `AnalysisResult` and the provider traits from SPI
//! - Configuration types from API
//! - Engines and the `AnalysisCoordinator` from Core

// Re-export everything from SPI
pub use analysis_spi::*;

// Re-export everything from API
pub use analysis_api::*;

// Re-export everything from Core
pub use analysis_core::*;
