//! # narrative
//!
//! Natural-language interpretation of analysis results, produced by an
//! external chat-completion service. Calls are best effort: callers
//! enrich an already computed result and tolerate the service being
//! unavailable.

mod config;
mod groq;
mod prompt;

pub use analysis_spi::{NarrativeError, NarrativeProvider, NarrativeRequest, NarrativeResponse};
pub use config::NarrativeConfig;
pub use groq::GroqNarrator;
pub use prompt::{build_prompt, PROMPT_LAGS};
