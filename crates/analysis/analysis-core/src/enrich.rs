//! Best-effort narrative enrichment of a finished analysis.

use analysis_spi::{AnalysisResult, NarrativeProvider};
use tracing::{info, warn};

/// Ask `provider` for a narrative and merge it into `result`.
///
/// Any provider failure is logged and the result is returned unchanged.
pub async fn enrich<P>(result: AnalysisResult, provider: &P) -> AnalysisResult
where
    P: NarrativeProvider + ?Sized,
{
    let request = result.narrative_request();
    match provider.narrate(&request).await {
        Ok(feedback) => {
            info!(provider = provider.name(), "narrative attached");
            result.with_narrative(feedback)
        }
        Err(e) => {
            warn!(provider = provider.name(), error = %e, "narrative unavailable");
            result
        }
    }
}
