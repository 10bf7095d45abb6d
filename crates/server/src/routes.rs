//! API route handlers

use analysis::{
    difference, enrich, parse_series, simulate_ma1, AnalysisError, AnalysisResult, Ma1Config,
    NarrativeRequest, NarrativeResponse, Series, SeriesAnalyzer,
};
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::AppState;

type ApiResult<T> = Result<Json<T>, ApiError>;

#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    #[serde(default)]
    pub content: String,
}

pub async fn parse_csv(Json(req): Json<ParseRequest>) -> ApiResult<Series> {
    if req.content.trim().is_empty() {
        return Err(AnalysisError::EmptyInput.into());
    }
    let series = parse_series(&req.content)?;
    tracing::info!(observations = series.len(), "parsed delimited upload");
    Ok(Json(series))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub values: Vec<f64>,
    /// Enrich the result with a narrative after computing it.
    #[serde(default)]
    pub include_feedback: bool,
}

pub async fn analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> ApiResult<AnalysisResult> {
    let series = Series::from_values(req.values)?;
    let result = state.analyzer.analyze(&series)?;

    let result = if req.include_feedback {
        enrich(result, state.narrator.as_ref()).await
    } else {
        result
    };
    Ok(Json(result))
}

pub async fn ai_feedback(
    State(state): State<AppState>,
    Json(req): Json<NarrativeRequest>,
) -> ApiResult<NarrativeResponse> {
    if req.autocorrelations.is_empty() {
        return Err(ApiError::BadRequest(
            "No autocorrelations provided".to_string(),
        ));
    }
    let feedback = state.narrator.narrate(&req).await?;
    Ok(Json(NarrativeResponse { feedback }))
}

#[derive(Debug, Deserialize)]
pub struct DifferenceRequest {
    #[serde(default)]
    pub values: Vec<f64>,
    #[serde(default)]
    pub labels: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct DifferenceResponse {
    pub data: Series,
    pub analysis: AnalysisResult,
}

pub async fn difference_series(
    State(state): State<AppState>,
    Json(req): Json<DifferenceRequest>,
) -> ApiResult<DifferenceResponse> {
    let series = if req.labels.len() == req.values.len() {
        Series::new(req.values, req.labels)?
    } else {
        if !req.labels.is_empty() {
            tracing::warn!(
                values = req.values.len(),
                labels = req.labels.len(),
                "label count does not match values, using positional labels"
            );
        }
        Series::from_values(req.values)?
    };
    let differenced = difference(&series)?;
    let analysis = state.analyzer.analyze(&differenced)?;

    Ok(Json(DifferenceResponse {
        data: differenced,
        analysis,
    }))
}

pub async fn generate_ma(Json(config): Json<Ma1Config>) -> ApiResult<Series> {
    let series = simulate_ma1(&config)?;
    tracing::info!(n = series.len(), phi1 = config.phi1, "generated MA(1) series");
    Ok(Json(series))
}
