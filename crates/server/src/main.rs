//! # autocorr-server
//!
//! REST API server for the autocorr time series statistics engine.

use analysis::{AnalysisCoordinator, NarrativeProvider};
use anyhow::Context;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use narrative::GroqNarrator;
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod routes;

use config::ServerConfig;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub analyzer: AnalysisCoordinator,
    pub narrator: Arc<dyn NarrativeProvider>,
}

/// Liveness probe - is the server running?
async fn liveness() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Readiness probe - can the engine analyse a series right now?
async fn readiness(State(state): State<AppState>) -> Json<serde_json::Value> {
    let started = Instant::now();
    let engine_ok = state.analyzer.analyze_values(vec![1.0, 2.0, 1.5, 3.0]).is_ok();
    Json(serde_json::json!({
        "status": if engine_ok { "ready" } else { "degraded" },
        "version": env!("CARGO_PKG_VERSION"),
        "duration_ms": started.elapsed().as_millis() as u64,
        "checks": [
            { "name": "engine", "healthy": engine_ok },
            { "name": "narrative", "provider": state.narrator.name() }
        ]
    }))
}

fn build_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health endpoints
        .route("/api/health", get(liveness))
        .route("/health/live", get(liveness))
        .route("/health/ready", get(readiness))
        // API endpoints
        .route("/api/parse-csv", post(routes::parse_csv))
        .route("/api/analyze", post(routes::analyze))
        .route("/api/ai-feedback", post(routes::ai_feedback))
        .route("/api/difference", post(routes::difference_series))
        .route("/api/generate-ma", post(routes::generate_ma))
        // Middleware layers
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "autocorr_server=info,analysis_core=info,narrative=info,tower_http=info".into()),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let analyzer = AnalysisCoordinator::new(config.analysis)?;
    let narrator = GroqNarrator::from_env()?;
    if !narrator.is_configured() {
        tracing::warn!("GROQ_API_KEY not set; narrative feedback disabled");
    }

    let state = AppState {
        analyzer,
        narrator: Arc::new(narrator),
    };
    let app = build_router(state);

    let addr = config.socket_addr()?;
    tracing::info!(
        "autocorr-server v{} listening on {} (max lag {}, alpha {})",
        env!("CARGO_PKG_VERSION"),
        addr,
        config.analysis.max_lag,
        config.analysis.significance_level
    );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
