//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::{DefaultBodyLimit, State},
    response::Json,
    routing::get,
    routing::post,
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::api;
use crate::models::{
    AppConfig, AqiLevel, Concern, ImpactFactors, PollutantLevels, ScoreBand, ToneSensitivity,
};
use crate::services::AnalysisService;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Glowscan API",
        description = "Skin tone scan service with a near-duplicate result cache",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(
        api::handle_analyze,
        api::handle_cache_stats,
        api::handle_cache_clear,
        api::handle_aqi,
        api::handle_pollution_score,
        api::handle_skin_score,
    ),
    components(schemas(
        api::AnalysisResponse,
        api::CacheStatsResponse,
        api::AqiResponse,
        api::PollutionScoreRequest,
        api::PollutionScoreResponse,
        api::SkinScoreRequest,
        api::SkinScoreResponse,
        AqiLevel,
        PollutantLevels,
        ImpactFactors,
        ToneSensitivity,
        Concern,
        ScoreBand,
    )),
    tags(
        (name = "Analysis", description = "Skin tone classification"),
        (name = "Cache", description = "Scan session cache"),
        (name = "Environment", description = "Air quality and pollution impact")
    )
)]
pub struct ApiDoc;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub analysis: Arc<AnalysisService>,
}

/// Create application state from a loaded configuration.
pub fn create_app_state(config: AppConfig) -> AppState {
    let analysis = Arc::new(AnalysisService::new(&config));

    AppState {
        config: Arc::new(config),
        analysis,
    }
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.limits.max_upload_bytes;

    Router::new()
        .route("/api/analyze", post(handle_analyze))
        .route(
            "/api/cache",
            get(handle_cache_stats).delete(handle_cache_clear),
        )
        .route("/api/aqi/:index", get(api::handle_aqi))
        .route("/api/pollution/score", post(api::handle_pollution_score))
        .route("/api/skin-score", post(api::handle_skin_score))
        // Health check
        .route("/health", get(|| async { "OK" }))
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
}

// Wrapper handlers to extract state components for the underlying API handlers

async fn handle_analyze(
    State(state): State<AppState>,
    body: axum::body::Bytes,
) -> Result<Json<api::AnalysisResponse>, crate::error::ApiError> {
    api::handle_analyze(State(state.analysis), body).await
}

async fn handle_cache_stats(State(state): State<AppState>) -> Json<api::CacheStatsResponse> {
    api::handle_cache_stats(State(state.analysis)).await
}

async fn handle_cache_clear(State(state): State<AppState>) -> Json<api::CacheStatsResponse> {
    api::handle_cache_clear(State(state.analysis)).await
}
