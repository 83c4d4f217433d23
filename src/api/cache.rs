use axum::{extract::State, response::Json};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::services::{AnalysisService, SessionSnapshot};

/// Scan cache counters and settings
#[derive(Debug, Serialize, ToSchema)]
pub struct CacheStatsResponse {
    /// Entries currently held
    pub entries: usize,
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups that ran the analysis
    pub computations: u64,
    /// Entries dropped by the capacity bound
    pub evictions: u64,
    pub similarity_threshold: f64,
    pub tolerance: u8,
    /// Absent when the cache is unbounded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_entries: Option<usize>,
}

impl CacheStatsResponse {
    pub fn new(snapshot: &SessionSnapshot) -> Self {
        let SessionSnapshot { stats, options } = snapshot;
        Self {
            entries: stats.entries,
            hits: stats.hits,
            computations: stats.computations,
            evictions: stats.evictions,
            similarity_threshold: options.similarity_threshold,
            tolerance: options.tolerance,
            max_entries: options.max_entries,
        }
    }
}

/// Get scan cache statistics
#[utoipa::path(
    get,
    path = "/api/cache",
    responses(
        (status = 200, description = "Current cache statistics", body = CacheStatsResponse),
    ),
    tag = "Cache"
)]
pub async fn handle_cache_stats(
    State(service): State<Arc<AnalysisService>>,
) -> Json<CacheStatsResponse> {
    let snapshot = service.session().snapshot().await;
    Json(CacheStatsResponse::new(&snapshot))
}

/// End the scan session
///
/// Clears every cached result and returns the statistics as they were
/// before clearing.
#[utoipa::path(
    delete,
    path = "/api/cache",
    responses(
        (status = 200, description = "Cache cleared", body = CacheStatsResponse),
    ),
    tag = "Cache"
)]
pub async fn handle_cache_clear(
    State(service): State<Arc<AnalysisService>>,
) -> Json<CacheStatsResponse> {
    let snapshot = service.session().reset().await;

    tracing::info!(
        entries = snapshot.stats.entries,
        hits = snapshot.stats.hits,
        "Scan session cleared"
    );

    Json(CacheStatsResponse::new(&snapshot))
}
