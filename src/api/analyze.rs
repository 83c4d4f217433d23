use axum::{body::Bytes, extract::State, response::Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use skin_tone::{ScanResult, Severity};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::services::{Analysis, AnalysisService};

/// Skin tone category
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryInfo {
    /// Single letter label, A-D
    pub letter: String,
    /// Display name (e.g., "North Indian Fair")
    pub name: String,
    /// Stable identifier (e.g., "north_indian_fair")
    pub slug: String,
}

/// Rule of the classification ladder that claimed the image
#[derive(Debug, Serialize, ToSchema)]
pub struct RuleInfo {
    /// 1-based position in evaluation order
    pub position: u8,
    pub name: String,
}

/// Channel averages over all pixels
#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileInfo {
    pub average_brightness: f64,
    pub average_red: f64,
    pub average_green: f64,
    pub average_blue: f64,
}

/// Ratios the classifier looked at. Non-finite values serialize as null.
#[derive(Debug, Serialize, ToSchema)]
pub struct RatiosInfo {
    pub red_to_green: f64,
    pub blue_to_red: f64,
    pub melanin: f64,
}

/// One scored skin condition
#[derive(Debug, Serialize, ToSchema)]
pub struct ConditionInfo {
    pub name: String,
    /// Percentage, 0-100
    pub score: u8,
    /// "low", "moderate" or "high"
    pub severity: String,
}

/// Scores derived from interior pixel luminance
#[derive(Debug, Serialize, ToSchema)]
pub struct RegionInfo {
    pub dark_circles: u8,
    pub wrinkles: u8,
}

/// Response from the /api/analyze endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct AnalysisResponse {
    pub category: CategoryInfo,
    pub rule: RuleInfo,
    pub profile: ProfileInfo,
    pub ratios: RatiosInfo,
    pub conditions: Vec<ConditionInfo>,
    pub regions: RegionInfo,
    /// True when the result was taken from an earlier, similar image
    pub cache_hit: bool,
    pub width: usize,
    pub height: usize,
    pub analyzed_at: DateTime<Utc>,
}

impl AnalysisResponse {
    pub fn new(analysis: &Analysis) -> Self {
        let ScanResult {
            profile,
            classification,
            conditions,
            regions,
        } = analysis.outcome.result;
        let category = classification.category;

        Self {
            category: CategoryInfo {
                letter: category.letter().to_string(),
                name: category.name().to_string(),
                slug: category.slug().to_string(),
            },
            rule: RuleInfo {
                position: classification.rule.position(),
                name: classification.rule.slug().to_string(),
            },
            profile: ProfileInfo {
                average_brightness: profile.average_brightness,
                average_red: profile.average_red,
                average_green: profile.average_green,
                average_blue: profile.average_blue,
            },
            ratios: RatiosInfo {
                red_to_green: classification.ratios.red_to_green,
                blue_to_red: classification.ratios.blue_to_red,
                melanin: classification.ratios.melanin,
            },
            conditions: conditions
                .named()
                .iter()
                .map(|&(name, score)| ConditionInfo {
                    name: name.to_string(),
                    score,
                    severity: Severity::from_score(score).as_str().to_string(),
                })
                .collect(),
            regions: RegionInfo {
                dark_circles: regions.dark_circles,
                wrinkles: regions.wrinkles,
            },
            cache_hit: analysis.outcome.cache_hit,
            width: analysis.width,
            height: analysis.height,
            analyzed_at: analysis.analyzed_at,
        }
    }
}

/// Analyze a captured face image
///
/// The body is the raw PNG or JPEG file. If an earlier image in this session
/// is similar enough, its result is returned with `cache_hit` set.
#[utoipa::path(
    post,
    path = "/api/analyze",
    request_body(content = Vec<u8>, content_type = "application/octet-stream", description = "PNG or JPEG bytes"),
    responses(
        (status = 200, description = "Image analyzed", body = AnalysisResponse),
        (status = 400, description = "Empty or undecodable image"),
        (status = 413, description = "Image exceeds size limits"),
    ),
    tag = "Analysis"
)]
pub async fn handle_analyze(
    State(service): State<Arc<AnalysisService>>,
    body: Bytes,
) -> Result<Json<AnalysisResponse>, ApiError> {
    tracing::debug!(bytes = body.len(), "Analyze request received");

    let analysis = service.analyze(body.to_vec()).await?;
    Ok(Json(AnalysisResponse::new(&analysis)))
}
